use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::TransactionOutputAmount;
use super::pool::PoolRelay;

/// Content of a transaction (`GET /txs/{hash}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub block: String,
    pub block_height: u64,
    #[serde(default)]
    pub block_time: i64,
    pub slot: u64,
    pub index: u32,
    pub output_amount: Vec<TransactionOutputAmount>,
    pub fees: String,
    pub deposit: String,
    pub size: u32,
    pub invalid_before: Option<String>,
    pub invalid_hereafter: Option<String>,
    pub utxo_count: u32,
    pub withdrawal_count: Option<u32>,
    pub mir_cert_count: Option<u32>,
    pub delegation_count: Option<u32>,
    pub stake_cert_count: Option<u32>,
    pub pool_update_count: Option<u32>,
    pub pool_retire_count: Option<u32>,
    pub asset_mint_or_burn_count: Option<u32>,
    pub redeemer_count: Option<u32>,
    pub valid_contract: Option<bool>,
}

impl Transaction {
    /// Block creation time, if `block_time` is a valid unix timestamp.
    pub fn block_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.block_time, 0)
    }
}

/// Inputs and outputs of a transaction (`GET /txs/{hash}/utxos`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionUtxo {
    pub hash: String,
    pub inputs: Vec<TransactionUtxoInputs>,
    pub outputs: Vec<TransactionUtxoOutputs>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionUtxoInputs {
    pub address: String,
    pub amount: Vec<TransactionOutputAmount>,
    pub tx_hash: String,
    pub output_index: u32,
    pub data_hash: Option<String>,
    pub inline_datum: Option<String>,
    pub reference_script_hash: Option<String>,
    pub collateral: Option<bool>,
    pub reference: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionUtxoOutputs {
    pub address: String,
    pub amount: Vec<TransactionOutputAmount>,
    pub output_index: Option<u32>,
    pub data_hash: Option<String>,
    pub inline_datum: Option<String>,
    pub collateral: Option<bool>,
    pub reference_script_hash: Option<String>,
}

/// Stake address (de)registration certificate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionStake {
    pub cert_index: u32,
    pub address: String,
    pub registration: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionDelegation {
    /// Deprecated by the API in favour of `cert_index`.
    pub index: Option<u32>,
    pub cert_index: u32,
    pub address: String,
    pub pool_id: String,
    pub active_epoch: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionWithdrawal {
    pub address: String,
    pub amount: String,
}

/// Move-instantaneous-rewards certificate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionMir {
    /// `reserve` or `treasury`.
    pub pot: String,
    pub cert_index: u32,
    pub address: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionPoolUpdate {
    pub cert_index: u32,
    pub pool_id: String,
    pub vrf_key: String,
    pub pledge: String,
    pub margin_cost: f64,
    pub fixed_cost: String,
    pub reward_account: String,
    pub owners: Vec<String>,
    pub metadata: Option<TransactionPoolUpdateMetadata>,
    pub relays: Vec<PoolRelay>,
    pub active_epoch: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionPoolUpdateMetadata {
    pub url: Option<String>,
    pub hash: Option<String>,
    pub ticker: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub homepage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionPoolRetire {
    pub cert_index: u32,
    pub pool_id: String,
    pub retiring_epoch: u32,
}

/// One metadata label of a transaction with its JSON content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionMetadataJson {
    pub label: String,
    pub json_metadata: Option<serde_json::Value>,
}

/// One metadata label of a transaction in CBOR form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionMetadataCbor {
    pub label: String,
    /// Deprecated by the API in favour of `metadata`.
    pub cbor_metadata: Option<String>,
    pub metadata: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionRedeemer {
    pub tx_index: u32,
    pub purpose: String,
    pub script_hash: String,
    pub redeemer_data_hash: String,
    pub unit_mem: String,
    pub unit_steps: String,
    pub fee: String,
}
