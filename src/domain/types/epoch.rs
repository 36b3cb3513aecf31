use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Epoch {
    pub epoch: u32,
    pub start_time: i64,
    pub end_time: i64,
    pub first_block_time: i64,
    pub last_block_time: i64,
    pub block_count: u32,
    pub tx_count: u64,
    pub output: String,
    pub fees: String,
    /// Null for epochs that have not reached the stake snapshot yet.
    pub active_stake: Option<String>,
}

/// Protocol parameters in effect during an epoch.
///
/// Alonzo-era parameters are null for earlier epochs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EpochParam {
    pub epoch: u32,
    pub min_fee_a: u64,
    pub min_fee_b: u64,
    pub max_block_size: u32,
    pub max_tx_size: u32,
    pub max_block_header_size: u32,
    pub key_deposit: String,
    pub pool_deposit: String,
    pub e_max: u32,
    pub n_opt: u32,
    pub a0: f64,
    pub rho: f64,
    pub tau: f64,
    pub decentralisation_param: f64,
    pub extra_entropy: Option<serde_json::Value>,
    pub protocol_major_ver: u32,
    pub protocol_minor_ver: u32,
    pub min_utxo: String,
    pub min_pool_cost: String,
    pub nonce: String,
    pub cost_models: Option<serde_json::Value>,
    pub price_mem: Option<f64>,
    pub price_step: Option<f64>,
    pub max_tx_ex_mem: Option<String>,
    pub max_tx_ex_steps: Option<String>,
    pub max_block_ex_mem: Option<String>,
    pub max_block_ex_steps: Option<String>,
    pub max_val_size: Option<String>,
    pub collateral_percent: Option<u32>,
    pub max_collateral_inputs: Option<u32>,
    pub coins_per_utxo_size: Option<String>,
}

/// Stake of one account delegated to one pool in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EpochStakeDistribution {
    pub stake_address: String,
    /// Absent when listing the stakes of a single pool.
    pub pool_id: Option<String>,
    pub amount: String,
}
