use serde::{Deserialize, Serialize};

use super::common::TransactionOutputAmount;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub address: String,
    pub amount: Vec<TransactionOutputAmount>,
    pub stake_address: Option<String>,
    /// `byron` or `shelley`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub script: bool,
}

/// Lifetime totals of an address (`GET /addresses/{address}/total`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressTotal {
    pub address: String,
    pub received_sum: Vec<TransactionOutputAmount>,
    pub sent_sum: Vec<TransactionOutputAmount>,
    pub tx_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressUtxo {
    pub address: Option<String>,
    pub tx_hash: String,
    /// Deprecated by the API in favour of `output_index`.
    pub tx_index: Option<u32>,
    pub output_index: u32,
    pub amount: Vec<TransactionOutputAmount>,
    pub block: String,
    pub data_hash: Option<String>,
    pub inline_datum: Option<String>,
    pub reference_script_hash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AddressTransaction {
    pub tx_hash: String,
    pub tx_index: u32,
    pub block_height: u64,
    pub block_time: i64,
}
