use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content of a block.
///
/// `height`, `slot`, `epoch` and `epoch_slot` are null for Byron epoch
/// boundary blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Block {
    pub time: i64,
    pub height: Option<u64>,
    pub hash: String,
    pub slot: Option<u64>,
    pub epoch: Option<u32>,
    pub epoch_slot: Option<u32>,
    pub slot_leader: String,
    pub size: u32,
    pub tx_count: u32,
    pub output: Option<String>,
    pub fees: Option<String>,
    pub block_vrf: Option<String>,
    pub op_cert: Option<String>,
    pub op_cert_counter: Option<String>,
    pub previous_block: Option<String>,
    pub next_block: Option<String>,
    pub confirmations: u32,
}

impl Block {
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

/// An address affected by a block, with the transactions touching it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockAddress {
    pub address: String,
    pub transactions: Vec<BlockAddressTransaction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockAddressTransaction {
    pub tx_hash: String,
}
