use serde::{Deserialize, Serialize};

/// Stake account content (`GET /accounts/{stake_address}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Account {
    pub stake_address: String,
    pub active: bool,
    pub active_epoch: Option<u32>,
    pub controlled_amount: String,
    pub rewards_sum: String,
    pub withdrawals_sum: String,
    pub reserves_sum: String,
    pub treasury_sum: String,
    pub withdrawable_amount: String,
    pub pool_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountReward {
    pub epoch: u32,
    pub amount: String,
    pub pool_id: String,
    /// `leader`, `member`, `pool_deposit_refund`
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountHistory {
    pub active_epoch: u32,
    pub amount: String,
    pub pool_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountDelegation {
    pub active_epoch: u32,
    pub tx_hash: String,
    pub amount: String,
    pub pool_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountRegistration {
    pub tx_hash: String,
    /// `registered` or `deregistered`.
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountWithdrawal {
    pub tx_hash: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountMir {
    pub tx_hash: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountAddress {
    pub address: String,
}
