use serde::{Deserialize, Serialize};

/// Entry of the asset listings (`GET /assets`, `GET /assets/policy/{policy_id}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetSummary {
    /// Concatenation of the policy id and hex-encoded asset name.
    pub asset: String,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Asset {
    pub asset: String,
    pub policy_id: String,
    pub asset_name: Option<String>,
    pub fingerprint: String,
    pub quantity: String,
    pub initial_mint_tx_hash: String,
    pub mint_or_burn_count: u64,
    /// CIP-25 on-chain metadata, passed through untouched.
    pub onchain_metadata: Option<serde_json::Value>,
    pub onchain_metadata_standard: Option<String>,
    pub metadata: Option<AssetMetadata>,
}

/// Off-chain token registry metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub name: String,
    pub description: String,
    pub ticker: Option<String>,
    pub url: Option<String>,
    pub logo: Option<String>,
    pub decimals: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetHistory {
    pub tx_hash: String,
    pub amount: String,
    /// `minted` or `burned`.
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetTransaction {
    pub tx_hash: String,
    pub tx_index: u32,
    pub block_height: u64,
    pub block_time: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetAddress {
    pub address: String,
    pub quantity: String,
}
