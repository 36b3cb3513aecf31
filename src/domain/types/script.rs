use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Script {
    pub script_hash: String,
    /// `timelock`, `plutusV1`, `plutusV2`, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub serialised_size: Option<u32>,
}

/// Entry of the script listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScriptHash {
    pub script_hash: String,
}

/// JSON form of a timelock script; `None` for Plutus scripts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScriptJson {
    pub json: Option<serde_json::Value>,
}

/// CBOR form of a Plutus script; `None` for timelock scripts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScriptCbor {
    pub cbor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScriptRedeemer {
    pub tx_hash: String,
    pub tx_index: u32,
    /// `spend`, `mint`, `cert` or `reward`.
    pub purpose: String,
    pub redeemer_data_hash: String,
    /// Deprecated by the API in favour of `redeemer_data_hash`.
    pub datum_hash: Option<String>,
    pub unit_mem: String,
    pub unit_steps: String,
    pub fee: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScriptDatum {
    pub json_value: serde_json::Value,
}
