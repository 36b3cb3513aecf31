use serde::{Deserialize, Serialize};

/// A transaction metadata label with its usage count.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionMetadataLabel {
    pub label: String,
    /// CIP-10 registered purpose of the label, if any.
    pub cip10: Option<String>,
    pub count: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionMetadataLabelJson {
    pub tx_hash: String,
    pub json_metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionMetadataLabelCbor {
    pub tx_hash: String,
    /// Deprecated by the API in favour of `metadata`.
    pub cbor_metadata: Option<String>,
    pub metadata: Option<String>,
}
