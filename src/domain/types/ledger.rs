use serde::{Deserialize, Serialize};

/// Shelley genesis parameters of the network.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Genesis {
    pub active_slots_coefficient: f64,
    pub update_quorum: u32,
    pub max_lovelace_supply: String,
    pub network_magic: u32,
    pub epoch_length: u32,
    pub system_start: i64,
    pub slots_per_kes_period: u32,
    pub slot_length: u32,
    pub max_kes_evolutions: u32,
    pub security_param: u32,
}
