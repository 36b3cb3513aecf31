use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Network {
    pub supply: NetworkSupply,
    pub stake: NetworkStake,
}

/// Lovelace supply figures.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkSupply {
    pub max: String,
    pub total: String,
    pub circulating: String,
    pub locked: String,
    pub treasury: Option<String>,
    pub reserves: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkStake {
    pub live: String,
    pub active: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_deserialization() {
        let json = r#"{
            "supply": {
                "max": "45000000000000000",
                "total": "32890715183299160",
                "circulating": "32412601976210393",
                "locked": "125006953355",
                "treasury": "98635632000000",
                "reserves": "46635632000000"
            },
            "stake": {"live": "23204950463991654", "active": "22210233523456321"}
        }"#;
        let network: Network = serde_json::from_str(json).unwrap();

        assert_eq!(network.supply.max, "45000000000000000");
        assert_eq!(network.stake.active, "22210233523456321");
    }
}
