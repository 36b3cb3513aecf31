use serde::{Deserialize, Serialize};

/// Stake pool content (`GET /pools/{pool_id}`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pool {
    pub pool_id: String,
    pub hex: String,
    pub vrf_key: String,
    pub blocks_minted: u64,
    pub blocks_epoch: Option<u64>,
    pub live_stake: String,
    pub live_size: f64,
    pub live_saturation: f64,
    pub live_delegators: u64,
    pub active_stake: String,
    pub active_size: f64,
    pub declared_pledge: String,
    pub live_pledge: String,
    pub margin_cost: f64,
    pub fixed_cost: String,
    pub reward_account: String,
    pub owners: Vec<String>,
    pub registration: Vec<String>,
    pub retirement: Vec<String>,
}

/// Pool id together with its (planned) retirement epoch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoolListRetire {
    pub pool_id: String,
    pub epoch: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PoolHistory {
    pub epoch: u32,
    pub blocks: u64,
    pub active_stake: String,
    pub active_size: f64,
    pub delegators_count: u64,
    pub rewards: String,
    pub fees: String,
}

/// Off-chain pool metadata.
///
/// The API answers `{}` for pools that never registered metadata, so every
/// field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoolMetadata {
    pub pool_id: Option<String>,
    pub hex: Option<String>,
    pub url: Option<String>,
    pub hash: Option<String>,
    pub ticker: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub homepage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoolRelay {
    pub ipv4: Option<String>,
    pub ipv6: Option<String>,
    pub dns: Option<String>,
    pub dns_srv: Option<String>,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoolDelegator {
    pub address: String,
    pub live_stake: String,
}

/// A registration or deregistration certificate of a pool.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PoolUpdate {
    pub tx_hash: String,
    pub cert_index: u32,
    /// `registered` or `deregistered`.
    pub action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pool_metadata() {
        let metadata: PoolMetadata = serde_json::from_str("{}").unwrap();
        assert_eq!(metadata, PoolMetadata::default());
    }

    #[test]
    fn test_pool_deserialization() {
        let json = r#"{
            "pool_id": "pool1pu5jlj4q9w9jlxeu370a3c9myx47md5j5m2str0naunn2q3lkdy",
            "hex": "0f292fcaa02b8b2f9b3c8f9fd8e0bb21abedb692a6d5058df3ef2735",
            "vrf_key": "0b5245f9934ec2151116fb8ec00f35fd00e0aa3b075c4ed12cce440f999d8233",
            "blocks_minted": 69,
            "blocks_epoch": 4,
            "live_stake": "6900000000",
            "live_size": 0.42,
            "live_saturation": 0.93,
            "live_delegators": 127,
            "active_stake": "4200000000",
            "active_size": 0.43,
            "declared_pledge": "5000000000",
            "live_pledge": "5000000001",
            "margin_cost": 0.05,
            "fixed_cost": "340000000",
            "reward_account": "stake1uxkptsa4lkr55jleztw43t37vgdn88l6ghclfwuxld2eykgpgvg3f",
            "owners": ["stake1u98nnlkvkk23vtvf9273uq7cph5ww6u2yq2389psuqet90sv4xv9v"],
            "registration": ["9f83e5484f543e05b52e99988272a31da373f3aab4c064c76db96643a355d9dc"],
            "retirement": []
        }"#;
        let pool: Pool = serde_json::from_str(json).unwrap();

        assert_eq!(pool.blocks_minted, 69);
        assert_eq!(pool.live_saturation, 0.93);
        assert!(pool.retirement.is_empty());
    }

    #[test]
    fn test_pool_ratios_survive_json_round_trip() {
        // xorshift64 sweep over [0, 1) plus a value that used to drift by one ULP
        let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
        let mut ratios = vec![0.9856906946328695, 0.1 + 0.2, f64::MIN_POSITIVE];
        for _ in 0..20_000 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            ratios.push((state >> 11) as f64 / (1u64 << 53) as f64);
        }

        for ratio in ratios {
            let pool = Pool {
                live_size: ratio,
                live_saturation: ratio,
                active_size: ratio / 3.0,
                margin_cost: ratio,
                ..Default::default()
            };
            let encoded = serde_json::to_string(&pool).unwrap();
            let decoded: Pool = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, pool, "ratio {ratio:?} changed on round trip");
        }
    }

    #[test]
    fn test_pool_history_round_trip() {
        let history = PoolHistory {
            epoch: 233,
            blocks: 22,
            active_stake: "20485965693569".to_string(),
            active_size: 1.2345e-7,
            delegators_count: 115,
            rewards: "206936253674159".to_string(),
            fees: "1290968354".to_string(),
        };

        let decoded: PoolHistory =
            serde_json::from_str(&serde_json::to_string(&history).unwrap()).unwrap();
        assert_eq!(decoded, history);
    }
}
