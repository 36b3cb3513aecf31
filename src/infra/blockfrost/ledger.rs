use tracing::instrument;

use crate::domain::{ApiError, Genesis, LedgerService};

use super::client::BlockfrostClient;

impl LedgerService for BlockfrostClient {
    #[instrument(skip(self))]
    fn genesis(&self) -> Result<Genesis, ApiError> {
        self.get(&["genesis"])
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_utils::{MockTransport, mock_client};

    #[test]
    fn test_genesis() {
        let transport = Arc::new(MockTransport::new().with_route(
            "/genesis",
            200,
            r#"{
                "active_slots_coefficient": 0.05, "update_quorum": 5,
                "max_lovelace_supply": "45000000000000000", "network_magic": 764824073,
                "epoch_length": 432000, "system_start": 1506203091, "slots_per_kes_period": 129600,
                "slot_length": 1, "max_kes_evolutions": 62, "security_param": 2160
            }"#,
        ));
        let client = mock_client(transport);

        let genesis = client.genesis().unwrap();
        assert_eq!(genesis.network_magic, 764824073);
        assert_eq!(genesis.max_lovelace_supply, "45000000000000000");
        assert_eq!(genesis.security_param, 2160);
    }
}
