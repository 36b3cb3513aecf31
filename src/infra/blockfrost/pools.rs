use tracing::instrument;

use crate::domain::{
    ApiError, Pagination, Pool, PoolDelegator, PoolHistory, PoolListRetire, PoolMetadata,
    PoolRelay, PoolService, PoolUpdate,
};

use super::client::BlockfrostClient;

impl PoolService for BlockfrostClient {
    #[instrument(skip(self))]
    fn pools(&self, pagination: &Pagination) -> Result<Vec<String>, ApiError> {
        self.get_page(&["pools"], pagination)
    }

    #[instrument(skip(self))]
    fn retired_pools(&self, pagination: &Pagination) -> Result<Vec<PoolListRetire>, ApiError> {
        self.get_page(&["pools", "retired"], pagination)
    }

    #[instrument(skip(self))]
    fn retiring_pools(&self, pagination: &Pagination) -> Result<Vec<PoolListRetire>, ApiError> {
        self.get_page(&["pools", "retiring"], pagination)
    }

    #[instrument(skip(self))]
    fn pool(&self, pool_id: &str) -> Result<Pool, ApiError> {
        self.get(&["pools", pool_id])
    }

    #[instrument(skip(self))]
    fn pool_history(
        &self,
        pool_id: &str,
        pagination: &Pagination,
    ) -> Result<Vec<PoolHistory>, ApiError> {
        self.get_page(&["pools", pool_id, "history"], pagination)
    }

    #[instrument(skip(self))]
    fn pool_metadata(&self, pool_id: &str) -> Result<PoolMetadata, ApiError> {
        self.get(&["pools", pool_id, "metadata"])
    }

    #[instrument(skip(self))]
    fn pool_relays(&self, pool_id: &str) -> Result<Vec<PoolRelay>, ApiError> {
        self.get(&["pools", pool_id, "relays"])
    }

    #[instrument(skip(self))]
    fn pool_delegators(
        &self,
        pool_id: &str,
        pagination: &Pagination,
    ) -> Result<Vec<PoolDelegator>, ApiError> {
        self.get_page(&["pools", pool_id, "delegators"], pagination)
    }

    #[instrument(skip(self))]
    fn pool_blocks(
        &self,
        pool_id: &str,
        pagination: &Pagination,
    ) -> Result<Vec<String>, ApiError> {
        self.get_page(&["pools", pool_id, "blocks"], pagination)
    }

    #[instrument(skip(self))]
    fn pool_updates(
        &self,
        pool_id: &str,
        pagination: &Pagination,
    ) -> Result<Vec<PoolUpdate>, ApiError> {
        self.get_page(&["pools", pool_id, "updates"], pagination)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::Order;
    use crate::test_utils::{MockTransport, mock_client};

    const POOL: &str = "pool1y24nj4qdkg35nvvnfawukauggsxrxuy74876cplmxsee29w5axc";
    const BASE: &str = "https://cardano-testnet.blockfrost.io/api/v0";

    #[test]
    fn test_pool_list() {
        let transport = Arc::new(MockTransport::new().with_response(
            200,
            r#"["pool1pu5jlj4q9w9jlxeu370a3c9myx47md5j5m2str0naunn2q3lkdy", "pool1hn7hlwrschqykupwwrtdfkvt2u4uaxvsgxyh6z63703p2knj288"]"#,
        ));
        let client = mock_client(transport.clone());

        let pools = client
            .pools(&Pagination::default().with_order(Order::Desc))
            .unwrap();
        assert_eq!(pools.len(), 2);
        assert_eq!(
            transport.last_request().unwrap().url,
            format!("{BASE}/pools?order=desc")
        );
    }

    #[test]
    fn test_retiring_and_retired() {
        let transport = Arc::new(
            MockTransport::new()
                .with_route("/pools/retired", 200, r#"[{"pool_id": "pool1a", "epoch": 225}]"#)
                .with_route("/pools/retiring", 200, r#"[{"pool_id": "pool1b", "epoch": 242}]"#),
        );
        let client = mock_client(transport);

        let retired = client.retired_pools(&Pagination::default()).unwrap();
        let retiring = client.retiring_pools(&Pagination::default()).unwrap();
        assert_eq!(retired[0].epoch, 225);
        assert_eq!(retiring[0].pool_id, "pool1b");
    }

    #[test]
    fn test_pool_without_metadata() {
        let transport = Arc::new(MockTransport::new().with_route("/metadata", 200, "{}"));
        let client = mock_client(transport);

        let metadata = client.pool_metadata(POOL).unwrap();
        assert_eq!(metadata, PoolMetadata::default());
    }

    #[test]
    fn test_pool_relays() {
        let transport = Arc::new(MockTransport::new().with_route(
            "/relays",
            200,
            r#"[{"ipv4": "4.4.4.4", "ipv6": null, "dns": "relay1.stakenuts.com", "dns_srv": null, "port": 3001}]"#,
        ));
        let client = mock_client(transport.clone());

        let relays = client.pool_relays(POOL).unwrap();
        assert_eq!(relays[0].ipv4.as_deref(), Some("4.4.4.4"));
        assert_eq!(relays[0].port, 3001);
        assert_eq!(
            transport.last_request().unwrap().url,
            format!("{BASE}/pools/{POOL}/relays")
        );
    }

    #[test]
    fn test_pool_listing_paths() {
        let transport = Arc::new(MockTransport::new().with_response(200, "[]"));
        let client = mock_client(transport.clone());
        let page = Pagination::default();

        client.pool_history(POOL, &page).unwrap();
        client.pool_delegators(POOL, &page).unwrap();
        client.pool_blocks(POOL, &page).unwrap();
        client.pool_updates(POOL, &page).unwrap();

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                format!("{BASE}/pools/{POOL}/history"),
                format!("{BASE}/pools/{POOL}/delegators"),
                format!("{BASE}/pools/{POOL}/blocks"),
                format!("{BASE}/pools/{POOL}/updates"),
            ]
        );
    }
}
