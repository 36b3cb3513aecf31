use tracing::instrument;

use crate::domain::{ApiError, Block, BlockAddress, BlockService, Pagination};

use super::client::BlockfrostClient;

impl BlockService for BlockfrostClient {
    #[instrument(skip(self))]
    fn latest_block(&self) -> Result<Block, ApiError> {
        self.get(&["blocks", "latest"])
    }

    #[instrument(skip(self))]
    fn latest_block_transactions(&self, pagination: &Pagination) -> Result<Vec<String>, ApiError> {
        self.get_page(&["blocks", "latest", "txs"], pagination)
    }

    #[instrument(skip(self))]
    fn block(&self, hash_or_number: &str) -> Result<Block, ApiError> {
        self.get(&["blocks", hash_or_number])
    }

    #[instrument(skip(self))]
    fn block_in_slot(&self, slot: u64) -> Result<Block, ApiError> {
        self.get(&["blocks", "slot", &slot.to_string()])
    }

    #[instrument(skip(self))]
    fn block_in_epoch_slot(&self, epoch: u32, slot: u32) -> Result<Block, ApiError> {
        self.get(&["blocks", "epoch", &epoch.to_string(), "slot", &slot.to_string()])
    }

    #[instrument(skip(self))]
    fn next_blocks(
        &self,
        hash_or_number: &str,
        pagination: &Pagination,
    ) -> Result<Vec<Block>, ApiError> {
        self.get_page(&["blocks", hash_or_number, "next"], pagination)
    }

    #[instrument(skip(self))]
    fn previous_blocks(
        &self,
        hash_or_number: &str,
        pagination: &Pagination,
    ) -> Result<Vec<Block>, ApiError> {
        self.get_page(&["blocks", hash_or_number, "previous"], pagination)
    }

    #[instrument(skip(self))]
    fn block_transactions(
        &self,
        hash_or_number: &str,
        pagination: &Pagination,
    ) -> Result<Vec<String>, ApiError> {
        self.get_page(&["blocks", hash_or_number, "txs"], pagination)
    }

    #[instrument(skip(self))]
    fn block_addresses(
        &self,
        hash_or_number: &str,
        pagination: &Pagination,
    ) -> Result<Vec<BlockAddress>, ApiError> {
        self.get_page(&["blocks", hash_or_number, "addresses"], pagination)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::Order;
    use crate::test_utils::{MockTransport, mock_client};

    const BASE: &str = "https://cardano-testnet.blockfrost.io/api/v0";
    const LATEST: &str = r#"{
        "time": 1641338934, "height": 15243593,
        "hash": "4ea1ba291e8eef538635a53e59fddba7810d1679631cc3aed7c8e6c4091a516a",
        "slot": 412162133, "epoch": 425, "epoch_slot": 12,
        "slot_leader": "pool1pu5jlj4q9w9jlxeu370a3c9myx47md5j5m2str0naunn2qnikdy",
        "size": 3, "tx_count": 1, "output": "128314491794", "fees": "592661",
        "block_vrf": "vrf_vk1wf2k6lhujezqcfe00l6zetxpnmh9n6mwhpmhm0dvfh3fxgmdnrfqkms8ty",
        "previous_block": "43ebccb3ac72c7cebd0d9b755a4b08412c9f5dcb81b8a0ad1e3c197d29d47b05",
        "next_block": null, "confirmations": 0
    }"#;

    #[test]
    fn test_latest_block() {
        let transport = Arc::new(MockTransport::new().with_route("/blocks/latest", 200, LATEST));
        let client = mock_client(transport.clone());

        let block = client.latest_block().unwrap();
        assert_eq!(block.height, Some(15243593));
        assert_eq!(block.next_block, None);
        assert_eq!(transport.last_request().unwrap().url, format!("{BASE}/blocks/latest"));
    }

    #[test]
    fn test_slot_lookups() {
        let transport = Arc::new(MockTransport::new().with_response(200, LATEST));
        let client = mock_client(transport.clone());

        client.block_in_slot(412162133).unwrap();
        client.block_in_epoch_slot(425, 12).unwrap();

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                format!("{BASE}/blocks/slot/412162133"),
                format!("{BASE}/blocks/epoch/425/slot/12"),
            ]
        );
    }

    #[test]
    fn test_block_listings_carry_pagination() {
        let transport = Arc::new(MockTransport::new().with_response(200, "[]"));
        let client = mock_client(transport.clone());
        let page = Pagination::new(5, 3, Order::Desc);

        assert!(client.next_blocks("15243593", &page).unwrap().is_empty());
        assert!(client.previous_blocks("15243593", &page).unwrap().is_empty());
        assert!(client.block_transactions("15243593", &page).unwrap().is_empty());
        assert!(client.block_addresses("15243593", &page).unwrap().is_empty());
        assert!(client.latest_block_transactions(&page).unwrap().is_empty());

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls[0], format!("{BASE}/blocks/15243593/next?count=5&page=3&order=desc"));
        assert_eq!(urls[1], format!("{BASE}/blocks/15243593/previous?count=5&page=3&order=desc"));
        assert_eq!(urls[2], format!("{BASE}/blocks/15243593/txs?count=5&page=3&order=desc"));
        assert_eq!(urls[3], format!("{BASE}/blocks/15243593/addresses?count=5&page=3&order=desc"));
        assert_eq!(urls[4], format!("{BASE}/blocks/latest/txs?count=5&page=3&order=desc"));
    }

    #[test]
    fn test_block_transactions_are_hashes() {
        let transport = Arc::new(MockTransport::new().with_response(
            200,
            r#"["8788591983aa73981fc92d6cddbbe643959f5a784e84b8bee0db15823f575a5b"]"#,
        ));
        let client = mock_client(transport);

        let hashes = client
            .block_transactions("4ea1ba29", &Pagination::default())
            .unwrap();
        assert_eq!(
            hashes,
            vec!["8788591983aa73981fc92d6cddbbe643959f5a784e84b8bee0db15823f575a5b"]
        );
    }
}
