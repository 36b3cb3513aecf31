use tracing::instrument;

use crate::domain::{
    ApiError, Asset, AssetAddress, AssetHistory, AssetService, AssetSummary, AssetTransaction,
    Pagination,
};

use super::client::BlockfrostClient;

impl AssetService for BlockfrostClient {
    #[instrument(skip(self))]
    fn assets(&self, pagination: &Pagination) -> Result<Vec<AssetSummary>, ApiError> {
        self.get_page(&["assets"], pagination)
    }

    #[instrument(skip(self))]
    fn asset(&self, asset: &str) -> Result<Asset, ApiError> {
        self.get(&["assets", asset])
    }

    #[instrument(skip(self))]
    fn asset_history(
        &self,
        asset: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AssetHistory>, ApiError> {
        self.get_page(&["assets", asset, "history"], pagination)
    }

    #[instrument(skip(self))]
    fn asset_transactions(
        &self,
        asset: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AssetTransaction>, ApiError> {
        self.get_page(&["assets", asset, "transactions"], pagination)
    }

    #[instrument(skip(self))]
    fn asset_addresses(
        &self,
        asset: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AssetAddress>, ApiError> {
        self.get_page(&["assets", asset, "addresses"], pagination)
    }

    #[instrument(skip(self))]
    fn policy_assets(
        &self,
        policy_id: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AssetSummary>, ApiError> {
        self.get_page(&["assets", "policy", policy_id], pagination)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_utils::{MockTransport, mock_client};

    const POLICY: &str = "b0d07d45fe9514f80213f4020e5a61241458be626841cde717cb38a7";
    const UNIT: &str = "b0d07d45fe9514f80213f4020e5a61241458be626841cde717cb38a76e7574636f696e";
    const BASE: &str = "https://cardano-testnet.blockfrost.io/api/v0";

    #[test]
    fn test_asset_without_metadata() {
        let body = format!(
            r#"{{"asset": "{UNIT}", "policy_id": "{POLICY}", "asset_name": "6e7574636f696e",
                "fingerprint": "asset1pkpwyknlvul7az0xx8czhl60pyel45rpje4z8w", "quantity": "12000",
                "initial_mint_tx_hash": "6804edf9712d2b619edb6ac86861fe93a730693183a262b165fcc1ba1bc99cad",
                "mint_or_burn_count": 1, "onchain_metadata": null, "metadata": null}}"#
        );
        let transport = Arc::new(MockTransport::new().with_response(200, body));
        let client = mock_client(transport.clone());

        let asset = client.asset(UNIT).unwrap();
        assert_eq!(asset.policy_id, POLICY);
        assert_eq!(asset.metadata, None);
        assert_eq!(asset.onchain_metadata, None);
        assert_eq!(transport.last_request().unwrap().url, format!("{BASE}/assets/{UNIT}"));
    }

    #[test]
    fn test_asset_listing_paths() {
        let transport = Arc::new(MockTransport::new().with_response(200, "[]"));
        let client = mock_client(transport.clone());
        let page = Pagination::default();

        client.assets(&page).unwrap();
        client.asset_history(UNIT, &page).unwrap();
        client.asset_transactions(UNIT, &page).unwrap();
        client.asset_addresses(UNIT, &page).unwrap();
        client.policy_assets(POLICY, &page).unwrap();

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                format!("{BASE}/assets"),
                format!("{BASE}/assets/{UNIT}/history"),
                format!("{BASE}/assets/{UNIT}/transactions"),
                format!("{BASE}/assets/{UNIT}/addresses"),
                format!("{BASE}/assets/policy/{POLICY}"),
            ]
        );
    }

    #[test]
    fn test_policy_assets_decoding() {
        let body = format!(r#"[{{"asset": "{UNIT}", "quantity": "1"}}]"#);
        let transport = Arc::new(MockTransport::new().with_response(200, body));
        let client = mock_client(transport);

        let assets = client.policy_assets(POLICY, &Pagination::default()).unwrap();
        assert_eq!(
            assets,
            vec![AssetSummary {
                asset: UNIT.to_string(),
                quantity: "1".to_string(),
            }]
        );
    }
}
