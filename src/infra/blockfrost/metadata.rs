use tracing::instrument;

use crate::domain::{
    ApiError, MetadataService, Pagination, TransactionMetadataLabel, TransactionMetadataLabelCbor,
    TransactionMetadataLabelJson,
};

use super::client::BlockfrostClient;

impl MetadataService for BlockfrostClient {
    #[instrument(skip(self))]
    fn metadata_labels(
        &self,
        pagination: &Pagination,
    ) -> Result<Vec<TransactionMetadataLabel>, ApiError> {
        self.get_page(&["metadata", "txs", "labels"], pagination)
    }

    #[instrument(skip(self))]
    fn metadata_label_json(
        &self,
        label: &str,
        pagination: &Pagination,
    ) -> Result<Vec<TransactionMetadataLabelJson>, ApiError> {
        self.get_page(&["metadata", "txs", "labels", label], pagination)
    }

    #[instrument(skip(self))]
    fn metadata_label_cbor(
        &self,
        label: &str,
        pagination: &Pagination,
    ) -> Result<Vec<TransactionMetadataLabelCbor>, ApiError> {
        self.get_page(&["metadata", "txs", "labels", label, "cbor"], pagination)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_utils::{MockTransport, mock_client};

    const BASE: &str = "https://cardano-testnet.blockfrost.io/api/v0";

    #[test]
    fn test_metadata_labels() {
        let transport = Arc::new(MockTransport::new().with_response(
            200,
            r#"[{"label": "1990", "cip10": null, "count": "1"},
                {"label": "1967", "cip10": "nut.link metadata oracles registry", "count": "3"}]"#,
        ));
        let client = mock_client(transport.clone());

        let labels = client.metadata_labels(&Pagination::default()).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].cip10, None);
        assert_eq!(labels[1].count, "3");
        assert_eq!(
            transport.last_request().unwrap().url,
            format!("{BASE}/metadata/txs/labels")
        );
    }

    #[test]
    fn test_label_content_json_and_cbor() {
        let transport = Arc::new(
            MockTransport::new()
                .with_route(
                    "/labels/1990",
                    200,
                    r#"[{"tx_hash": "257d75c8ddb0434e9b63e29ebb6241add2b835a307aa33aedba2effe09ed4ec8", "json_metadata": {"ADAUSD": [{"value": "0.10409800535729975", "source": "ergoOracles"}]}}]"#,
                )
                .with_route(
                    "/labels/1990/cbor",
                    200,
                    r#"[{"tx_hash": "257d75c8ddb0434e9b63e29ebb6241add2b835a307aa33aedba2effe09ed4ec8", "cbor_metadata": null, "metadata": null}]"#,
                ),
        );
        let client = mock_client(transport);

        let json = client
            .metadata_label_json("1990", &Pagination::default())
            .unwrap();
        assert!(json[0].json_metadata.as_ref().unwrap()["ADAUSD"].is_array());

        let cbor = client
            .metadata_label_cbor("1990", &Pagination::default())
            .unwrap();
        assert_eq!(cbor[0].metadata, None);
    }
}
