use tracing::instrument;

use crate::domain::{
    ApiError, Pagination, Script, ScriptCbor, ScriptDatum, ScriptHash, ScriptJson, ScriptRedeemer,
    ScriptService,
};

use super::client::BlockfrostClient;

impl ScriptService for BlockfrostClient {
    #[instrument(skip(self))]
    fn scripts(&self, pagination: &Pagination) -> Result<Vec<ScriptHash>, ApiError> {
        self.get_page(&["scripts"], pagination)
    }

    #[instrument(skip(self))]
    fn script(&self, script_hash: &str) -> Result<Script, ApiError> {
        self.get(&["scripts", script_hash])
    }

    #[instrument(skip(self))]
    fn script_json(&self, script_hash: &str) -> Result<ScriptJson, ApiError> {
        self.get(&["scripts", script_hash, "json"])
    }

    #[instrument(skip(self))]
    fn script_cbor(&self, script_hash: &str) -> Result<ScriptCbor, ApiError> {
        self.get(&["scripts", script_hash, "cbor"])
    }

    #[instrument(skip(self))]
    fn script_redeemers(
        &self,
        script_hash: &str,
        pagination: &Pagination,
    ) -> Result<Vec<ScriptRedeemer>, ApiError> {
        self.get_page(&["scripts", script_hash, "redeemers"], pagination)
    }

    #[instrument(skip(self))]
    fn datum(&self, datum_hash: &str) -> Result<ScriptDatum, ApiError> {
        self.get(&["scripts", "datum", datum_hash])
    }
}
