use tracing::instrument;

use crate::domain::{ApiError, Epoch, EpochParam, EpochService, EpochStakeDistribution, Pagination};

use super::client::BlockfrostClient;

impl EpochService for BlockfrostClient {
    #[instrument(skip(self))]
    fn latest_epoch(&self) -> Result<Epoch, ApiError> {
        self.get(&["epochs", "latest"])
    }

    #[instrument(skip(self))]
    fn latest_epoch_parameters(&self) -> Result<EpochParam, ApiError> {
        self.get(&["epochs", "latest", "parameters"])
    }

    #[instrument(skip(self))]
    fn epoch(&self, number: u32) -> Result<Epoch, ApiError> {
        self.get(&["epochs", &number.to_string()])
    }

    #[instrument(skip(self))]
    fn next_epochs(&self, number: u32, pagination: &Pagination) -> Result<Vec<Epoch>, ApiError> {
        self.get_page(&["epochs", &number.to_string(), "next"], pagination)
    }

    #[instrument(skip(self))]
    fn previous_epochs(
        &self,
        number: u32,
        pagination: &Pagination,
    ) -> Result<Vec<Epoch>, ApiError> {
        self.get_page(&["epochs", &number.to_string(), "previous"], pagination)
    }

    #[instrument(skip(self))]
    fn epoch_stakes(
        &self,
        number: u32,
        pagination: &Pagination,
    ) -> Result<Vec<EpochStakeDistribution>, ApiError> {
        self.get_page(&["epochs", &number.to_string(), "stakes"], pagination)
    }

    #[instrument(skip(self))]
    fn epoch_stakes_by_pool(
        &self,
        number: u32,
        pool_id: &str,
        pagination: &Pagination,
    ) -> Result<Vec<EpochStakeDistribution>, ApiError> {
        self.get_page(&["epochs", &number.to_string(), "stakes", pool_id], pagination)
    }

    #[instrument(skip(self))]
    fn epoch_blocks(
        &self,
        number: u32,
        pagination: &Pagination,
    ) -> Result<Vec<String>, ApiError> {
        self.get_page(&["epochs", &number.to_string(), "blocks"], pagination)
    }

    #[instrument(skip(self))]
    fn epoch_blocks_by_pool(
        &self,
        number: u32,
        pool_id: &str,
        pagination: &Pagination,
    ) -> Result<Vec<String>, ApiError> {
        self.get_page(&["epochs", &number.to_string(), "blocks", pool_id], pagination)
    }

    #[instrument(skip(self))]
    fn epoch_parameters(&self, number: u32) -> Result<EpochParam, ApiError> {
        self.get(&["epochs", &number.to_string(), "parameters"])
    }
}
