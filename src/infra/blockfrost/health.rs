use tracing::instrument;

use crate::domain::{ApiError, ApiRoot, Clock, Health, HealthService};

use super::client::BlockfrostClient;

impl HealthService for BlockfrostClient {
    #[instrument(skip(self))]
    fn root(&self) -> Result<ApiRoot, ApiError> {
        self.get(&[])
    }

    #[instrument(skip(self))]
    fn health(&self) -> Result<Health, ApiError> {
        self.get(&["health"])
    }

    #[instrument(skip(self))]
    fn clock(&self) -> Result<Clock, ApiError> {
        self.get(&["health", "clock"])
    }
}
