use tracing::instrument;

use crate::domain::{ApiError, Network, NetworkService};

use super::client::BlockfrostClient;

impl NetworkService for BlockfrostClient {
    #[instrument(skip(self))]
    fn network(&self) -> Result<Network, ApiError> {
        self.get(&["network"])
    }
}
