//! Service bundle handed to application code.
//!
//! [`BlockfrostApi`] groups every service behind its trait so that callers
//! depend on the contracts only and tests can swap any single service.

use std::sync::Arc;

use serde::Serialize;
use tracing::{instrument, warn};

use crate::domain::{
    AccountService, AddressService, ApiError, AssetService, BlockService, EpochService,
    HealthService, LedgerService, MetadataService, NetworkService, PoolService, ScriptService,
    TransactionService,
};
use crate::infra::blockfrost::{BlockfrostClient, ClientConfig};

/// Shared handle to all Blockfrost services.
///
/// Cloning is cheap; every field is an `Arc` and the clones share the same
/// implementations.
///
/// # Example
///
/// ```no_run
/// use blockfrost_client::app::BlockfrostApi;
/// use blockfrost_client::infra::{CardanoNetwork, ClientConfig};
///
/// let api = BlockfrostApi::from_config(ClientConfig::new(CardanoNetwork::Preprod, "preprodKey"))?;
/// let block = api.blocks.latest_block()?;
/// println!("tip at height {:?}", block.height);
/// # Ok::<(), blockfrost_client::domain::ApiError>(())
/// ```
#[derive(Clone)]
pub struct BlockfrostApi {
    pub transactions: Arc<dyn TransactionService>,
    pub blocks: Arc<dyn BlockService>,
    pub addresses: Arc<dyn AddressService>,
    pub accounts: Arc<dyn AccountService>,
    pub pools: Arc<dyn PoolService>,
    pub network: Arc<dyn NetworkService>,
    pub epochs: Arc<dyn EpochService>,
    pub scripts: Arc<dyn ScriptService>,
    pub assets: Arc<dyn AssetService>,
    pub metadata: Arc<dyn MetadataService>,
    pub health: Arc<dyn HealthService>,
    pub ledger: Arc<dyn LedgerService>,
}

/// Backend reachability as seen by [`BlockfrostApi::status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendStatus {
    pub healthy: bool,
    /// Server time in milliseconds, absent when the clock endpoint failed.
    pub server_time: Option<i64>,
}

impl BlockfrostApi {
    /// Wires every service to the same client.
    #[must_use]
    pub fn new(client: BlockfrostClient) -> Self {
        let client = Arc::new(client);
        Self {
            transactions: client.clone(),
            blocks: client.clone(),
            addresses: client.clone(),
            accounts: client.clone(),
            pools: client.clone(),
            network: client.clone(),
            epochs: client.clone(),
            scripts: client.clone(),
            assets: client.clone(),
            metadata: client.clone(),
            health: client.clone(),
            ledger: client,
        }
    }

    /// Builds a client from `config` and wires every service to it.
    pub fn from_config(config: ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::new(BlockfrostClient::new(config)?))
    }

    /// Replaces the transaction service.
    ///
    /// Useful in tests that want to fake only submission while keeping
    /// the rest of the bundle untouched.
    #[must_use]
    pub fn with_transactions(mut self, service: Arc<dyn TransactionService>) -> Self {
        self.transactions = service;
        self
    }

    #[must_use]
    pub fn with_health(mut self, service: Arc<dyn HealthService>) -> Self {
        self.health = service;
        self
    }

    /// Probes `/health` and `/health/clock`.
    ///
    /// Only a failing health probe is an error; a failing clock probe is
    /// logged and reported as a missing server time.
    #[instrument(skip(self))]
    pub fn status(&self) -> Result<BackendStatus, ApiError> {
        let health = self.health.health()?;
        let server_time = match self.health.clock() {
            Ok(clock) => Some(clock.server_time),
            Err(e) => {
                warn!(error = %e, "Clock probe failed");
                None
            }
        };

        Ok(BackendStatus {
            healthy: health.is_healthy,
            server_time,
        })
    }
}
