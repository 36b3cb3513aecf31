//! Test utilities and mock implementations.
//!
//! This module provides a scripted transport and client helpers for use
//! in unit and integration tests.

pub mod mocks;

use std::sync::Arc;

pub use mocks::{MockConfig, MockTransport};

use crate::infra::blockfrost::{BlockfrostClient, CardanoNetwork, ClientConfig};

/// Project id used by [`mock_client`].
pub const TEST_PROJECT_ID: &str = "testnetTestProjectId";

/// Builds a testnet client on top of `transport`.
pub fn mock_client(transport: Arc<MockTransport>) -> BlockfrostClient {
    let config = ClientConfig::new(CardanoNetwork::Testnet, TEST_PROJECT_ID);
    match BlockfrostClient::with_transport(config, transport) {
        Ok(client) => client,
        Err(e) => panic!("testnet base URL must be valid: {e}"),
    }
}
