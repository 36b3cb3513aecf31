//! Blockfrost Client
//!
//! A typed, blocking client for the Blockfrost Cardano REST API, built
//! around trait-based services and a single error type.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               Application Layer              │
//! │   BlockfrostApi bundle, pagination helpers   │
//! ├─────────────────────────────────────────────┤
//! │                 Domain Layer                 │
//! │    Models, service traits, errors (pure)     │
//! ├─────────────────────────────────────────────┤
//! │             Infrastructure Layer             │
//! │  Blockfrost client, reqwest transport, logs  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Key Features
//!
//! - **Trait-based services**: one trait per resource family (`TransactionService`, `PoolService`, ...)
//! - **Swappable transport**: every request goes through [`domain::HttpTransport`]
//! - **Uniform errors**: transport, HTTP, decoding and validation failures all surface as [`domain::ApiError`]
//! - **Validation**: pagination bounds checked locally with the `validator` crate
//! - **Logging and metrics**: `tracing` spans per call and `metrics` request counters
//! - **Security**: the project id is held in a `secrecy::SecretString`
//!
//! # Example
//!
//! ```no_run
//! use blockfrost_client::domain::{Pagination, TransactionService};
//! use blockfrost_client::infra::{BlockfrostClient, CardanoNetwork, ClientConfig};
//!
//! let client = BlockfrostClient::new(ClientConfig::new(CardanoNetwork::Mainnet, "mainnetKey"))?;
//! let tx = client.transaction("0089e962584516378463141d853f7102852e7f2a8546c2a2af6cc05c6e628a5b")?;
//! println!("fees: {}", tx.fees);
//! # let _ = Pagination::default();
//! # Ok::<(), blockfrost_client::domain::ApiError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infra;

// Test utilities are available in tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
