//! Blockfrost REST implementation of the domain service traits.
//!
//! [`BlockfrostClient`] holds the shared request plumbing; each service
//! trait is implemented in its own file.

mod accounts;
mod addresses;
mod assets;
mod blocks;
pub mod client;
pub mod config;
mod epochs;
mod health;
mod ledger;
mod metadata;
mod network;
mod pools;
mod scripts;
mod transactions;

pub use client::BlockfrostClient;
pub use config::{
    API_URL_ENV, CardanoNetwork, ClientConfig, NETWORK_ENV, PROJECT_ID_ENV, TIMEOUT_ENV,
};
