//! Infrastructure layer implementations.

pub mod blockfrost;
pub mod observability;
pub mod transport;

pub use blockfrost::{BlockfrostClient, CardanoNetwork, ClientConfig};
pub use transport::{ReqwestTransport, TransportConfig};
