//! Domain layer containing the API models, service traits, and error definitions.

pub mod error;
pub mod traits;
pub mod types;

pub use error::{ApiError, BoxError, ConfigError, ErrorResponse, ValidationError};
pub use traits::{
    AccountService, AddressService, AssetService, BlockService, EpochService, HealthService,
    HttpTransport, LedgerService, MetadataService, NetworkService, PoolService, ScriptService,
    TransactionService,
};
pub use types::*;
