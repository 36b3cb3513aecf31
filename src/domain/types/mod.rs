//! Typed mirrors of the Blockfrost JSON resources.
//!
//! Models are plain value objects: every field is public, equality is
//! structural and unknown JSON keys are ignored when decoding.

pub mod account;
pub mod address;
pub mod asset;
pub mod block;
pub mod common;
pub mod epoch;
pub mod health;
pub mod http;
pub mod ledger;
pub mod metadata;
pub mod network;
pub mod pool;
pub mod script;
pub mod transaction;

pub use account::{
    Account, AccountAddress, AccountDelegation, AccountHistory, AccountMir, AccountRegistration,
    AccountReward, AccountWithdrawal,
};
pub use address::{Address, AddressTotal, AddressTransaction, AddressUtxo};
pub use asset::{
    Asset, AssetAddress, AssetHistory, AssetMetadata, AssetSummary, AssetTransaction,
};
pub use block::{Block, BlockAddress, BlockAddressTransaction};
pub use common::{MAX_PAGE, MAX_PAGE_SIZE, Order, Pagination, TransactionOutputAmount};
pub use epoch::{Epoch, EpochParam, EpochStakeDistribution};
pub use health::{ApiRoot, Clock, Health};
pub use http::{HttpMethod, HttpRequest, HttpResponse, PROJECT_ID_HEADER};
pub use ledger::Genesis;
pub use metadata::{
    TransactionMetadataLabel, TransactionMetadataLabelCbor, TransactionMetadataLabelJson,
};
pub use network::{Network, NetworkStake, NetworkSupply};
pub use pool::{
    Pool, PoolDelegator, PoolHistory, PoolListRetire, PoolMetadata, PoolRelay, PoolUpdate,
};
pub use script::{Script, ScriptCbor, ScriptDatum, ScriptHash, ScriptJson, ScriptRedeemer};
pub use transaction::{
    Transaction, TransactionDelegation, TransactionMetadataCbor, TransactionMetadataJson,
    TransactionMir, TransactionPoolRetire, TransactionPoolUpdate, TransactionPoolUpdateMetadata,
    TransactionRedeemer, TransactionStake, TransactionUtxo, TransactionUtxoInputs,
    TransactionUtxoOutputs, TransactionWithdrawal,
};
