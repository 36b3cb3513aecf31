//! Domain traits defining contracts for the transport and the API services.
//!
//! Every service call is a blocking request/response exchange: it either
//! returns the fully decoded model(s) or an [`ApiError`]. Listing calls
//! return an empty vector when the resource has no matching entries.

use super::error::ApiError;
use super::types::{
    Account, AccountAddress, AccountDelegation, AccountHistory, AccountMir, AccountRegistration,
    AccountReward, AccountWithdrawal, Address, AddressTotal, AddressTransaction, AddressUtxo,
    ApiRoot, Asset, AssetAddress, AssetHistory, AssetSummary, AssetTransaction, Block,
    BlockAddress, Clock, Epoch, EpochParam, EpochStakeDistribution, Genesis, Health, HttpRequest,
    HttpResponse, Network, Pagination, Pool, PoolDelegator, PoolHistory, PoolListRetire,
    PoolMetadata, PoolRelay, PoolUpdate, Script, ScriptCbor, ScriptDatum, ScriptHash, ScriptJson,
    ScriptRedeemer, Transaction, TransactionDelegation, TransactionMetadataCbor,
    TransactionMetadataJson, TransactionMetadataLabel, TransactionMetadataLabelCbor,
    TransactionMetadataLabelJson, TransactionMir, TransactionOutputAmount, TransactionPoolRetire,
    TransactionPoolUpdate, TransactionRedeemer, TransactionStake, TransactionUtxo,
    TransactionWithdrawal,
};

/// HTTP collaborator performing one exchange per call.
///
/// Implementations return `Ok` for every response that was received,
/// whatever its status; only failures to obtain a response are errors.
pub trait HttpTransport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Transactions (`/txs`, `/tx/submit`)
pub trait TransactionService: Send + Sync {
    /// Get transaction content
    fn transaction(&self, hash: &str) -> Result<Transaction, ApiError>;

    /// Get transaction inputs and outputs
    fn transaction_utxos(&self, hash: &str) -> Result<TransactionUtxo, ApiError>;

    /// Get stake address certificates of a transaction
    fn transaction_stakes(&self, hash: &str) -> Result<Vec<TransactionStake>, ApiError>;

    /// Get delegation certificates of a transaction
    fn transaction_delegations(&self, hash: &str)
    -> Result<Vec<TransactionDelegation>, ApiError>;

    /// Get reward withdrawals of a transaction
    fn transaction_withdrawals(&self, hash: &str)
    -> Result<Vec<TransactionWithdrawal>, ApiError>;

    /// Get MIR certificates of a transaction
    fn transaction_mirs(&self, hash: &str) -> Result<Vec<TransactionMir>, ApiError>;

    /// Get pool registration and update certificates of a transaction
    fn transaction_pool_updates(&self, hash: &str)
    -> Result<Vec<TransactionPoolUpdate>, ApiError>;

    /// Get pool retirement certificates of a transaction
    fn transaction_pool_retires(&self, hash: &str)
    -> Result<Vec<TransactionPoolRetire>, ApiError>;

    /// Get transaction metadata as JSON
    fn transaction_metadata(&self, hash: &str) -> Result<Vec<TransactionMetadataJson>, ApiError>;

    /// Get transaction metadata as CBOR
    fn transaction_metadata_cbor(&self, hash: &str)
    -> Result<Vec<TransactionMetadataCbor>, ApiError>;

    /// Get redeemers of a transaction
    fn transaction_redeemers(&self, hash: &str) -> Result<Vec<TransactionRedeemer>, ApiError>;

    /// Submit a CBOR-serialized transaction, returning its id
    fn submit_transaction(&self, cbor: &[u8]) -> Result<String, ApiError>;
}

/// Blocks (`/blocks`)
pub trait BlockService: Send + Sync {
    fn latest_block(&self) -> Result<Block, ApiError>;

    fn latest_block_transactions(&self, pagination: &Pagination) -> Result<Vec<String>, ApiError>;

    /// Get a block by hash or height
    fn block(&self, hash_or_number: &str) -> Result<Block, ApiError>;

    fn block_in_slot(&self, slot: u64) -> Result<Block, ApiError>;

    fn block_in_epoch_slot(&self, epoch: u32, slot: u32) -> Result<Block, ApiError>;

    /// Blocks following the given one; `order` is ignored by the API
    fn next_blocks(
        &self,
        hash_or_number: &str,
        pagination: &Pagination,
    ) -> Result<Vec<Block>, ApiError>;

    /// Blocks preceding the given one; `order` is ignored by the API
    fn previous_blocks(
        &self,
        hash_or_number: &str,
        pagination: &Pagination,
    ) -> Result<Vec<Block>, ApiError>;

    /// Transaction hashes included in a block
    fn block_transactions(
        &self,
        hash_or_number: &str,
        pagination: &Pagination,
    ) -> Result<Vec<String>, ApiError>;

    fn block_addresses(
        &self,
        hash_or_number: &str,
        pagination: &Pagination,
    ) -> Result<Vec<BlockAddress>, ApiError>;
}

/// Addresses (`/addresses`)
pub trait AddressService: Send + Sync {
    fn address(&self, address: &str) -> Result<Address, ApiError>;

    fn address_total(&self, address: &str) -> Result<AddressTotal, ApiError>;

    fn address_utxos(
        &self,
        address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AddressUtxo>, ApiError>;

    fn address_utxos_of_asset(
        &self,
        address: &str,
        asset: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AddressUtxo>, ApiError>;

    fn address_transactions(
        &self,
        address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AddressTransaction>, ApiError>;
}

/// Stake accounts (`/accounts`)
pub trait AccountService: Send + Sync {
    fn account(&self, stake_address: &str) -> Result<Account, ApiError>;

    fn account_rewards(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AccountReward>, ApiError>;

    fn account_history(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AccountHistory>, ApiError>;

    fn account_delegations(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AccountDelegation>, ApiError>;

    fn account_registrations(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AccountRegistration>, ApiError>;

    fn account_withdrawals(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AccountWithdrawal>, ApiError>;

    fn account_mirs(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AccountMir>, ApiError>;

    fn account_addresses(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AccountAddress>, ApiError>;

    /// Assets held by all addresses of the account
    fn account_assets(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<TransactionOutputAmount>, ApiError>;
}

/// Stake pools (`/pools`)
pub trait PoolService: Send + Sync {
    /// Bech32 ids of all registered pools
    fn pools(&self, pagination: &Pagination) -> Result<Vec<String>, ApiError>;

    fn retired_pools(&self, pagination: &Pagination) -> Result<Vec<PoolListRetire>, ApiError>;

    fn retiring_pools(&self, pagination: &Pagination) -> Result<Vec<PoolListRetire>, ApiError>;

    fn pool(&self, pool_id: &str) -> Result<Pool, ApiError>;

    fn pool_history(
        &self,
        pool_id: &str,
        pagination: &Pagination,
    ) -> Result<Vec<PoolHistory>, ApiError>;

    fn pool_metadata(&self, pool_id: &str) -> Result<PoolMetadata, ApiError>;

    fn pool_relays(&self, pool_id: &str) -> Result<Vec<PoolRelay>, ApiError>;

    fn pool_delegators(
        &self,
        pool_id: &str,
        pagination: &Pagination,
    ) -> Result<Vec<PoolDelegator>, ApiError>;

    /// Hashes of blocks minted by the pool
    fn pool_blocks(&self, pool_id: &str, pagination: &Pagination)
    -> Result<Vec<String>, ApiError>;

    fn pool_updates(
        &self,
        pool_id: &str,
        pagination: &Pagination,
    ) -> Result<Vec<PoolUpdate>, ApiError>;
}

/// Network supply and stake (`/network`)
pub trait NetworkService: Send + Sync {
    fn network(&self) -> Result<Network, ApiError>;
}

/// Epochs (`/epochs`)
pub trait EpochService: Send + Sync {
    fn latest_epoch(&self) -> Result<Epoch, ApiError>;

    fn latest_epoch_parameters(&self) -> Result<EpochParam, ApiError>;

    fn epoch(&self, number: u32) -> Result<Epoch, ApiError>;

    fn next_epochs(&self, number: u32, pagination: &Pagination) -> Result<Vec<Epoch>, ApiError>;

    fn previous_epochs(&self, number: u32, pagination: &Pagination)
    -> Result<Vec<Epoch>, ApiError>;

    /// Active stake distribution of the epoch
    fn epoch_stakes(
        &self,
        number: u32,
        pagination: &Pagination,
    ) -> Result<Vec<EpochStakeDistribution>, ApiError>;

    fn epoch_stakes_by_pool(
        &self,
        number: u32,
        pool_id: &str,
        pagination: &Pagination,
    ) -> Result<Vec<EpochStakeDistribution>, ApiError>;

    /// Hashes of blocks minted in the epoch
    fn epoch_blocks(&self, number: u32, pagination: &Pagination)
    -> Result<Vec<String>, ApiError>;

    fn epoch_blocks_by_pool(
        &self,
        number: u32,
        pool_id: &str,
        pagination: &Pagination,
    ) -> Result<Vec<String>, ApiError>;

    fn epoch_parameters(&self, number: u32) -> Result<EpochParam, ApiError>;
}

/// Scripts and datums (`/scripts`)
pub trait ScriptService: Send + Sync {
    fn scripts(&self, pagination: &Pagination) -> Result<Vec<ScriptHash>, ApiError>;

    fn script(&self, script_hash: &str) -> Result<Script, ApiError>;

    fn script_json(&self, script_hash: &str) -> Result<ScriptJson, ApiError>;

    fn script_cbor(&self, script_hash: &str) -> Result<ScriptCbor, ApiError>;

    fn script_redeemers(
        &self,
        script_hash: &str,
        pagination: &Pagination,
    ) -> Result<Vec<ScriptRedeemer>, ApiError>;

    fn datum(&self, datum_hash: &str) -> Result<ScriptDatum, ApiError>;
}

/// Native assets (`/assets`)
pub trait AssetService: Send + Sync {
    fn assets(&self, pagination: &Pagination) -> Result<Vec<AssetSummary>, ApiError>;

    /// Get an asset by its unit (policy id + hex asset name)
    fn asset(&self, asset: &str) -> Result<Asset, ApiError>;

    fn asset_history(
        &self,
        asset: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AssetHistory>, ApiError>;

    fn asset_transactions(
        &self,
        asset: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AssetTransaction>, ApiError>;

    fn asset_addresses(
        &self,
        asset: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AssetAddress>, ApiError>;

    fn policy_assets(
        &self,
        policy_id: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AssetSummary>, ApiError>;
}

/// Transaction metadata labels (`/metadata/txs/labels`)
pub trait MetadataService: Send + Sync {
    fn metadata_labels(
        &self,
        pagination: &Pagination,
    ) -> Result<Vec<TransactionMetadataLabel>, ApiError>;

    fn metadata_label_json(
        &self,
        label: &str,
        pagination: &Pagination,
    ) -> Result<Vec<TransactionMetadataLabelJson>, ApiError>;

    fn metadata_label_cbor(
        &self,
        label: &str,
        pagination: &Pagination,
    ) -> Result<Vec<TransactionMetadataLabelCbor>, ApiError>;
}

/// Backend status (`/`, `/health`, `/health/clock`)
pub trait HealthService: Send + Sync {
    fn root(&self) -> Result<ApiRoot, ApiError>;

    fn health(&self) -> Result<Health, ApiError>;

    fn clock(&self) -> Result<Clock, ApiError>;
}

/// Ledger genesis (`/genesis`)
pub trait LedgerService: Send + Sync {
    fn genesis(&self) -> Result<Genesis, ApiError>;
}
