use tracing::{info, instrument};

use crate::domain::{
    ApiError, Transaction, TransactionDelegation, TransactionMetadataCbor,
    TransactionMetadataJson, TransactionMir, TransactionPoolRetire, TransactionPoolUpdate,
    TransactionRedeemer, TransactionService, TransactionStake, TransactionUtxo,
    TransactionWithdrawal,
};

use super::client::BlockfrostClient;

impl TransactionService for BlockfrostClient {
    #[instrument(skip(self))]
    fn transaction(&self, hash: &str) -> Result<Transaction, ApiError> {
        self.get(&["txs", hash])
    }

    #[instrument(skip(self))]
    fn transaction_utxos(&self, hash: &str) -> Result<TransactionUtxo, ApiError> {
        self.get(&["txs", hash, "utxos"])
    }

    #[instrument(skip(self))]
    fn transaction_stakes(&self, hash: &str) -> Result<Vec<TransactionStake>, ApiError> {
        self.get(&["txs", hash, "stakes"])
    }

    #[instrument(skip(self))]
    fn transaction_delegations(
        &self,
        hash: &str,
    ) -> Result<Vec<TransactionDelegation>, ApiError> {
        self.get(&["txs", hash, "delegations"])
    }

    #[instrument(skip(self))]
    fn transaction_withdrawals(
        &self,
        hash: &str,
    ) -> Result<Vec<TransactionWithdrawal>, ApiError> {
        self.get(&["txs", hash, "withdrawals"])
    }

    #[instrument(skip(self))]
    fn transaction_mirs(&self, hash: &str) -> Result<Vec<TransactionMir>, ApiError> {
        self.get(&["txs", hash, "mirs"])
    }

    #[instrument(skip(self))]
    fn transaction_pool_updates(
        &self,
        hash: &str,
    ) -> Result<Vec<TransactionPoolUpdate>, ApiError> {
        self.get(&["txs", hash, "pool_updates"])
    }

    #[instrument(skip(self))]
    fn transaction_pool_retires(
        &self,
        hash: &str,
    ) -> Result<Vec<TransactionPoolRetire>, ApiError> {
        self.get(&["txs", hash, "pool_retires"])
    }

    #[instrument(skip(self))]
    fn transaction_metadata(&self, hash: &str) -> Result<Vec<TransactionMetadataJson>, ApiError> {
        self.get(&["txs", hash, "metadata"])
    }

    #[instrument(skip(self))]
    fn transaction_metadata_cbor(
        &self,
        hash: &str,
    ) -> Result<Vec<TransactionMetadataCbor>, ApiError> {
        self.get(&["txs", hash, "metadata", "cbor"])
    }

    #[instrument(skip(self))]
    fn transaction_redeemers(&self, hash: &str) -> Result<Vec<TransactionRedeemer>, ApiError> {
        self.get(&["txs", hash, "redeemers"])
    }

    #[instrument(skip(self, cbor), fields(bytes = cbor.len()))]
    fn submit_transaction(&self, cbor: &[u8]) -> Result<String, ApiError> {
        let tx_id = self.post_cbor(&["tx", "submit"], cbor)?;
        info!(tx_id = %tx_id, "Transaction submitted");
        Ok(tx_id)
    }
}
