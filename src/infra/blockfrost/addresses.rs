use tracing::instrument;

use crate::domain::{
    Address, AddressService, AddressTotal, AddressTransaction, AddressUtxo, ApiError, Pagination,
};

use super::client::BlockfrostClient;

impl AddressService for BlockfrostClient {
    #[instrument(skip(self))]
    fn address(&self, address: &str) -> Result<Address, ApiError> {
        self.get(&["addresses", address])
    }

    #[instrument(skip(self))]
    fn address_total(&self, address: &str) -> Result<AddressTotal, ApiError> {
        self.get(&["addresses", address, "total"])
    }

    #[instrument(skip(self))]
    fn address_utxos(
        &self,
        address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AddressUtxo>, ApiError> {
        self.get_page(&["addresses", address, "utxos"], pagination)
    }

    #[instrument(skip(self))]
    fn address_utxos_of_asset(
        &self,
        address: &str,
        asset: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AddressUtxo>, ApiError> {
        self.get_page(&["addresses", address, "utxos", asset], pagination)
    }

    #[instrument(skip(self))]
    fn address_transactions(
        &self,
        address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AddressTransaction>, ApiError> {
        self.get_page(&["addresses", address, "transactions"], pagination)
    }
}
