use tracing::instrument;

use crate::domain::{
    Account, AccountAddress, AccountDelegation, AccountHistory, AccountMir, AccountRegistration,
    AccountReward, AccountService, AccountWithdrawal, ApiError, Pagination,
    TransactionOutputAmount,
};

use super::client::BlockfrostClient;

impl AccountService for BlockfrostClient {
    #[instrument(skip(self))]
    fn account(&self, stake_address: &str) -> Result<Account, ApiError> {
        self.get(&["accounts", stake_address])
    }

    #[instrument(skip(self))]
    fn account_rewards(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AccountReward>, ApiError> {
        self.get_page(&["accounts", stake_address, "rewards"], pagination)
    }

    #[instrument(skip(self))]
    fn account_history(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AccountHistory>, ApiError> {
        self.get_page(&["accounts", stake_address, "history"], pagination)
    }

    #[instrument(skip(self))]
    fn account_delegations(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AccountDelegation>, ApiError> {
        self.get_page(&["accounts", stake_address, "delegations"], pagination)
    }

    #[instrument(skip(self))]
    fn account_registrations(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AccountRegistration>, ApiError> {
        self.get_page(&["accounts", stake_address, "registrations"], pagination)
    }

    #[instrument(skip(self))]
    fn account_withdrawals(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AccountWithdrawal>, ApiError> {
        self.get_page(&["accounts", stake_address, "withdrawals"], pagination)
    }

    #[instrument(skip(self))]
    fn account_mirs(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AccountMir>, ApiError> {
        self.get_page(&["accounts", stake_address, "mirs"], pagination)
    }

    #[instrument(skip(self))]
    fn account_addresses(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<AccountAddress>, ApiError> {
        self.get_page(&["accounts", stake_address, "addresses"], pagination)
    }

    #[instrument(skip(self))]
    fn account_assets(
        &self,
        stake_address: &str,
        pagination: &Pagination,
    ) -> Result<Vec<TransactionOutputAmount>, ApiError> {
        self.get_page(&["accounts", stake_address, "addresses", "assets"], pagination)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_utils::{MockTransport, mock_client};

    const STAKE: &str = "stake_test1uqfu74w3wh4gfzu8m6e7j987h4lq9r3t7ef5gaw497uu85qsqfy27";
    const BASE: &str = "https://cardano-testnet.blockfrost.io/api/v0";

    #[test]
    fn test_account_listing_paths() {
        let transport = Arc::new(MockTransport::new().with_response(200, "[]"));
        let client = mock_client(transport.clone());
        let page = Pagination::default();

        client.account_rewards(STAKE, &page).unwrap();
        client.account_history(STAKE, &page).unwrap();
        client.account_delegations(STAKE, &page).unwrap();
        client.account_registrations(STAKE, &page).unwrap();
        client.account_withdrawals(STAKE, &page).unwrap();
        client.account_mirs(STAKE, &page).unwrap();
        client.account_addresses(STAKE, &page).unwrap();
        client.account_assets(STAKE, &page).unwrap();

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        let expected: Vec<String> = [
            "rewards",
            "history",
            "delegations",
            "registrations",
            "withdrawals",
            "mirs",
            "addresses",
            "addresses/assets",
        ]
        .iter()
        .map(|suffix| format!("{BASE}/accounts/{STAKE}/{suffix}"))
        .collect();
        assert_eq!(urls, expected);
    }

    #[test]
    fn test_account_assets_are_amounts() {
        let transport = Arc::new(MockTransport::new().with_route(
            "/addresses/assets",
            200,
            r#"[{"unit": "d5e6bf0500378d4f0da4e8dde6becec7621cd8cbf5cbb9b87013d4cc537061636542756433343132", "quantity": "1"}]"#,
        ));
        let client = mock_client(transport);

        let assets = client.account_assets(STAKE, &Pagination::default()).unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].quantity, "1");
    }

    #[test]
    fn test_registrations_decoding() {
        let transport = Arc::new(MockTransport::new().with_response(
            200,
            r#"[
                {"tx_hash": "2dd15e0ef6e6a17841cb9541c27724072ce4d4b79b91e58432fbaa32d9572531", "action": "registered"},
                {"tx_hash": "1a0570af966fb355a7160e4f82d5a80b8681b7955f5d44bec0dce628516157f0", "action": "deregistered"}
            ]"#,
        ));
        let client = mock_client(transport);

        let registrations = client
            .account_registrations(STAKE, &Pagination::default())
            .unwrap();
        let actions: Vec<&str> = registrations.iter().map(|r| r.action.as_str()).collect();
        assert_eq!(actions, vec!["registered", "deregistered"]);
    }
}
