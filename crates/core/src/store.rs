// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::boundary::DataAccess;
use crate::error::{FetchError, Resource};
use cuentas_domain::{Account, AccountId, AccountStatus, AccountType, is_replacement_candidate};

/// The loaded set of accounts and the views derived from it.
///
/// Every view is a pure filter over the loaded accounts and keeps their
/// input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Wraps an already fetched set of accounts.
    #[must_use]
    pub const fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// Fetches the full current set of accounts.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` if the boundary is unreachable or answers with
    /// malformed data.
    pub async fn load_all<B>(boundary: &B) -> Result<Self, FetchError>
    where
        B: DataAccess + ?Sized,
    {
        boundary
            .list_accounts()
            .await
            .map(Self::new)
            .map_err(|err| FetchError::new(Resource::Accounts, err))
    }

    /// Returns every loaded account.
    #[must_use]
    pub fn all(&self) -> &[Account] {
        &self.accounts
    }

    /// Returns the number of loaded accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if no accounts are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Looks up an account by id.
    #[must_use]
    pub fn find(&self, account_id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == account_id)
    }

    /// Returns the accounts holding both the given status and type.
    #[must_use]
    pub fn by_status_and_type(
        &self,
        status: AccountStatus,
        account_type: AccountType,
    ) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|account| account.matches(status, account_type))
            .collect()
    }

    /// Returns the accounts holding the given status, of any type.
    #[must_use]
    pub fn by_status(&self, status: AccountStatus) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|account| account.status == status)
            .collect()
    }

    /// Accounts that can be reported.
    #[must_use]
    pub fn active(&self) -> Vec<&Account> {
        self.by_status(AccountStatus::Active)
    }

    /// Accounts held in the spare pool.
    #[must_use]
    pub fn spare(&self) -> Vec<&Account> {
        self.by_status(AccountStatus::Spare)
    }

    /// Reported accounts of one type, feeding the individual and complete report lists.
    #[must_use]
    pub fn reported(&self, account_type: AccountType) -> Vec<&Account> {
        self.by_status_and_type(AccountStatus::Reported, account_type)
    }

    /// Spare accounts that may replace `reported`.
    ///
    /// An empty list is a valid answer: there is simply nothing to offer.
    #[must_use]
    pub fn replacement_candidates(&self, reported: &Account) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|candidate| is_replacement_candidate(reported, candidate))
            .collect()
    }
}
