// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod boundary;
mod command;
mod error;
mod registry;
mod state;
mod store;

#[cfg(test)]
mod tests;

use cuentas_domain::{Account, AccountId, DomainError};

// Re-export public types and functions
pub use apply::apply;
pub use boundary::{DataAccess, ReplaceAccountRequest, ReportAccountRequest};
pub use command::Command;
pub use error::{BoundaryError, CoreError, FetchError, Resource};
pub use registry::ReportRegistry;
pub use state::{State, TransitionResult};
pub use store::AccountStore;

/// Validates that an account exists in the loaded store.
///
/// This is a read-only validation that does not create audit events.
///
/// # Arguments
///
/// * `store` - The loaded accounts
/// * `account_id` - The account to look up
///
/// # Returns
///
/// * `Ok(&Account)` if the account is loaded
/// * `Err(DomainError::AccountNotFound)` if it is not
///
/// # Errors
///
/// Returns an error if the account is not part of the loaded store.
pub fn validate_account_exists(
    store: &AccountStore,
    account_id: AccountId,
) -> Result<&Account, DomainError> {
    store
        .find(account_id)
        .ok_or(DomainError::AccountNotFound(account_id))
}
