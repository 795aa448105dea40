// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cuentas_domain::AccountId;

/// A command represents user intent as data only.
///
/// Commands are the only way to request lifecycle transitions. The reason
/// travels separately as the audit `Cause`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Report an active account as failing.
    ReportAccount {
        /// The account to report.
        account_id: AccountId,
        /// Whether the account should also be flagged as expired.
        mark_expired: bool,
    },
    /// Retire a reported individual account and promote a spare.
    ReplaceIndividual {
        /// The reported account to retire.
        old_account_id: AccountId,
        /// The spare account to promote.
        new_account_id: AccountId,
    },
    /// Retire a reported complete account and promote a spare.
    ReplaceComplete {
        /// The reported account to retire.
        old_account_id: AccountId,
        /// The spare account to promote.
        new_account_id: AccountId,
    },
}
