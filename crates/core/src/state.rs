// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use cuentas_audit::{AuditEvent, StateSnapshot};
use cuentas_domain::{Account, AccountId, Replacement, ReplacementId, Report, ReportId};

/// The authoritative lifecycle state behind the data-access boundary.
///
/// Accounts, reports and replacements change together, so a transition is
/// applied to the whole state at once and either succeeds completely or
/// leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct State {
    /// Every account, in insertion order.
    pub accounts: Vec<Account>,
    /// Every report ever filed. Append-only.
    pub reports: Vec<Report>,
    /// Every replacement ever made. Append-only.
    pub replacements: Vec<Replacement>,
}

impl State {
    /// Creates a state holding the given accounts and no history.
    #[must_use]
    pub const fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts,
            reports: Vec::new(),
            replacements: Vec::new(),
        }
    }

    /// Looks up an account by id.
    #[must_use]
    pub fn account(&self, account_id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == account_id)
    }

    /// Returns the identifier the next report will receive.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IdentifiersExhausted` if the highest report id is
    /// already `i64::MAX`.
    pub fn next_report_id(&self) -> Result<ReportId, CoreError> {
        let max: i64 = self
            .reports
            .iter()
            .map(|report| report.id.value())
            .max()
            .unwrap_or(0);
        max.checked_add(1)
            .map(ReportId::new)
            .ok_or(CoreError::IdentifiersExhausted("report"))
    }

    /// Returns the identifier the next replacement will receive.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IdentifiersExhausted` if the highest replacement
    /// id is already `i64::MAX`.
    pub fn next_replacement_id(&self) -> Result<ReplacementId, CoreError> {
        let max: i64 = self
            .replacements
            .iter()
            .map(|replacement| replacement.id.value())
            .max()
            .unwrap_or(0);
        max.checked_add(1)
            .map(ReplacementId::new)
            .ok_or(CoreError::IdentifiersExhausted("replacement"))
    }

    /// Captures the current status of the given accounts for audit purposes.
    ///
    /// Unknown ids are skipped.
    #[must_use]
    pub fn to_snapshot(&self, account_ids: &[AccountId]) -> StateSnapshot {
        StateSnapshot::new(
            account_ids
                .iter()
                .filter_map(|id| self.account(*id))
                .map(|account| (account.id, account.status))
                .collect(),
        )
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
