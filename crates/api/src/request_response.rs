// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Form inputs and validated mutations.
//!
//! Inputs hold exactly what an operator typed or picked, so every field may
//! be missing or blank. A [`Mutation`] only exists once an input has passed
//! validation.

use crate::error::ApiError;
use cuentas::{AccountStore, DataAccess, ReplaceAccountRequest, ReportAccountRequest};
use cuentas_domain::{Account, AccountId, AccountType};

/// What the reporting form collected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportAccountInput {
    /// The account picked from the active list.
    pub account_id: Option<AccountId>,
    /// The reason, usually one of the `ReportReason` labels.
    pub reason: String,
    /// Optional free-text detail.
    pub detail: Option<String>,
}

/// What the replacement form collected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplaceAccountInput {
    /// The spare account picked from the candidate list.
    pub new_account_id: Option<AccountId>,
    /// The reason for the replacement.
    pub reason: String,
}

/// The replacement form for one reported account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementForm {
    /// The account being replaced.
    pub old: Account,
    /// Spare accounts of the same type, in store order.
    pub candidates: Vec<Account>,
    /// The operator's current input.
    pub input: ReplaceAccountInput,
}

impl ReplacementForm {
    /// Builds the form, pre-filtering candidates by type.
    #[must_use]
    pub fn new(store: &AccountStore, old: Account) -> Self {
        let candidates: Vec<Account> = store
            .replacement_candidates(&old)
            .into_iter()
            .cloned()
            .collect();
        Self {
            old,
            candidates,
            input: ReplaceAccountInput::default(),
        }
    }

    /// Returns true if there is at least one spare to offer.
    #[must_use]
    pub fn has_candidates(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// Picks a candidate. Ids outside the candidate list are ignored.
    pub fn select(&mut self, account_id: AccountId) -> bool {
        let offered: bool = self
            .candidates
            .iter()
            .any(|candidate| candidate.id == account_id);
        if offered {
            self.input.new_account_id = Some(account_id);
        }
        offered
    }

    /// Returns true if the form may be submitted.
    ///
    /// Always false when no candidate exists.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.has_candidates()
            && self.input.new_account_id.is_some()
            && !self.input.reason.trim().is_empty()
    }
}

/// A validated mutation, ready for the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Report an active account.
    Report {
        /// The account to report.
        account_id: AccountId,
        /// The request body.
        request: ReportAccountRequest,
    },
    /// Replace a reported account with a spare.
    Replace {
        /// Selects the boundary endpoint.
        account_type: AccountType,
        /// The reported account.
        old_account_id: AccountId,
        /// The request body.
        request: ReplaceAccountRequest,
    },
}

impl Mutation {
    /// Submits the mutation.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::OperationFailed` with the boundary's message if the
    /// boundary refuses or cannot be reached.
    pub async fn send<B>(&self, boundary: &B) -> Result<(), ApiError>
    where
        B: DataAccess + ?Sized,
    {
        let result = match self {
            Self::Report {
                account_id,
                request,
            } => boundary.report_account(*account_id, request.clone()).await,
            Self::Replace {
                account_type: AccountType::Individual,
                old_account_id,
                request,
            } => {
                boundary
                    .replace_individual(*old_account_id, request.clone())
                    .await
            }
            Self::Replace {
                account_type: AccountType::Complete,
                old_account_id,
                request,
            } => {
                boundary
                    .replace_complete(*old_account_id, request.clone())
                    .await
            }
        };
        result.map_err(ApiError::from)
    }
}
