// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{AccountId, AccountStatus, AccountType, UserId};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The account does not exist.
    AccountNotFound(AccountId),
    /// The acting user does not exist.
    UserNotFound(UserId),
    /// Only active accounts may be reported.
    AccountNotReportable {
        /// The account that was targeted.
        account_id: AccountId,
        /// The status the account currently holds.
        status: AccountStatus,
    },
    /// Only reported accounts may be replaced.
    AccountNotReplaceable {
        /// The account that was targeted.
        account_id: AccountId,
        /// The status the account currently holds.
        status: AccountStatus,
    },
    /// A replacement candidate must come from the spare pool.
    CandidateNotSpare {
        /// The candidate account.
        account_id: AccountId,
        /// The status the candidate currently holds.
        status: AccountStatus,
    },
    /// A replacement candidate must share the reported account's type.
    AccountTypeMismatch {
        /// The candidate account.
        account_id: AccountId,
        /// The type of the reported account.
        expected: AccountType,
        /// The type of the candidate account.
        found: AccountType,
    },
    /// An account cannot replace itself.
    SelfReplacement(AccountId),
    /// The requested status transition is not part of the lifecycle.
    InvalidStatusTransition {
        /// The current status.
        from: AccountStatus,
        /// The requested status.
        to: AccountStatus,
    },
    /// A reason is required and was empty.
    EmptyReason,
    /// Account type text was not recognized.
    InvalidAccountType(String),
    /// Account status text was not recognized.
    InvalidAccountStatus(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccountNotFound(id) => write!(f, "Account {id} not found"),
            Self::UserNotFound(id) => write!(f, "User {id} not found"),
            Self::AccountNotReportable { account_id, status } => {
                write!(
                    f,
                    "Account {account_id} cannot be reported: status is {status}, expected {}",
                    AccountStatus::Active
                )
            }
            Self::AccountNotReplaceable { account_id, status } => {
                write!(
                    f,
                    "Account {account_id} cannot be replaced: status is {status}, expected {}",
                    AccountStatus::Reported
                )
            }
            Self::CandidateNotSpare { account_id, status } => {
                write!(
                    f,
                    "Account {account_id} is not a spare: status is {status}, expected {}",
                    AccountStatus::Spare
                )
            }
            Self::AccountTypeMismatch {
                account_id,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Account {account_id} has type {found}, replacement requires {expected}"
                )
            }
            Self::SelfReplacement(id) => write!(f, "Account {id} cannot replace itself"),
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Invalid status transition from {from} to {to}")
            }
            Self::EmptyReason => write!(f, "A reason is required"),
            Self::InvalidAccountType(value) => write!(f, "Invalid account type: '{value}'"),
            Self::InvalidAccountStatus(value) => write!(f, "Invalid account status: '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}
