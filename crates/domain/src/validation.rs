// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Account, AccountStatus};

/// Validates and normalizes a required reason.
///
/// # Arguments
///
/// * `reason` - The reason as entered
///
/// # Returns
///
/// * `Ok(String)` with surrounding whitespace removed
/// * `Err(DomainError::EmptyReason)` if nothing remains after trimming
///
/// # Errors
///
/// Returns an error if the reason is empty or whitespace only.
pub fn validate_reason(reason: &str) -> Result<String, DomainError> {
    let trimmed: &str = reason.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyReason);
    }
    Ok(trimmed.to_string())
}

/// Normalizes an optional detail. Blank detail is treated as absent.
#[must_use]
pub fn normalize_detail(detail: Option<&str>) -> Option<String> {
    detail
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

/// Validates that an account may be reported.
///
/// # Errors
///
/// Returns `DomainError::AccountNotReportable` unless the account is active.
pub fn validate_reportable(account: &Account) -> Result<(), DomainError> {
    if account.status != AccountStatus::Active {
        return Err(DomainError::AccountNotReportable {
            account_id: account.id,
            status: account.status,
        });
    }
    Ok(())
}

/// Validates that an account may be replaced.
///
/// # Errors
///
/// Returns `DomainError::AccountNotReplaceable` unless the account is reported.
pub fn validate_replaceable(account: &Account) -> Result<(), DomainError> {
    if account.status != AccountStatus::Reported {
        return Err(DomainError::AccountNotReplaceable {
            account_id: account.id,
            status: account.status,
        });
    }
    Ok(())
}

/// Checks if `candidate` may replace `reported`.
///
/// This is the pure predicate behind the candidate list: a spare account of
/// the same type, distinct from the reported one. Accounts that are not
/// reported have no candidates at all.
#[must_use]
pub fn is_replacement_candidate(reported: &Account, candidate: &Account) -> bool {
    reported.status == AccountStatus::Reported
        && candidate.id != reported.id
        && candidate.status == AccountStatus::Spare
        && candidate.account_type == reported.account_type
}

/// Validates a full replacement pairing.
///
/// # Arguments
///
/// * `reported` - The account to retire
/// * `candidate` - The spare account to promote
///
/// # Errors
///
/// Returns an error if:
/// - The reported account is not in the reported state
/// - Both sides are the same account
/// - The candidate is not a spare
/// - The candidate's type differs from the reported account's type
pub fn validate_replacement(reported: &Account, candidate: &Account) -> Result<(), DomainError> {
    validate_replaceable(reported)?;

    if candidate.id == reported.id {
        return Err(DomainError::SelfReplacement(candidate.id));
    }

    if candidate.status != AccountStatus::Spare {
        return Err(DomainError::CandidateNotSpare {
            account_id: candidate.id,
            status: candidate.status,
        });
    }

    // Rule: replacement never crosses account types
    if candidate.account_type != reported.account_type {
        return Err(DomainError::AccountTypeMismatch {
            account_id: candidate.id,
            expected: reported.account_type,
            found: candidate.account_type,
        });
    }

    Ok(())
}
