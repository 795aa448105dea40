// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reporting and replacement operations.
//!
//! Each operation validates against the loaded store first and only then
//! contacts the boundary. The acting user is always an explicit argument.

use crate::error::ApiError;
use crate::request_response::{Mutation, ReplaceAccountInput, ReportAccountInput};
use cuentas::{
    AccountStore, DataAccess, ReplaceAccountRequest, ReportAccountRequest,
    validate_account_exists,
};
use cuentas_domain::{
    Account, AccountId, DomainError, User, normalize_detail, validate_reason, validate_replaceable,
    validate_reportable,
};
use tracing::{info, warn};

fn invalid(field: &'static str) -> impl Fn(DomainError) -> ApiError {
    move |err| ApiError::validation(field, err.to_string())
}

/// Validates a report without contacting the boundary.
///
/// # Errors
///
/// Returns `ApiError::Validation` if:
/// - No account was picked
/// - The reason is blank
/// - The account is not in the loaded store
/// - The account is not active
pub fn prepare_report(
    store: &AccountStore,
    acting_user: &User,
    input: &ReportAccountInput,
) -> Result<Mutation, ApiError> {
    let account_id: AccountId = input
        .account_id
        .ok_or_else(|| ApiError::validation("cuentaId", "An account is required"))?;
    let reason: String = validate_reason(&input.reason).map_err(invalid("motivo"))?;

    let account: &Account =
        validate_account_exists(store, account_id).map_err(invalid("cuentaId"))?;
    validate_reportable(account).map_err(invalid("cuentaId"))?;

    Ok(Mutation::Report {
        account_id,
        request: ReportAccountRequest {
            user_id: acting_user.id,
            reason,
            detail: normalize_detail(input.detail.as_deref()),
            mark_expired: true,
        },
    })
}

/// Validates a replacement without contacting the boundary.
///
/// # Errors
///
/// Returns `ApiError::Validation` if:
/// - The old account is not loaded or not reported
/// - No spare was picked
/// - The reason is blank
/// - The spare is not among the old account's candidates
pub fn prepare_replacement(
    store: &AccountStore,
    acting_user: &User,
    old_account_id: AccountId,
    input: &ReplaceAccountInput,
) -> Result<Mutation, ApiError> {
    let old: &Account =
        validate_account_exists(store, old_account_id).map_err(invalid("cuentaId"))?;
    validate_replaceable(old).map_err(invalid("cuentaId"))?;

    let new_account_id: AccountId = input.new_account_id.ok_or_else(|| {
        ApiError::validation("cuentaNuevaId", "A replacement account is required")
    })?;
    let reason: String = validate_reason(&input.reason).map_err(invalid("motivo"))?;

    let offered: bool = store
        .replacement_candidates(old)
        .iter()
        .any(|candidate| candidate.id == new_account_id);
    if !offered {
        return Err(ApiError::validation(
            "cuentaNuevaId",
            format!(
                "Account {new_account_id} is not an available {} spare for account {old_account_id}",
                old.account_type
            ),
        ));
    }

    Ok(Mutation::Replace {
        account_type: old.account_type,
        old_account_id,
        request: ReplaceAccountRequest {
            new_account_id,
            user_id: acting_user.id,
            reason,
        },
    })
}

/// Reports an active account.
///
/// On success the caller must reload; nothing here changes local state.
///
/// # Errors
///
/// Returns `ApiError::Validation` for bad input, or
/// `ApiError::OperationFailed` with the boundary's message.
pub async fn report_account<B>(
    boundary: &B,
    store: &AccountStore,
    acting_user: &User,
    input: &ReportAccountInput,
) -> Result<(), ApiError>
where
    B: DataAccess + ?Sized,
{
    let mutation: Mutation = prepare_report(store, acting_user, input)?;
    submit(boundary, &mutation, acting_user).await
}

/// Replaces a reported account with a spare of the same type.
///
/// The boundary endpoint is chosen from the old account's type.
///
/// # Errors
///
/// Returns `ApiError::Validation` for bad input, or
/// `ApiError::OperationFailed` with the boundary's message.
pub async fn replace_account<B>(
    boundary: &B,
    store: &AccountStore,
    acting_user: &User,
    old_account_id: AccountId,
    input: &ReplaceAccountInput,
) -> Result<(), ApiError>
where
    B: DataAccess + ?Sized,
{
    let mutation: Mutation = prepare_replacement(store, acting_user, old_account_id, input)?;
    submit(boundary, &mutation, acting_user).await
}

pub(crate) async fn submit<B>(
    boundary: &B,
    mutation: &Mutation,
    acting_user: &User,
) -> Result<(), ApiError>
where
    B: DataAccess + ?Sized,
{
    match mutation.send(boundary).await {
        Ok(()) => {
            info!(user_id = acting_user.id.value(), ?mutation, "Mutation accepted");
            Ok(())
        }
        Err(err) => {
            warn!(user_id = acting_user.id.value(), error = %err, "Mutation failed");
            Err(err)
        }
    }
}
