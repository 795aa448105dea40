// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{State, TransitionResult};
use cuentas_audit::{Action, ActionKind, Actor, AuditEvent, Cause, StateSnapshot};
use cuentas_domain::{
    Account, AccountId, AccountStatus, AccountType, DomainError, Replacement, Report,
    normalize_detail, validate_reason, validate_replacement, validate_reportable,
};
use time::OffsetDateTime;

/// Applies a command to the current state, producing a new state and audit event.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The user performing this action
/// * `cause` - The reason given for this action
/// * `now` - The timestamp recorded on created reports and replacements
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A referenced account does not exist
/// - The reason is empty
/// - The command violates the account lifecycle
/// - A replacement is routed to the endpoint of the other account type
/// - No report or replacement identifier is left
pub fn apply(
    state: &State,
    command: Command,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::ReportAccount {
            account_id,
            mark_expired,
        } => apply_report(state, account_id, mark_expired, actor, cause, now),
        Command::ReplaceIndividual {
            old_account_id,
            new_account_id,
        } => apply_replacement(
            state,
            AccountType::Individual,
            old_account_id,
            new_account_id,
            actor,
            cause,
            now,
        ),
        Command::ReplaceComplete {
            old_account_id,
            new_account_id,
        } => apply_replacement(
            state,
            AccountType::Complete,
            old_account_id,
            new_account_id,
            actor,
            cause,
            now,
        ),
    }
}

fn find_account(state: &State, account_id: AccountId) -> Result<&Account, DomainError> {
    state
        .account(account_id)
        .ok_or(DomainError::AccountNotFound(account_id))
}

fn set_status(accounts: &mut [Account], account_id: AccountId, status: AccountStatus) {
    if let Some(account) = accounts.iter_mut().find(|account| account.id == account_id) {
        account.status = status;
    }
}

fn apply_report(
    state: &State,
    account_id: AccountId,
    mark_expired: bool,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let account: &Account = find_account(state, account_id)?;
    validate_reportable(account)?;
    account.status.validate_transition(AccountStatus::Reported)?;

    let reason: String = validate_reason(&cause.reason)?;
    let detail: Option<String> = normalize_detail(cause.detail.as_deref());

    let before: StateSnapshot = state.to_snapshot(&[account_id]);

    let mut new_state: State = state.clone();
    if let Some(target) = new_state
        .accounts
        .iter_mut()
        .find(|account| account.id == account_id)
    {
        target.status = AccountStatus::Reported;
        target.expired |= mark_expired;
    }

    // Exactly one report per reporting transition
    let report: Report = Report {
        id: state.next_report_id()?,
        account_id,
        user_id: actor.user_id,
        created_at: now,
        reason: reason.clone(),
        detail: detail.clone(),
    };
    let details: String = format!(
        "Reported account '{}' ({}) as report {}",
        account.email, account.account_type, report.id
    );
    new_state.reports.push(report);

    let after: StateSnapshot = new_state.to_snapshot(&[account_id]);

    let audit_event: AuditEvent = AuditEvent::new(
        actor,
        Cause::new(reason, detail),
        Action::new(ActionKind::ReportAccount, Some(details)),
        before,
        after,
        now,
    );

    Ok(TransitionResult {
        new_state,
        audit_event,
    })
}

fn apply_replacement(
    state: &State,
    endpoint_type: AccountType,
    old_account_id: AccountId,
    new_account_id: AccountId,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let old_account: &Account = find_account(state, old_account_id)?;
    let new_account: &Account = find_account(state, new_account_id)?;

    // Each endpoint only handles its own account type
    if old_account.account_type != endpoint_type {
        return Err(CoreError::DomainViolation(
            DomainError::AccountTypeMismatch {
                account_id: old_account_id,
                expected: endpoint_type,
                found: old_account.account_type,
            },
        ));
    }

    validate_replacement(old_account, new_account)?;
    old_account
        .status
        .validate_transition(AccountStatus::Replaced)?;
    new_account
        .status
        .validate_transition(AccountStatus::Active)?;

    let reason: String = validate_reason(&cause.reason)?;

    let touched: [AccountId; 2] = [old_account_id, new_account_id];
    let before: StateSnapshot = state.to_snapshot(&touched);

    // Both sides change in the same new state; there is no intermediate value
    let mut new_state: State = state.clone();
    set_status(
        &mut new_state.accounts,
        old_account_id,
        AccountStatus::Replaced,
    );
    set_status(&mut new_state.accounts, new_account_id, AccountStatus::Active);

    let replacement: Replacement = Replacement {
        id: state.next_replacement_id()?,
        old_account_id,
        new_account_id,
        user_id: actor.user_id,
        reason: reason.clone(),
        created_at: now,
    };
    new_state.replacements.push(replacement);

    let after: StateSnapshot = new_state.to_snapshot(&touched);

    let kind: ActionKind = match endpoint_type {
        AccountType::Individual => ActionKind::ReplaceIndividual,
        AccountType::Complete => ActionKind::ReplaceComplete,
    };
    let details: String = format!(
        "Replaced account '{}' with '{}'",
        old_account.email, new_account.email
    );

    let audit_event: AuditEvent = AuditEvent::new(
        actor,
        Cause::new(reason, cause.detail),
        Action::new(kind, Some(details)),
        before,
        after,
        now,
    );

    Ok(TransitionResult {
        new_state,
        audit_event,
    })
}
