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
    clippy::all
)]

use cuentas_domain::{AccountId, AccountStatus, User, UserId};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The user who performed a transition.
///
/// Every transition is attributed to an explicit acting user; there is no
/// ambient "current user".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The acting user's identifier.
    pub user_id: UserId,
    /// The acting user's display name at the time of the action.
    pub name: String,
}

impl Actor {
    /// Creates a new Actor.
    #[must_use]
    pub const fn new(user_id: UserId, name: String) -> Self {
        Self { user_id, name }
    }

    /// Attributes an action to a known user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self::new(user.id, user.name.clone())
    }
}

/// Why a transition was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// The reason given by the acting user.
    pub reason: String,
    /// Optional elaboration.
    pub detail: Option<String>,
}

impl Cause {
    /// Creates a new Cause.
    #[must_use]
    pub const fn new(reason: String, detail: Option<String>) -> Self {
        Self { reason, detail }
    }
}

/// The kinds of transition the lifecycle knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// An active account was reported.
    ReportAccount,
    /// A reported individual account was replaced.
    ReplaceIndividual,
    /// A reported complete account was replaced.
    ReplaceComplete,
}

impl ActionKind {
    /// Returns the action name used in logs and audit listings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReportAccount => "ReportAccount",
            Self::ReplaceIndividual => "ReplaceIndividual",
            Self::ReplaceComplete => "ReplaceComplete",
        }
    }
}

/// The specific action performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// What kind of transition this was.
    pub kind: ActionKind,
    /// Optional human-readable details.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(kind: ActionKind, details: Option<String>) -> Self {
        Self { kind, details }
    }
}

/// The statuses of the accounts a transition touched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Each touched account with the status it held.
    pub accounts: Vec<(AccountId, AccountStatus)>,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(accounts: Vec<(AccountId, AccountStatus)>) -> Self {
        Self { accounts }
    }

    /// Returns the status recorded for an account, if it was captured.
    #[must_use]
    pub fn status_of(&self, account_id: AccountId) -> Option<AccountStatus> {
        self.accounts
            .iter()
            .find(|(id, _)| *id == account_id)
            .map(|(_, status)| *status)
    }
}

impl std::fmt::Display for StateSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .accounts
            .iter()
            .map(|(id, status)| format!("account={id},status={status}"))
            .collect();
        write!(f, "{}", parts.join(";"))
    }
}

/// An immutable audit event representing a lifecycle transition.
///
/// Every successful transition produces exactly one audit event capturing:
/// - Who performed the action (actor)
/// - Why it was performed (cause)
/// - What action was performed (action)
/// - The touched accounts before and after the transition
/// - When it was recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The user who initiated this transition.
    pub actor: Actor,
    /// The reason for this transition.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The touched accounts before the transition.
    pub before: StateSnapshot,
    /// The touched accounts after the transition.
    pub after: StateSnapshot,
    /// When the transition was applied.
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// Once created, an audit event is immutable.
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        recorded_at: OffsetDateTime,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
            recorded_at,
        }
    }
}
