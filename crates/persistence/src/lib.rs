// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory reference store for the account data-access boundary.
//!
//! This crate implements [`DataAccess`] over a single [`State`] guarded by an
//! async mutex. Every mutation runs `cuentas::apply` under the lock and swaps
//! in the resulting state only on success, so:
//!
//! - A report and its account transition become visible together
//! - Both sides of a replacement become visible together
//! - Concurrent mutations against the same account are serialized
//!
//! Every successful transition appends its audit event to an in-memory log.
//!
//! The store starts empty or from a JSON [`Seed`].

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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod seed;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use cuentas::{
    BoundaryError, Command, DataAccess, ReplaceAccountRequest, ReportAccountRequest, State,
    TransitionResult, apply,
};
use cuentas_audit::{Actor, AuditEvent, Cause};
use cuentas_domain::{Account, AccountId, Client, Replacement, Report, Service, User, UserId};
use std::path::Path;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub use error::PersistenceError;
pub use seed::Seed;

/// Everything the store holds, guarded as one unit.
#[derive(Debug, Default)]
struct Inner {
    state: State,
    users: Vec<User>,
    clients: Vec<Client>,
    services: Vec<Service>,
    audit_log: Vec<AuditEvent>,
}

/// An in-memory implementation of the data-access boundary.
#[derive(Debug)]
pub struct InMemoryPersistence {
    inner: Mutex<Inner>,
    clock: fn() -> OffsetDateTime,
}

impl Default for InMemoryPersistence {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl InMemoryPersistence {
    /// Creates an empty store.
    #[must_use]
    pub fn new_empty() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            clock: OffsetDateTime::now_utc,
        }
    }

    /// Creates a store from seed data.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is inconsistent.
    pub fn new_with_seed(seed: Seed) -> Result<Self, PersistenceError> {
        seed.validate()?;
        let mut state: State = State::new(seed.accounts);
        state.reports = seed.reports;

        info!(
            accounts = state.accounts.len(),
            reports = state.reports.len(),
            users = seed.users.len(),
            "Seeded in-memory store"
        );

        Ok(Self {
            inner: Mutex::new(Inner {
                state,
                users: seed.users,
                clients: seed.clients,
                services: seed.services,
                audit_log: Vec::new(),
            }),
            clock: OffsetDateTime::now_utc,
        })
    }

    /// Creates a store from a JSON seed file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds an invalid seed.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let seed: Seed = Seed::from_file(path)?;
        Self::new_with_seed(seed)
    }

    /// Replaces the clock used to timestamp reports and replacements.
    #[must_use]
    pub const fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Returns every audit event recorded so far, oldest first.
    pub async fn audit_events(&self) -> Vec<AuditEvent> {
        self.inner.lock().await.audit_log.clone()
    }

    /// Returns every replacement made so far, oldest first.
    pub async fn replacements(&self) -> Vec<Replacement> {
        self.inner.lock().await.state.replacements.clone()
    }

    /// Applies a command for a known user and commits the result.
    ///
    /// The state is only replaced when the whole transition succeeds.
    async fn transition(
        &self,
        command: Command,
        user_id: UserId,
        cause: Cause,
    ) -> Result<(), PersistenceError> {
        let mut inner = self.inner.lock().await;

        let actor: Actor = inner
            .users
            .iter()
            .find(|user| user.id == user_id)
            .map(Actor::from_user)
            .ok_or_else(|| PersistenceError::UserNotFound(user_id.value()))?;

        let result: TransitionResult =
            match apply(&inner.state, command, actor, cause, (self.clock)()) {
                Ok(result) => result,
                Err(err) => {
                    warn!(error = %err, "Transition rejected");
                    return Err(err.into());
                }
            };

        info!(
            action = result.audit_event.action.kind.as_str(),
            user_id = user_id.value(),
            before = %result.audit_event.before,
            after = %result.audit_event.after,
            "Transition applied"
        );

        inner.state = result.new_state;
        inner.audit_log.push(result.audit_event);
        Ok(())
    }

    async fn replace(
        &self,
        command: Command,
        request: ReplaceAccountRequest,
    ) -> Result<(), BoundaryError> {
        self.transition(command, request.user_id, Cause::new(request.reason, None))
            .await
            .map_err(BoundaryError::from)
    }
}

#[async_trait]
impl DataAccess for InMemoryPersistence {
    async fn list_accounts(&self) -> Result<Vec<Account>, BoundaryError> {
        let inner = self.inner.lock().await;
        debug!(count = inner.state.accounts.len(), "Listing accounts");
        Ok(inner.state.accounts.clone())
    }

    async fn list_reports(&self) -> Result<Vec<Report>, BoundaryError> {
        let inner = self.inner.lock().await;
        debug!(count = inner.state.reports.len(), "Listing reports");
        Ok(inner.state.reports.clone())
    }

    async fn list_users(&self) -> Result<Vec<User>, BoundaryError> {
        Ok(self.inner.lock().await.users.clone())
    }

    async fn list_clients(&self) -> Result<Vec<Client>, BoundaryError> {
        Ok(self.inner.lock().await.clients.clone())
    }

    async fn list_services(&self) -> Result<Vec<Service>, BoundaryError> {
        Ok(self.inner.lock().await.services.clone())
    }

    async fn report_account(
        &self,
        account_id: AccountId,
        request: ReportAccountRequest,
    ) -> Result<(), BoundaryError> {
        let command: Command = Command::ReportAccount {
            account_id,
            mark_expired: request.mark_expired,
        };
        self.transition(
            command,
            request.user_id,
            Cause::new(request.reason, request.detail),
        )
        .await
        .map_err(BoundaryError::from)
    }

    async fn replace_individual(
        &self,
        old_account_id: AccountId,
        request: ReplaceAccountRequest,
    ) -> Result<(), BoundaryError> {
        let command: Command = Command::ReplaceIndividual {
            old_account_id,
            new_account_id: request.new_account_id,
        };
        self.replace(command, request).await
    }

    async fn replace_complete(
        &self,
        old_account_id: AccountId,
        request: ReplaceAccountRequest,
    ) -> Result<(), BoundaryError> {
        let command: Command = Command::ReplaceComplete {
            old_account_id,
            new_account_id: request.new_account_id,
        };
        self.replace(command, request).await
    }
}
