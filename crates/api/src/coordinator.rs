// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workflow coordination for the account panel.
//!
//! The coordinator owns the loaded data and the open modal. It never edits
//! loaded data locally: after every confirmed mutation it reloads everything
//! from the boundary, so what is shown is always what the boundary confirmed.
//!
//! Submissions are split in two steps so a caller can drive the boundary
//! call itself:
//!
//! 1. `begin_report` / `begin_replacement` validate and mark a submission
//!    in flight
//! 2. `finish` records the outcome, closes the modal if it is still the one
//!    that submitted, and reloads on success
//!
//! `submit_report` and `submit_replacement` run both steps back to back.
//! A `Submission` dropped without `finish` (an abandoned or cancelled call)
//! releases the in-flight mark on drop, so the panel never stays busy.

use crate::error::ApiError;
use crate::handlers::{prepare_replacement, prepare_report, submit};
use crate::request_response::{Mutation, ReplaceAccountInput, ReplacementForm, ReportAccountInput};
use cuentas::{AccountStore, BoundaryError, DataAccess, FetchError, ReportRegistry, Resource};
use cuentas_domain::{
    Account, AccountId, AccountType, Client, Report, Service, User, UserId, validate_replaceable,
};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error, info};

/// Everything loaded from the boundary in one batch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    /// Every account.
    pub accounts: AccountStore,
    /// Every report.
    pub reports: ReportRegistry,
    /// Every panel user.
    pub users: Vec<User>,
    /// Every client.
    pub clients: Vec<Client>,
    /// Every service.
    pub services: Vec<Service>,
}

async fn fetch<T, F>(resource: Resource, call: F) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, BoundaryError>>,
{
    call.await.map_err(|err| FetchError::new(resource, err))
}

impl Snapshot {
    /// Loads all five collections concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first `FetchError`; nothing partial is returned.
    pub async fn load<B>(boundary: &B) -> Result<Self, FetchError>
    where
        B: DataAccess + ?Sized,
    {
        let (accounts, reports, users, clients, services) = futures::try_join!(
            AccountStore::load_all(boundary),
            ReportRegistry::load_all(boundary),
            fetch(Resource::Users, boundary.list_users()),
            fetch(Resource::Clients, boundary.list_clients()),
            fetch(Resource::Services, boundary.list_services()),
        )?;

        Ok(Self {
            accounts,
            reports,
            users,
            clients,
            services,
        })
    }

    /// Looks up a panel user's name.
    #[must_use]
    pub fn user_name(&self, user_id: UserId) -> Option<&str> {
        self.users
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| user.name.as_str())
    }

    /// Looks up the name of the client an account belongs to.
    #[must_use]
    pub fn client_name(&self, account: &Account) -> Option<&str> {
        let client_id = account.client_id?;
        self.clients
            .iter()
            .find(|client| client.id == client_id)
            .map(|client| client.name.as_str())
    }

    /// Looks up the name of the service an account belongs to.
    #[must_use]
    pub fn service_name(&self, account: &Account) -> Option<&str> {
        let service_id = account.service_id?;
        self.services
            .iter()
            .find(|service| service.id == service_id)
            .map(|service| service.name.as_str())
    }

    /// Rows of a reported-accounts table: each reported account of one type
    /// with its latest report.
    #[must_use]
    pub fn reported_rows(&self, account_type: AccountType) -> Vec<(&Account, Option<&Report>)> {
        self.accounts
            .reported(account_type)
            .into_iter()
            .map(|account| (account, self.reports.most_recent_for(account.id)))
            .collect()
    }
}

/// Where the batch load stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing has been requested yet.
    #[default]
    NotLoaded,
    /// The last batch succeeded.
    Loaded(Snapshot),
    /// The last batch failed. Earlier data is gone.
    Failed(FetchError),
}

/// The modal currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    /// No modal.
    #[default]
    None,
    /// The reporting form.
    Reporting,
    /// The replacement form for one reported account.
    Replacing {
        /// The account being replaced.
        old: Account,
    },
    /// The latest report of an account.
    ViewingDetail {
        /// The report shown.
        report: Report,
    },
}

/// Marks one submission as in flight until it is finished or dropped.
#[derive(Debug)]
struct InFlight {
    marker: Arc<AtomicU64>,
    ticket: u64,
}

impl InFlight {
    fn release(&self) {
        // A later submission may own the marker already; leave it alone then
        let _ = self
            .marker
            .compare_exchange(self.ticket, 0, Ordering::AcqRel, Ordering::Acquire);
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.release();
    }
}

/// A validated mutation waiting for its boundary response.
#[derive(Debug)]
pub struct Submission {
    generation: u64,
    acting_user: User,
    mutation: Mutation,
    in_flight: InFlight,
}

impl Submission {
    /// Returns the validated mutation.
    #[must_use]
    pub const fn mutation(&self) -> &Mutation {
        &self.mutation
    }

    /// Sends the mutation to the boundary.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::OperationFailed` with the boundary's message.
    pub async fn send<B>(&self, boundary: &B) -> Result<(), ApiError>
    where
        B: DataAccess + ?Sized,
    {
        submit(boundary, &self.mutation, &self.acting_user).await
    }
}

/// Drives loading, modal dispatch and submissions for one panel session.
pub struct Coordinator<B: ?Sized> {
    boundary: Arc<B>,
    load_state: LoadState,
    modal: Modal,
    generation: u64,
    in_flight: Arc<AtomicU64>,
    last_ticket: u64,
}

impl<B> Coordinator<B>
where
    B: DataAccess + ?Sized,
{
    /// Creates a coordinator with nothing loaded and no modal open.
    #[must_use]
    pub fn new(boundary: Arc<B>) -> Self {
        Self {
            boundary,
            load_state: LoadState::NotLoaded,
            modal: Modal::None,
            generation: 0,
            in_flight: Arc::new(AtomicU64::new(0)),
            last_ticket: 0,
        }
    }

    /// Returns the boundary this coordinator talks to.
    #[must_use]
    pub fn boundary(&self) -> Arc<B> {
        Arc::clone(&self.boundary)
    }

    /// Returns the state of the last batch load.
    #[must_use]
    pub const fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Returns the loaded data, if the last batch succeeded.
    #[must_use]
    pub const fn snapshot(&self) -> Option<&Snapshot> {
        match &self.load_state {
            LoadState::Loaded(snapshot) => Some(snapshot),
            LoadState::NotLoaded | LoadState::Failed(_) => None,
        }
    }

    /// Returns the open modal.
    #[must_use]
    pub const fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Returns true while a submission awaits its response.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire) != 0
    }

    /// Reloads every collection.
    ///
    /// A failure replaces whatever was loaded before.
    ///
    /// # Errors
    ///
    /// Returns the `FetchError` of the failed batch.
    pub async fn refresh(&mut self) -> Result<(), FetchError> {
        match Snapshot::load(&*self.boundary).await {
            Ok(snapshot) => {
                info!(
                    accounts = snapshot.accounts.len(),
                    reports = snapshot.reports.len(),
                    "Loaded account data"
                );
                self.load_state = LoadState::Loaded(snapshot);
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Failed to load account data");
                self.load_state = LoadState::Failed(err.clone());
                Err(err)
            }
        }
    }

    fn open(&mut self, modal: Modal) {
        self.generation += 1;
        self.modal = modal;
    }

    /// Opens the reporting form.
    pub fn request_report(&mut self) {
        self.open(Modal::Reporting);
    }

    /// Opens the replacement form for `old`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` unless `old` is reported. The modal is
    /// left as it was.
    pub fn request_replacement(&mut self, old: Account) -> Result<(), ApiError> {
        validate_replaceable(&old)
            .map_err(|err| ApiError::validation("cuentaId", err.to_string()))?;
        self.open(Modal::Replacing { old });
        Ok(())
    }

    /// Opens the latest report of an account.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if the account has no report on file.
    /// The modal is left as it was.
    pub fn request_detail(&mut self, account_id: AccountId) -> Result<(), ApiError> {
        let report: Report = self
            .snapshot()
            .and_then(|snapshot| snapshot.reports.most_recent_for(account_id))
            .cloned()
            .ok_or_else(|| {
                ApiError::validation("cuentaId", format!("Account {account_id} has no reports"))
            })?;
        self.open(Modal::ViewingDetail { report });
        Ok(())
    }

    /// Closes whatever modal is open.
    pub fn close(&mut self) {
        self.open(Modal::None);
    }

    /// Builds the replacement form for the open `Replacing` modal.
    #[must_use]
    pub fn replacement_form(&self) -> Option<ReplacementForm> {
        match (&self.modal, self.snapshot()) {
            (Modal::Replacing { old }, Some(snapshot)) => {
                Some(ReplacementForm::new(&snapshot.accounts, old.clone()))
            }
            _ => None,
        }
    }

    /// Accounts that may be picked in the reporting form.
    #[must_use]
    pub fn reportable_accounts(&self) -> Vec<&Account> {
        self.snapshot()
            .map(|snapshot| snapshot.accounts.active())
            .unwrap_or_default()
    }

    fn loaded_accounts(&self) -> Result<&AccountStore, ApiError> {
        match &self.load_state {
            LoadState::Loaded(snapshot) => Ok(&snapshot.accounts),
            LoadState::Failed(err) => Err(ApiError::Fetch(err.clone())),
            LoadState::NotLoaded => Err(ApiError::validation(
                "cuentas",
                "Accounts have not been loaded",
            )),
        }
    }

    fn start(&mut self, acting_user: &User, mutation: Mutation) -> Submission {
        self.last_ticket += 1;
        self.in_flight.store(self.last_ticket, Ordering::Release);
        Submission {
            generation: self.generation,
            acting_user: acting_user.clone(),
            mutation,
            in_flight: InFlight {
                marker: Arc::clone(&self.in_flight),
                ticket: self.last_ticket,
            },
        }
    }

    /// Validates a report and marks it in flight.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Busy` if a submission is already in flight, a
    /// fetch error if nothing is loaded, or `ApiError::Validation`.
    pub fn begin_report(
        &mut self,
        acting_user: &User,
        input: &ReportAccountInput,
    ) -> Result<Submission, ApiError> {
        if self.is_submitting() {
            return Err(ApiError::Busy);
        }
        let mutation: Mutation = prepare_report(self.loaded_accounts()?, acting_user, input)?;
        Ok(self.start(acting_user, mutation))
    }

    /// Validates a replacement for the open `Replacing` modal and marks it
    /// in flight.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Busy` if a submission is already in flight, a
    /// fetch error if nothing is loaded, or `ApiError::Validation`.
    pub fn begin_replacement(
        &mut self,
        acting_user: &User,
        input: &ReplaceAccountInput,
    ) -> Result<Submission, ApiError> {
        if self.is_submitting() {
            return Err(ApiError::Busy);
        }
        let Modal::Replacing { old } = &self.modal else {
            return Err(ApiError::validation(
                "cuentaId",
                "No account is selected for replacement",
            ));
        };
        let mutation: Mutation =
            prepare_replacement(self.loaded_accounts()?, acting_user, old.id, input)?;
        Ok(self.start(acting_user, mutation))
    }

    /// Records the outcome of a submission.
    ///
    /// On failure the modal stays open and the error is returned. On success
    /// the modal that submitted is closed and everything is reloaded. A modal
    /// opened after the submission started is left alone.
    ///
    /// # Errors
    ///
    /// Returns the submission's error, or a fetch error if the reload fails.
    pub async fn finish(
        &mut self,
        submission: &Submission,
        outcome: Result<(), ApiError>,
    ) -> Result<(), ApiError> {
        submission.in_flight.release();
        outcome?;

        if submission.generation == self.generation {
            self.close();
        } else {
            debug!(
                submitted = submission.generation,
                current = self.generation,
                "Modal changed while submitting, leaving it open"
            );
        }

        self.refresh().await?;
        Ok(())
    }

    /// Validates, sends and finishes a report.
    ///
    /// # Errors
    ///
    /// See `begin_report` and `finish`.
    pub async fn submit_report(
        &mut self,
        acting_user: &User,
        input: &ReportAccountInput,
    ) -> Result<(), ApiError> {
        let submission: Submission = self.begin_report(acting_user, input)?;
        let outcome: Result<(), ApiError> = submission.send(&*self.boundary).await;
        self.finish(&submission, outcome).await
    }

    /// Validates, sends and finishes a replacement.
    ///
    /// # Errors
    ///
    /// See `begin_replacement` and `finish`.
    pub async fn submit_replacement(
        &mut self,
        acting_user: &User,
        input: &ReplaceAccountInput,
    ) -> Result<(), ApiError> {
        let submission: Submission = self.begin_replacement(acting_user, input)?;
        let outcome: Result<(), ApiError> = submission.send(&*self.boundary).await;
        self.finish(&submission, outcome).await
    }
}
