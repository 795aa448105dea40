// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use async_trait::async_trait;
use cuentas::{BoundaryError, DataAccess, ReplaceAccountRequest, ReportAccountRequest};
use cuentas_domain::{
    Account, AccountId, AccountStatus, AccountType, Client, ClientId, Report, ReportId, Service,
    ServiceId, User, UserId,
};
use cuentas_persistence::{InMemoryPersistence, Seed};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{ReplaceAccountInput, ReportAccountInput};

pub fn create_test_now() -> OffsetDateTime {
    datetime!(2026-03-01 12:00:00 UTC)
}

pub fn create_test_user() -> User {
    User::new(UserId::new(7), "Ana")
}

pub fn create_test_account(id: i64, account_type: AccountType, status: AccountStatus) -> Account {
    Account::new(
        AccountId::new(id),
        &format!("cuenta{id}@example.com"),
        account_type,
        status,
    )
}

pub fn create_test_report(id: i64, account_id: i64, created_at: OffsetDateTime) -> Report {
    Report {
        id: ReportId::new(id),
        account_id: AccountId::new(account_id),
        user_id: UserId::new(7),
        created_at,
        reason: String::from("CUENTA CAIDA"),
        detail: None,
    }
}

/// Accounts 1 and 4 are active, 2 and 3 are spares, 5 and 6 are reported.
pub fn create_test_seed() -> Seed {
    Seed {
        users: vec![create_test_user()],
        clients: vec![Client::new(ClientId::new(10), "Cliente Norte")],
        services: vec![Service::new(ServiceId::new(20), "Streaming")],
        accounts: vec![
            create_test_account(1, AccountType::Individual, AccountStatus::Active)
                .with_client(ClientId::new(10))
                .with_service(ServiceId::new(20)),
            create_test_account(2, AccountType::Complete, AccountStatus::Spare),
            create_test_account(3, AccountType::Individual, AccountStatus::Spare),
            create_test_account(4, AccountType::Complete, AccountStatus::Active),
            create_test_account(5, AccountType::Individual, AccountStatus::Reported),
            create_test_account(6, AccountType::Complete, AccountStatus::Reported),
        ],
        reports: vec![
            create_test_report(1, 5, datetime!(2026-02-01 09:00:00 UTC)),
            create_test_report(2, 5, datetime!(2026-02-10 09:00:00 UTC)),
            create_test_report(3, 6, datetime!(2026-02-05 09:00:00 UTC)),
        ],
    }
}

pub fn create_test_persistence() -> InMemoryPersistence {
    InMemoryPersistence::new_with_seed(create_test_seed())
        .unwrap()
        .with_clock(create_test_now)
}

pub fn create_report_input(account_id: i64, reason: &str) -> ReportAccountInput {
    ReportAccountInput {
        account_id: Some(AccountId::new(account_id)),
        reason: String::from(reason),
        detail: None,
    }
}

pub fn create_replace_input(new_account_id: i64) -> ReplaceAccountInput {
    ReplaceAccountInput {
        new_account_id: Some(AccountId::new(new_account_id)),
        reason: String::from("CUENTA CAIDA"),
    }
}

/// Wraps the in-memory store and fails on demand.
///
/// Counts every mutation that reaches the inner store.
pub struct FlakyBoundary {
    pub inner: InMemoryPersistence,
    pub fail_reports: AtomicBool,
    pub reject_mutations: Option<String>,
    pub mutations: AtomicUsize,
}

impl FlakyBoundary {
    pub fn new(inner: InMemoryPersistence) -> Self {
        Self {
            inner,
            fail_reports: AtomicBool::new(false),
            reject_mutations: None,
            mutations: AtomicUsize::new(0),
        }
    }

    pub fn rejecting(inner: InMemoryPersistence, message: &str) -> Self {
        Self {
            reject_mutations: Some(String::from(message)),
            ..Self::new(inner)
        }
    }

    pub fn set_fail_reports(&self, fail: bool) {
        self.fail_reports.store(fail, Ordering::SeqCst);
    }

    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }

    fn check_mutation(&self) -> Result<(), BoundaryError> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        self.reject_mutations
            .clone()
            .map_or(Ok(()), |message| Err(BoundaryError::Rejected(message)))
    }
}

#[async_trait]
impl DataAccess for FlakyBoundary {
    async fn list_accounts(&self) -> Result<Vec<Account>, BoundaryError> {
        self.inner.list_accounts().await
    }

    async fn list_reports(&self) -> Result<Vec<Report>, BoundaryError> {
        if self.fail_reports.load(Ordering::SeqCst) {
            return Err(BoundaryError::Unreachable(String::from(
                "connection refused",
            )));
        }
        self.inner.list_reports().await
    }

    async fn list_users(&self) -> Result<Vec<User>, BoundaryError> {
        self.inner.list_users().await
    }

    async fn list_clients(&self) -> Result<Vec<Client>, BoundaryError> {
        self.inner.list_clients().await
    }

    async fn list_services(&self) -> Result<Vec<Service>, BoundaryError> {
        self.inner.list_services().await
    }

    async fn report_account(
        &self,
        account_id: AccountId,
        request: ReportAccountRequest,
    ) -> Result<(), BoundaryError> {
        self.check_mutation()?;
        self.inner.report_account(account_id, request).await
    }

    async fn replace_individual(
        &self,
        old_account_id: AccountId,
        request: ReplaceAccountRequest,
    ) -> Result<(), BoundaryError> {
        self.check_mutation()?;
        self.inner.replace_individual(old_account_id, request).await
    }

    async fn replace_complete(
        &self,
        old_account_id: AccountId,
        request: ReplaceAccountRequest,
    ) -> Result<(), BoundaryError> {
        self.check_mutation()?;
        self.inner.replace_complete(old_account_id, request).await
    }
}
