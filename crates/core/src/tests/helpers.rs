// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BoundaryError, DataAccess, ReplaceAccountRequest, ReportAccountRequest, State};
use async_trait::async_trait;
use cuentas_audit::{Actor, Cause};
use cuentas_domain::{
    Account, AccountId, AccountStatus, AccountType, Client, Report, ReportId, Service, User,
    UserId,
};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_actor() -> Actor {
    Actor::new(UserId::new(7), String::from("Ana"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("CUENTA CAIDA"), None)
}

pub fn create_test_now() -> OffsetDateTime {
    datetime!(2026-03-01 12:00:00 UTC)
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

/// A state with one account of each lifecycle position for both types.
pub fn create_test_state() -> State {
    State::new(vec![
        create_test_account(1, AccountType::Individual, AccountStatus::Active),
        create_test_account(2, AccountType::Complete, AccountStatus::Spare),
        create_test_account(3, AccountType::Individual, AccountStatus::Spare),
        create_test_account(4, AccountType::Individual, AccountStatus::Reported),
        create_test_account(5, AccountType::Complete, AccountStatus::Reported),
        create_test_account(6, AccountType::Complete, AccountStatus::Active),
    ])
}

/// A read-only boundary serving fixed collections, or failing every call.
pub struct FixedBoundary {
    pub accounts: Vec<Account>,
    pub reports: Vec<Report>,
    pub failure: Option<BoundaryError>,
}

impl FixedBoundary {
    pub fn serving(accounts: Vec<Account>, reports: Vec<Report>) -> Self {
        Self {
            accounts,
            reports,
            failure: None,
        }
    }

    pub fn failing(failure: BoundaryError) -> Self {
        Self {
            accounts: Vec::new(),
            reports: Vec::new(),
            failure: Some(failure),
        }
    }

    fn check(&self) -> Result<(), BoundaryError> {
        self.failure.clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl DataAccess for FixedBoundary {
    async fn list_accounts(&self) -> Result<Vec<Account>, BoundaryError> {
        self.check()?;
        Ok(self.accounts.clone())
    }

    async fn list_reports(&self) -> Result<Vec<Report>, BoundaryError> {
        self.check()?;
        Ok(self.reports.clone())
    }

    async fn list_users(&self) -> Result<Vec<User>, BoundaryError> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn list_clients(&self) -> Result<Vec<Client>, BoundaryError> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn list_services(&self) -> Result<Vec<Service>, BoundaryError> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn report_account(
        &self,
        _account_id: AccountId,
        _request: ReportAccountRequest,
    ) -> Result<(), BoundaryError> {
        Err(BoundaryError::Rejected(String::from("read-only")))
    }

    async fn replace_individual(
        &self,
        _old_account_id: AccountId,
        _request: ReplaceAccountRequest,
    ) -> Result<(), BoundaryError> {
        Err(BoundaryError::Rejected(String::from("read-only")))
    }

    async fn replace_complete(
        &self,
        _old_account_id: AccountId,
        _request: ReplaceAccountRequest,
    ) -> Result<(), BoundaryError> {
        Err(BoundaryError::Rejected(String::from("read-only")))
    }
}
