// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod replacement_tests;

use crate::{InMemoryPersistence, Seed};
use cuentas::{ReplaceAccountRequest, ReportAccountRequest};
use cuentas_domain::{
    Account, AccountId, AccountStatus, AccountType, Client, ClientId, Service, ServiceId, User,
    UserId,
};
use time::OffsetDateTime;
use time::macros::datetime;

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

pub fn create_test_seed() -> Seed {
    Seed {
        users: vec![User::new(UserId::new(7), "Ana")],
        clients: vec![Client::new(ClientId::new(10), "Cliente Norte")],
        services: vec![Service::new(ServiceId::new(20), "Streaming")],
        accounts: vec![
            create_test_account(1, AccountType::Individual, AccountStatus::Active)
                .with_client(ClientId::new(10))
                .with_service(ServiceId::new(20)),
            create_test_account(2, AccountType::Complete, AccountStatus::Spare),
            create_test_account(3, AccountType::Individual, AccountStatus::Spare),
            create_test_account(4, AccountType::Complete, AccountStatus::Active),
        ],
        reports: Vec::new(),
    }
}

pub fn create_test_persistence() -> InMemoryPersistence {
    InMemoryPersistence::new_with_seed(create_test_seed())
        .unwrap()
        .with_clock(create_test_now)
}

pub fn create_report_request(reason: &str) -> ReportAccountRequest {
    ReportAccountRequest {
        user_id: UserId::new(7),
        reason: String::from(reason),
        detail: None,
        mark_expired: true,
    }
}

pub fn create_replace_request(new_account_id: i64) -> ReplaceAccountRequest {
    ReplaceAccountRequest {
        new_account_id: AccountId::new(new_account_id),
        user_id: UserId::new(7),
        reason: String::from("CUENTA CAIDA"),
    }
}

pub fn status_of(accounts: &[Account], id: i64) -> AccountStatus {
    accounts
        .iter()
        .find(|account| account.id == AccountId::new(id))
        .map(|account| account.status)
        .expect("account should exist")
}
