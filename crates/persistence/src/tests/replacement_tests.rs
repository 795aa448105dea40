// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::InMemoryPersistence;
use crate::tests::{
    create_replace_request, create_report_request, create_test_persistence, status_of,
};
use cuentas::{BoundaryError, DataAccess};
use cuentas_audit::{ActionKind, AuditEvent};
use cuentas_domain::{Account, AccountId, AccountStatus, Replacement};

async fn create_reported_persistence() -> InMemoryPersistence {
    let persistence: InMemoryPersistence = create_test_persistence();
    persistence
        .report_account(AccountId::new(1), create_report_request("CUENTA CAIDA"))
        .await
        .unwrap();
    persistence
        .report_account(AccountId::new(4), create_report_request("OTRO"))
        .await
        .unwrap();
    persistence
}

#[tokio::test]
async fn test_individual_replacement_swaps_both_accounts() {
    let persistence: InMemoryPersistence = create_reported_persistence().await;

    persistence
        .replace_individual(AccountId::new(1), create_replace_request(3))
        .await
        .unwrap();

    let accounts: Vec<Account> = persistence.list_accounts().await.unwrap();
    assert_eq!(status_of(&accounts, 1), AccountStatus::Replaced);
    assert_eq!(status_of(&accounts, 3), AccountStatus::Active);

    let replacements: Vec<Replacement> = persistence.replacements().await;
    assert_eq!(replacements.len(), 1);
    assert_eq!(replacements[0].old_account_id, AccountId::new(1));
    assert_eq!(replacements[0].new_account_id, AccountId::new(3));
}

#[tokio::test]
async fn test_complete_replacement_swaps_both_accounts() {
    let persistence: InMemoryPersistence = create_reported_persistence().await;

    persistence
        .replace_complete(AccountId::new(4), create_replace_request(2))
        .await
        .unwrap();

    let accounts: Vec<Account> = persistence.list_accounts().await.unwrap();
    assert_eq!(status_of(&accounts, 4), AccountStatus::Replaced);
    assert_eq!(status_of(&accounts, 2), AccountStatus::Active);

    let events: Vec<AuditEvent> = persistence.audit_events().await;
    assert_eq!(
        events.last().map(|event| event.action.kind),
        Some(ActionKind::ReplaceComplete)
    );
}

#[tokio::test]
async fn test_replacement_keeps_associations() {
    let persistence: InMemoryPersistence = create_reported_persistence().await;
    persistence
        .replace_individual(AccountId::new(1), create_replace_request(3))
        .await
        .unwrap();

    let accounts: Vec<Account> = persistence.list_accounts().await.unwrap();
    let old: &Account = accounts
        .iter()
        .find(|account| account.id == AccountId::new(1))
        .unwrap();
    let new: &Account = accounts
        .iter()
        .find(|account| account.id == AccountId::new(3))
        .unwrap();
    assert!(old.client_id.is_some());
    assert!(new.client_id.is_none());
}

#[tokio::test]
async fn test_cross_type_candidate_changes_nothing() {
    let persistence: InMemoryPersistence = create_reported_persistence().await;

    let err: BoundaryError = persistence
        .replace_individual(AccountId::new(1), create_replace_request(2))
        .await
        .unwrap_err();

    assert_eq!(
        err.message(),
        "Account 2 has type COMPLETO, replacement requires INDIVIDUAL"
    );
    let accounts: Vec<Account> = persistence.list_accounts().await.unwrap();
    assert_eq!(status_of(&accounts, 1), AccountStatus::Reported);
    assert_eq!(status_of(&accounts, 2), AccountStatus::Spare);
    assert!(persistence.replacements().await.is_empty());
}

#[tokio::test]
async fn test_wrong_endpoint_is_rejected() {
    let persistence: InMemoryPersistence = create_reported_persistence().await;

    let err: BoundaryError = persistence
        .replace_complete(AccountId::new(1), create_replace_request(3))
        .await
        .unwrap_err();

    assert_eq!(
        err.message(),
        "Account 1 has type INDIVIDUAL, replacement requires COMPLETO"
    );
}

#[tokio::test]
async fn test_replacing_active_account_is_rejected() {
    let persistence: InMemoryPersistence = create_test_persistence();

    let err: BoundaryError = persistence
        .replace_individual(AccountId::new(1), create_replace_request(3))
        .await
        .unwrap_err();

    assert_eq!(
        err.message(),
        "Account 1 cannot be replaced: status is ACTIVO, expected REPORTADO"
    );
}

#[tokio::test]
async fn test_promoted_account_cannot_replace_itself() {
    let persistence: InMemoryPersistence = create_reported_persistence().await;
    persistence
        .replace_individual(AccountId::new(1), create_replace_request(3))
        .await
        .unwrap();

    // Account 3 is active again and can be reported in turn
    persistence
        .report_account(AccountId::new(3), create_report_request("OTRO"))
        .await
        .unwrap();
    let err: BoundaryError = persistence
        .replace_individual(AccountId::new(3), create_replace_request(3))
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Account 3 cannot replace itself");
}

#[tokio::test]
async fn test_replaced_account_is_terminal() {
    let persistence: InMemoryPersistence = create_reported_persistence().await;
    persistence
        .replace_individual(AccountId::new(1), create_replace_request(3))
        .await
        .unwrap();

    assert!(
        persistence
            .report_account(AccountId::new(1), create_report_request("OTRO"))
            .await
            .is_err()
    );
    assert!(
        persistence
            .replace_individual(AccountId::new(1), create_replace_request(3))
            .await
            .is_err()
    );
}
