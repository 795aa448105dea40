// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Account, AccountId, AccountStatus, AccountType, ClientId, DomainError, Report, ReportId,
    ReportReason, ServiceId, UserId,
};
use time::macros::datetime;

fn create_test_account() -> Account {
    Account::new(
        AccountId::new(1),
        "netflix01@example.com",
        AccountType::Individual,
        AccountStatus::Active,
    )
}

#[test]
fn test_account_creation_has_no_associations() {
    let account: Account = create_test_account();

    assert_eq!(account.id, AccountId::new(1));
    assert_eq!(account.email, "netflix01@example.com");
    assert!(account.client_id.is_none());
    assert!(account.service_id.is_none());
    assert!(!account.expired);
}

#[test]
fn test_account_associations() {
    let account: Account = create_test_account()
        .with_client(ClientId::new(4))
        .with_service(ServiceId::new(5));

    assert_eq!(account.client_id, Some(ClientId::new(4)));
    assert_eq!(account.service_id, Some(ServiceId::new(5)));
}

#[test]
fn test_account_matches_status_and_type() {
    let account: Account = create_test_account();

    assert!(account.matches(AccountStatus::Active, AccountType::Individual));
    assert!(!account.matches(AccountStatus::Active, AccountType::Complete));
    assert!(!account.matches(AccountStatus::Spare, AccountType::Individual));
}

#[test]
fn test_status_lifecycle_transitions() {
    assert!(AccountStatus::Active.can_transition_to(AccountStatus::Reported));
    assert!(AccountStatus::Reported.can_transition_to(AccountStatus::Replaced));
    assert!(AccountStatus::Spare.can_transition_to(AccountStatus::Active));

    assert!(!AccountStatus::Active.can_transition_to(AccountStatus::Spare));
    assert!(!AccountStatus::Reported.can_transition_to(AccountStatus::Active));
    assert!(!AccountStatus::Spare.can_transition_to(AccountStatus::Reported));
    assert!(!AccountStatus::Replaced.can_transition_to(AccountStatus::Active));
}

#[test]
fn test_replaced_is_the_only_terminal_status() {
    assert!(AccountStatus::Replaced.is_terminal());
    assert!(!AccountStatus::Active.is_terminal());
    assert!(!AccountStatus::Reported.is_terminal());
    assert!(!AccountStatus::Spare.is_terminal());
}

#[test]
fn test_validate_transition_reports_both_states() {
    let result = AccountStatus::Spare.validate_transition(AccountStatus::Reported);

    assert_eq!(
        result,
        Err(DomainError::InvalidStatusTransition {
            from: AccountStatus::Spare,
            to: AccountStatus::Reported,
        })
    );
}

#[test]
fn test_status_parses_case_insensitively() {
    assert_eq!("activo".parse::<AccountStatus>(), Ok(AccountStatus::Active));
    assert_eq!(" SINUSAR ".parse::<AccountStatus>(), Ok(AccountStatus::Spare));
    assert!(matches!(
        "VENCIDA".parse::<AccountStatus>(),
        Err(DomainError::InvalidAccountStatus(_))
    ));
}

#[test]
fn test_account_type_parses() {
    assert_eq!("completo".parse::<AccountType>(), Ok(AccountType::Complete));
    assert_eq!("INDIVIDUAL".parse::<AccountType>(), Ok(AccountType::Individual));
    assert!("FAMILIAR".parse::<AccountType>().is_err());
}

#[test]
fn test_account_uses_wire_field_names() {
    let account: Account = create_test_account().with_client(ClientId::new(2));
    let json: serde_json::Value = serde_json::to_value(&account).unwrap();

    assert_eq!(json["correo"], "netflix01@example.com");
    assert_eq!(json["tipoCuenta"], "INDIVIDUAL");
    assert_eq!(json["status"], "ACTIVO");
    assert_eq!(json["clienteId"], 2);
    assert!(json.get("servicioId").is_none());
}

#[test]
fn test_account_deserializes_without_optional_fields() {
    let json: &str = r#"{"id": 3, "correo": "a@b.c", "tipoCuenta": "COMPLETO", "status": "SINUSAR"}"#;
    let account: Account = serde_json::from_str(json).unwrap();

    assert_eq!(account.id, AccountId::new(3));
    assert_eq!(account.account_type, AccountType::Complete);
    assert_eq!(account.status, AccountStatus::Spare);
    assert!(!account.expired);
}

#[test]
fn test_report_timestamp_is_rfc3339() {
    let report: Report = Report {
        id: ReportId::new(1),
        account_id: AccountId::new(1),
        user_id: UserId::new(7),
        created_at: datetime!(2026-03-01 10:30:00 UTC),
        reason: String::from("CUENTA CAIDA"),
        detail: None,
    };
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["fecha"], "2026-03-01T10:30:00Z");
    assert_eq!(json["cuentaId"], 1);
    assert_eq!(json["usuarioId"], 7);
    assert_eq!(json["motivo"], "CUENTA CAIDA");
    assert!(json.get("detalle").is_none());
}

#[test]
fn test_report_reason_classify() {
    assert_eq!(ReportReason::classify("cuenta caida"), ReportReason::AccountDown);
    assert_eq!(
        ReportReason::classify("PANTALLAS EXCEDIDAS"),
        ReportReason::ScreensExceeded
    );
    assert_eq!(ReportReason::classify("se cayó el perfil"), ReportReason::Other);
}
