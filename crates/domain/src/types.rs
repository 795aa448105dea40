// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Declares an opaque integer identifier.
///
/// Identifiers serialize as bare integers so they match the boundary's wire format.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifies an account.
    AccountId
);
entity_id!(
    /// Identifies a report.
    ReportId
);
entity_id!(
    /// Identifies a user of the admin panel.
    UserId
);
entity_id!(
    /// Identifies a client that owns accounts.
    ClientId
);
entity_id!(
    /// Identifies a service an account belongs to.
    ServiceId
);
entity_id!(
    /// Identifies a replacement record.
    ReplacementId
);

/// The kind of an account.
///
/// The type is fixed at creation and governs replacement compatibility:
/// a reported account can only be replaced by a spare of the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// A single-profile account.
    #[serde(rename = "INDIVIDUAL")]
    Individual,
    /// A full account with every profile.
    #[serde(rename = "COMPLETO")]
    Complete,
}

impl AccountType {
    /// Returns the wire representation of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "INDIVIDUAL",
            Self::Complete => "COMPLETO",
        }
    }
}

impl FromStr for AccountType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INDIVIDUAL" => Ok(Self::Individual),
            "COMPLETO" => Ok(Self::Complete),
            _ => Err(DomainError::InvalidAccountType(s.to_string())),
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The lifecycle status of an account.
///
/// Valid transitions are:
/// - `Active` → `Reported` (reporting)
/// - `Reported` → `Replaced` (the retired side of a replacement)
/// - `Spare` → `Active` (the promoted side of a replacement)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountStatus {
    /// In circulation.
    #[serde(rename = "ACTIVO")]
    Active,
    /// Flagged as failing and waiting for a replacement.
    #[serde(rename = "REPORTADO")]
    Reported,
    /// Held in stock as a replacement target.
    #[serde(rename = "SINUSAR")]
    Spare,
    /// Retired by a replacement. Terminal.
    #[serde(rename = "REEMPLAZADA")]
    Replaced,
}

impl AccountStatus {
    /// Returns the wire representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVO",
            Self::Reported => "REPORTADO",
            Self::Spare => "SINUSAR",
            Self::Replaced => "REEMPLAZADA",
        }
    }

    /// Returns true if no transition leaves this status.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Replaced)
    }

    /// Checks if a transition from this status to another is valid.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Active, Self::Reported)
                | (Self::Reported, Self::Replaced)
                | (Self::Spare, Self::Active)
        )
    }

    /// Validates a transition from this status to another.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is not
    /// part of the account lifecycle.
    pub const fn validate_transition(&self, target: Self) -> Result<(), DomainError> {
        if self.can_transition_to(target) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: *self,
                to: target,
            })
        }
    }
}

impl FromStr for AccountStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACTIVO" => Ok(Self::Active),
            "REPORTADO" => Ok(Self::Reported),
            "SINUSAR" => Ok(Self::Spare),
            "REEMPLAZADA" => Ok(Self::Replaced),
            _ => Err(DomainError::InvalidAccountStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A shared-service account tracked by the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The account identifier.
    pub id: AccountId,
    /// The login / contact address of the account.
    #[serde(rename = "correo")]
    pub email: String,
    /// The account type. Immutable once created.
    #[serde(rename = "tipoCuenta")]
    pub account_type: AccountType,
    /// The current lifecycle status.
    pub status: AccountStatus,
    /// The client the account is assigned to, if any.
    #[serde(rename = "clienteId", default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
    /// The service the account belongs to, if any.
    #[serde(rename = "servicioId", default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<ServiceId>,
    /// Whether a report marked the account as expired.
    #[serde(rename = "vencida", default)]
    pub expired: bool,
}

impl Account {
    /// Creates a new account with no client or service association.
    #[must_use]
    pub fn new(
        id: AccountId,
        email: &str,
        account_type: AccountType,
        status: AccountStatus,
    ) -> Self {
        Self {
            id,
            email: email.to_string(),
            account_type,
            status,
            client_id: None,
            service_id: None,
            expired: false,
        }
    }

    /// Associates the account with a client.
    #[must_use]
    pub fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Associates the account with a service.
    #[must_use]
    pub fn with_service(mut self, service_id: ServiceId) -> Self {
        self.service_id = Some(service_id);
        self
    }

    /// Checks if the account holds the given status and type.
    #[must_use]
    pub fn matches(&self, status: AccountStatus, account_type: AccountType) -> bool {
        self.status == status && self.account_type == account_type
    }
}

/// A user of the admin panel who can file reports and replacements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user identifier.
    pub id: UserId,
    /// The display name.
    #[serde(rename = "nombre")]
    pub name: String,
}

impl User {
    /// Creates a new user.
    #[must_use]
    pub fn new(id: UserId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

/// A client accounts can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// The client identifier.
    pub id: ClientId,
    /// The display name.
    #[serde(rename = "nombre")]
    pub name: String,
}

impl Client {
    /// Creates a new client.
    #[must_use]
    pub fn new(id: ClientId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

/// A streaming or software service accounts belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// The service identifier.
    pub id: ServiceId,
    /// The display name.
    #[serde(rename = "nombre")]
    pub name: String,
}

impl Service {
    /// Creates a new service.
    #[must_use]
    pub fn new(id: ServiceId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}
