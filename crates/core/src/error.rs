// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cuentas_domain::DomainError;

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// No identifier is left for a new record of the named kind.
    IdentifiersExhausted(&'static str),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::IdentifiersExhausted(kind) => write!(f, "No {kind} identifiers left"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

/// Failures reported by the data-access boundary.
///
/// The message is whatever the boundary said and is shown to the operator verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    /// The boundary could not be reached.
    Unreachable(String),
    /// The boundary answered with data that could not be understood.
    Malformed(String),
    /// The boundary refused the request, usually on a business rule.
    Rejected(String),
}

impl BoundaryError {
    /// Returns the boundary's message without any prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Unreachable(msg) | Self::Malformed(msg) | Self::Rejected(msg) => msg,
        }
    }
}

impl std::fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable(msg) => write!(f, "Boundary unreachable: {msg}"),
            Self::Malformed(msg) => write!(f, "Malformed boundary response: {msg}"),
            Self::Rejected(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for BoundaryError {}

/// The collections the panel loads from the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Every account.
    Accounts,
    /// Every report.
    Reports,
    /// Every panel user.
    Users,
    /// Every client.
    Clients,
    /// Every service.
    Services,
}

impl Resource {
    /// Returns the resource name used in messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::Reports => "reports",
            Self::Users => "users",
            Self::Clients => "clients",
            Self::Services => "services",
        }
    }
}

/// A collection could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    /// The collection that failed.
    pub resource: Resource,
    /// The underlying boundary failure.
    pub source: BoundaryError,
}

impl FetchError {
    /// Creates a new `FetchError`.
    #[must_use]
    pub const fn new(resource: Resource, source: BoundaryError) -> Self {
        Self { resource, source }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to load {}: {}",
            self.resource.as_str(),
            self.source
        )
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
