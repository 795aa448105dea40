// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cuentas::{BoundaryError, CoreError};

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The seed file could not be read.
    SeedReadFailed(String),
    /// Serialization/deserialization error.
    SerializationError(String),
    /// The seed data is inconsistent.
    InvalidSeed(String),
    /// The acting user is not known to the store.
    UserNotFound(i64),
    /// A transition was rejected by the lifecycle rules.
    TransitionRejected(CoreError),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SeedReadFailed(msg) => write!(f, "Failed to read seed: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InvalidSeed(msg) => write!(f, "Invalid seed: {msg}"),
            Self::UserNotFound(id) => write!(f, "User {id} not found"),
            Self::TransitionRejected(CoreError::DomainViolation(err)) => write!(f, "{err}"),
            Self::TransitionRejected(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::SeedReadFailed(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<CoreError> for PersistenceError {
    fn from(err: CoreError) -> Self {
        Self::TransitionRejected(err)
    }
}

impl From<PersistenceError> for BoundaryError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::SeedReadFailed(_) => Self::Unreachable(err.to_string()),
            PersistenceError::SerializationError(_) => Self::Malformed(err.to_string()),
            PersistenceError::InvalidSeed(_)
            | PersistenceError::UserNotFound(_)
            | PersistenceError::TransitionRejected(_) => Self::Rejected(err.to_string()),
        }
    }
}
