// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use cuentas::{BoundaryError, FetchError};
use thiserror::Error;

/// API-level errors.
///
/// None of these are fatal. A fetch failure blocks the tables until the next
/// refresh, a failed operation leaves the form open, and a validation error
/// never reaches the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Input was rejected before contacting the boundary.
    #[error("Invalid input for field '{field}': {message}")]
    Validation {
        /// The wire name of the offending field.
        field: String,
        /// A human-readable description of the problem.
        message: String,
    },
    /// A collection could not be loaded.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The boundary refused or failed a mutation.
    ///
    /// The reason is the boundary's own message.
    #[error("{reason}")]
    OperationFailed {
        /// The boundary's message, verbatim.
        reason: String,
    },
    /// Another submission is still in flight.
    #[error("Another operation is in progress")]
    Busy,
}

impl ApiError {
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: String::from(field),
            message: message.into(),
        }
    }
}

impl From<BoundaryError> for ApiError {
    fn from(err: BoundaryError) -> Self {
        Self::OperationFailed {
            reason: String::from(err.message()),
        }
    }
}
