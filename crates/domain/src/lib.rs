// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod replacement;
mod report;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use replacement::Replacement;
pub use report::{Report, ReportReason};
pub use types::{
    Account, AccountId, AccountStatus, AccountType, Client, ClientId, ReplacementId, ReportId,
    Service, ServiceId, User, UserId,
};
pub use validation::{
    is_replacement_candidate, normalize_detail, validate_reason, validate_replaceable,
    validate_replacement, validate_reportable,
};
