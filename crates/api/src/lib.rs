// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operations and workflow coordination for the account panel.
//!
//! This crate sits between an operator and the data-access boundary:
//!
//! - `report_account` and `replace_account` validate input against the
//!   loaded accounts and submit it
//! - `Coordinator` owns the loaded collections and the open modal, and
//!   reloads everything after each confirmed mutation

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
#![allow(clippy::multiple_crate_versions)]

mod coordinator;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use coordinator::{Coordinator, LoadState, Modal, Snapshot, Submission};
pub use error::ApiError;
pub use handlers::{prepare_replacement, prepare_report, replace_account, report_account};
pub use request_response::{Mutation, ReplaceAccountInput, ReplacementForm, ReportAccountInput};
