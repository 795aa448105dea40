// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The data-access boundary.
//!
//! The panel never owns account data. Everything it shows is fetched through
//! [`DataAccess`], and every mutation is submitted through it. Implementations
//! decide how state is stored; callers only rely on the contract below.

use crate::error::BoundaryError;
use async_trait::async_trait;
use cuentas_domain::{Account, AccountId, Client, Report, Service, User, UserId};
use serde::{Deserialize, Serialize};

/// Body of a report submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportAccountRequest {
    /// The user filing the report.
    #[serde(rename = "usuarioId")]
    pub user_id: UserId,
    /// The reason for the report.
    #[serde(rename = "motivo")]
    pub reason: String,
    /// Optional elaboration.
    #[serde(rename = "detalle", default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Whether the account should also be flagged as expired.
    #[serde(rename = "marcarComoVencida", default)]
    pub mark_expired: bool,
}

/// Body of a replacement submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceAccountRequest {
    /// The spare account to promote.
    #[serde(rename = "cuentaNuevaId")]
    pub new_account_id: AccountId,
    /// The user performing the replacement.
    #[serde(rename = "usuarioId")]
    pub user_id: UserId,
    /// The reason for the replacement.
    #[serde(rename = "motivo")]
    pub reason: String,
}

/// The operations the panel needs from whatever stores account data.
///
/// All calls are asynchronous; they are the only suspension points of the
/// workflow. Mutations either take effect completely or not at all.
#[async_trait]
pub trait DataAccess: Send + Sync {
    /// Lists every account.
    async fn list_accounts(&self) -> Result<Vec<Account>, BoundaryError>;

    /// Lists every report.
    async fn list_reports(&self) -> Result<Vec<Report>, BoundaryError>;

    /// Lists every panel user.
    async fn list_users(&self) -> Result<Vec<User>, BoundaryError>;

    /// Lists every client.
    async fn list_clients(&self) -> Result<Vec<Client>, BoundaryError>;

    /// Lists every service.
    async fn list_services(&self) -> Result<Vec<Service>, BoundaryError>;

    /// Reports an active account, creating exactly one report.
    async fn report_account(
        &self,
        account_id: AccountId,
        request: ReportAccountRequest,
    ) -> Result<(), BoundaryError>;

    /// Replaces a reported individual account with a spare.
    async fn replace_individual(
        &self,
        old_account_id: AccountId,
        request: ReplaceAccountRequest,
    ) -> Result<(), BoundaryError>;

    /// Replaces a reported complete account with a spare.
    async fn replace_complete(
        &self,
        old_account_id: AccountId,
        request: ReplaceAccountRequest,
    ) -> Result<(), BoundaryError>;
}
