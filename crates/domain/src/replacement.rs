// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{AccountId, ReplacementId, UserId};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An immutable record pairing a retired account with the spare that replaced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// The replacement identifier.
    pub id: ReplacementId,
    /// The reported account that was retired.
    #[serde(rename = "cuentaAnteriorId")]
    pub old_account_id: AccountId,
    /// The spare account that was promoted.
    #[serde(rename = "cuentaNuevaId")]
    pub new_account_id: AccountId,
    /// The user who performed the replacement.
    #[serde(rename = "usuarioId")]
    pub user_id: UserId,
    /// Why the replacement was made.
    #[serde(rename = "motivo")]
    pub reason: String,
    /// When the replacement was made.
    #[serde(rename = "fecha", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
