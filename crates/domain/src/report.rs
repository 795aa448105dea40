// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reports filed against accounts.
//!
//! A report is immutable once created. The reason is free text on the wire;
//! [`ReportReason`] is the closed set the panel offers, with `Other` for
//! anything typed by hand.

use crate::types::{AccountId, ReportId, UserId};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A record that an account was flagged as failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// The report identifier.
    pub id: ReportId,
    /// The account the report was filed against.
    #[serde(rename = "cuentaId")]
    pub account_id: AccountId,
    /// The user who filed the report.
    #[serde(rename = "usuarioId")]
    pub user_id: UserId,
    /// When the report was filed.
    #[serde(rename = "fecha", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// The short reason code.
    #[serde(rename = "motivo")]
    pub reason: String,
    /// Optional free-text elaboration.
    #[serde(rename = "detalle", default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// The reasons the panel offers when reporting an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportReason {
    /// The account no longer signs in or streams.
    AccountDown,
    /// The password was changed by someone else.
    WrongPassword,
    /// Too many screens are in use.
    ScreensExceeded,
    /// The subscription lapsed.
    NoSubscription,
    /// Anything else; the detail should explain.
    Other,
}

impl ReportReason {
    /// Every offered reason, in display order.
    pub const ALL: [Self; 5] = [
        Self::AccountDown,
        Self::WrongPassword,
        Self::ScreensExceeded,
        Self::NoSubscription,
        Self::Other,
    ];

    /// Returns the wire representation of the reason.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AccountDown => "CUENTA CAIDA",
            Self::WrongPassword => "CONTRASEÑA INCORRECTA",
            Self::ScreensExceeded => "PANTALLAS EXCEDIDAS",
            Self::NoSubscription => "SIN SUSCRIPCION",
            Self::Other => "OTRO",
        }
    }

    /// Classifies free-text reason into one of the offered reasons.
    ///
    /// Unrecognized text maps to `Other`; free text is always accepted.
    #[must_use]
    pub fn classify(reason: &str) -> Self {
        let normalized: String = reason.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == normalized)
            .unwrap_or(Self::Other)
    }
}

impl std::fmt::Display for ReportReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
