// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seed data for the in-memory store.
//!
//! A seed is a JSON document with the same field names the boundary serves:
//!
//! ```json
//! {
//!   "usuarios": [{"id": 7, "nombre": "Ana"}],
//!   "cuentas": [{"id": 1, "correo": "a@b.c", "tipoCuenta": "INDIVIDUAL", "status": "ACTIVO"}]
//! }
//! ```
//!
//! Every collection is optional.

use crate::error::PersistenceError;
use cuentas_domain::{Account, Client, Report, Service, User};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Initial contents of the store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Seed {
    /// Panel users.
    #[serde(rename = "usuarios", default)]
    pub users: Vec<User>,
    /// Clients.
    #[serde(rename = "clientes", default)]
    pub clients: Vec<Client>,
    /// Services.
    #[serde(rename = "servicios", default)]
    pub services: Vec<Service>,
    /// Accounts.
    #[serde(rename = "cuentas", default)]
    pub accounts: Vec<Account>,
    /// Reports already on file.
    #[serde(rename = "reportes", default)]
    pub reports: Vec<Report>,
}

impl Seed {
    /// Parses a seed from JSON text and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the seed is inconsistent.
    pub fn from_json_str(json: &str) -> Result<Self, PersistenceError> {
        let seed: Self = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Reads, parses and validates a seed file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or is inconsistent.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let json: String = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks the seed for duplicate ids and dangling references.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidSeed` describing the first problem found.
    pub fn validate(&self) -> Result<(), PersistenceError> {
        let mut account_ids: HashSet<i64> = HashSet::new();
        for account in &self.accounts {
            if !account_ids.insert(account.id.value()) {
                return Err(PersistenceError::InvalidSeed(format!(
                    "duplicate account id {}",
                    account.id
                )));
            }
            if let Some(client_id) = account.client_id {
                if !self.clients.iter().any(|client| client.id == client_id) {
                    return Err(PersistenceError::InvalidSeed(format!(
                        "account {} references unknown client {client_id}",
                        account.id
                    )));
                }
            }
            if let Some(service_id) = account.service_id {
                if !self.services.iter().any(|service| service.id == service_id) {
                    return Err(PersistenceError::InvalidSeed(format!(
                        "account {} references unknown service {service_id}",
                        account.id
                    )));
                }
            }
        }

        let mut report_ids: HashSet<i64> = HashSet::new();
        for report in &self.reports {
            if !report_ids.insert(report.id.value()) {
                return Err(PersistenceError::InvalidSeed(format!(
                    "duplicate report id {}",
                    report.id
                )));
            }
            if !account_ids.contains(&report.account_id.value()) {
                return Err(PersistenceError::InvalidSeed(format!(
                    "report {} references unknown account {}",
                    report.id, report.account_id
                )));
            }
            if !self.users.iter().any(|user| user.id == report.user_id) {
                return Err(PersistenceError::InvalidSeed(format!(
                    "report {} references unknown user {}",
                    report.id, report.user_id
                )));
            }
        }

        Ok(())
    }
}
