// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::boundary::DataAccess;
use crate::error::{FetchError, Resource};
use cuentas_domain::{AccountId, Report};

/// The loaded, append-only collection of reports.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportRegistry {
    reports: Vec<Report>,
}

impl ReportRegistry {
    /// Wraps an already fetched set of reports.
    #[must_use]
    pub const fn new(reports: Vec<Report>) -> Self {
        Self { reports }
    }

    /// Fetches every report.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` if the boundary is unreachable or answers with
    /// malformed data.
    pub async fn load_all<B>(boundary: &B) -> Result<Self, FetchError>
    where
        B: DataAccess + ?Sized,
    {
        boundary
            .list_reports()
            .await
            .map(Self::new)
            .map_err(|err| FetchError::new(Resource::Reports, err))
    }

    /// Returns every loaded report.
    #[must_use]
    pub fn all(&self) -> &[Report] {
        &self.reports
    }

    /// Returns the number of loaded reports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Returns true if no reports are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Returns every report filed against an account, in load order.
    #[must_use]
    pub fn for_account(&self, account_id: AccountId) -> Vec<&Report> {
        self.reports
            .iter()
            .filter(|report| report.account_id == account_id)
            .collect()
    }

    /// Returns the latest report filed against an account.
    ///
    /// The latest report is the one with the greatest `created_at`. When
    /// several share that timestamp the one loaded first wins. Returns `None`
    /// when the account has never been reported.
    #[must_use]
    pub fn most_recent_for(&self, account_id: AccountId) -> Option<&Report> {
        self.reports
            .iter()
            .filter(|report| report.account_id == account_id)
            .fold(None, |latest: Option<&Report>, report| match latest {
                Some(current) if current.created_at >= report.created_at => Some(current),
                _ => Some(report),
            })
    }
}
