// SPDX-License-Identifier: MIT

//! Carbon credit model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Lifecycle status of a credit batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum CreditStatus {
    Issued,
    Retired,
}

/// A batch of issued carbon credits, denominated in tCO2e.
///
/// `project_id` is a soft reference: the registry tolerates dangling ids, and
/// `project_name` is a copy taken at issuance time that is not kept in sync
/// with later project renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Credit {
    /// Registry id, "BC-NNN" format
    pub id: String,
    pub project_id: String,
    pub project_name: String,
    /// Credit quantity in tCO2e
    pub amount: f64,
    pub status: CreditStatus,
    pub date_issued: NaiveDate,
    /// Path to the verification report document
    pub verification_report: String,
}

impl Credit {
    /// Certificate download path, by naming convention.
    pub fn certificate_path(&self) -> String {
        format!("/certificates/{}.pdf", self.id)
    }
}
