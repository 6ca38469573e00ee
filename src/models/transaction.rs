// SPDX-License-Identifier: MIT

//! Marketplace transaction model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Settlement status of a marketplace transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum TransactionStatus {
    Pending,
    Completed,
    Cancelled,
}

/// A credit sale between an NGO seller and a corporate buyer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Transaction {
    /// Registry id, "TXN-NNN" format
    pub id: String,
    pub seller_id: String,
    pub seller_name: String,
    pub seller_company: String,
    pub seller_location: String,
    /// NGO registration number
    pub seller_registration: String,
    pub buyer_id: String,
    pub buyer_company: String,
    /// Credit quantity in tCO2e
    pub credit_amount: f64,
    /// USD per credit
    pub price_per_credit: f64,
    /// USD, credit_amount * price_per_credit
    pub total_value: f64,
    pub transaction_date: NaiveDate,
    pub status: TransactionStatus,
    pub project_type: String,
}
