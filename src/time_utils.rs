// SPDX-License-Identifier: MIT

//! Shared helpers for date/time formatting.

use chrono::{NaiveDate, Utc};

/// Current date in UTC, date-only. Used for `dateCreated`/`dateIssued` stamps.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
