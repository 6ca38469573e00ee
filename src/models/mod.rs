// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod activity;
pub mod credit;
pub mod metrics;
pub mod project;
pub mod transaction;
pub mod user;

pub use activity::{Activity, ActivityKind};
pub use credit::{Credit, CreditStatus};
pub use metrics::{MarketplaceSummary, RegistryMetrics};
pub use project::{Project, ProjectMetadata, ProjectPatch, ProjectStatus, ProjectType};
pub use transaction::{Transaction, TransactionStatus};
pub use user::{ProfilePatch, UserProfile};
