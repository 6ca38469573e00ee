//! Aggregated registry metrics for the dashboard.
//!
//! Metrics are recomputed from the live collections on every read rather than
//! cached, so they can never drift from the stored records.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::credit::{Credit, CreditStatus};
use crate::models::project::{Project, ProjectStatus};
use crate::models::transaction::{Transaction, TransactionStatus};

/// Dashboard summary counters over projects and credits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RegistryMetrics {
    pub total_projects: u32,
    /// Projects with status Pending
    pub pending_verification: u32,
    /// Projects with status Approved
    pub approved_projects: u32,
    /// Sum of credit amounts regardless of status (tCO2e)
    pub total_credits_issued: f64,
    /// Issued amounts minus Retired amounts (tCO2e); a retirement counts
    /// against the pool, not just out of it
    pub available_credits: f64,
}

impl RegistryMetrics {
    /// Aggregate over the current project and credit collections.
    pub fn compute(projects: &[Project], credits: &[Credit]) -> Self {
        let pending = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Pending)
            .count() as u32;
        let approved = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Approved)
            .count() as u32;

        let (issued, retired) = credits.iter().fold((0.0, 0.0), |(i, r), c| match c.status {
            CreditStatus::Issued => (i + c.amount, r),
            CreditStatus::Retired => (i, r + c.amount),
        });

        Self {
            total_projects: projects.len() as u32,
            pending_verification: pending,
            approved_projects: approved,
            total_credits_issued: issued + retired,
            available_credits: issued - retired,
        }
    }
}

/// Marketplace summary counters over the transaction collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MarketplaceSummary {
    pub total_transactions: u32,
    /// USD value of completed transactions
    pub completed_value: f64,
    /// Credits traded in completed transactions (tCO2e)
    pub completed_credits: f64,
    /// Distinct sellers across all transactions
    pub active_sellers: u32,
}

impl MarketplaceSummary {
    /// Aggregate over the current transaction collection.
    pub fn compute(transactions: &[Transaction]) -> Self {
        let completed: Vec<&Transaction> = transactions
            .iter()
            .filter(|t| t.status == TransactionStatus::Completed)
            .collect();

        let mut sellers: Vec<&str> = transactions.iter().map(|t| t.seller_id.as_str()).collect();
        sellers.sort_unstable();
        sellers.dedup();

        Self {
            total_transactions: transactions.len() as u32,
            completed_value: completed.iter().map(|t| t.total_value).sum(),
            completed_credits: completed.iter().map(|t| t.credit_amount).sum(),
            active_sellers: sellers.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::{ProjectMetadata, ProjectType};
    use chrono::NaiveDate;

    fn make_project(id: &str, status: ProjectStatus) -> Project {
        Project {
            id: id.to_string(),
            name: format!("Project {}", id),
            project_type: ProjectType::Mangrove,
            location: "Test Coast".to_string(),
            area: 100.0,
            status,
            estimated_carbon: 1000.0,
            date_created: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            metadata: ProjectMetadata {
                coordinator: String::new(),
                funding_source: String::new(),
                methodology: "VM0033".to_string(),
                monitoring_frequency: "Quarterly".to_string(),
            },
            notes: String::new(),
        }
    }

    fn make_credit(id: &str, amount: f64, status: CreditStatus) -> Credit {
        Credit {
            id: id.to_string(),
            project_id: "1".to_string(),
            project_name: "Project 1".to_string(),
            amount,
            status,
            date_issued: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            verification_report: format!("/reports/{}-verification.pdf", id),
        }
    }

    #[test]
    fn test_metrics_count_by_status() {
        let projects = vec![
            make_project("1", ProjectStatus::Approved),
            make_project("2", ProjectStatus::Pending),
            make_project("3", ProjectStatus::Approved),
            make_project("4", ProjectStatus::Rejected),
        ];

        let metrics = RegistryMetrics::compute(&projects, &[]);

        assert_eq!(metrics.total_projects, 4);
        assert_eq!(metrics.pending_verification, 1);
        assert_eq!(metrics.approved_projects, 2);
        assert_eq!(metrics.total_credits_issued, 0.0);
    }

    #[test]
    fn test_total_credits_ignores_status_but_available_does_not() {
        let credits = vec![
            make_credit("BC-001", 150.0, CreditStatus::Issued),
            make_credit("BC-002", 100.0, CreditStatus::Retired),
        ];

        let metrics = RegistryMetrics::compute(&[], &credits);

        assert_eq!(metrics.total_credits_issued, 250.0);
        assert_eq!(metrics.available_credits, 50.0);
    }

    #[test]
    fn test_marketplace_summary_counts_completed_only() {
        let base = Transaction {
            id: "TXN-001".to_string(),
            seller_id: "NGO-001".to_string(),
            seller_name: "Rajesh Kumar".to_string(),
            seller_company: "Green Earth Foundation".to_string(),
            seller_location: "Mumbai, Maharashtra".to_string(),
            seller_registration: "NGO/2019/0012345".to_string(),
            buyer_id: "CMP-001".to_string(),
            buyer_company: "Microsoft Corp".to_string(),
            credit_amount: 1500.0,
            price_per_credit: 25.5,
            total_value: 38250.0,
            transaction_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status: TransactionStatus::Completed,
            project_type: "Mangrove Restoration".to_string(),
        };
        let mut pending = base.clone();
        pending.id = "TXN-002".to_string();
        pending.seller_id = "NGO-002".to_string();
        pending.status = TransactionStatus::Pending;
        pending.total_value = 57500.0;

        let summary = MarketplaceSummary::compute(&[base, pending]);

        assert_eq!(summary.total_transactions, 2);
        assert_eq!(summary.completed_value, 38250.0);
        assert_eq!(summary.completed_credits, 1500.0);
        assert_eq!(summary.active_sellers, 2);
    }
}
