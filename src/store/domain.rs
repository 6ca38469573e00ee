// SPDX-License-Identifier: MIT

//! Domain store: projects, credits, activities and marketplace transactions.
//!
//! Collections are held behind copy-on-write snapshots: readers get an `Arc`
//! to an immutable `Vec`, and every mutation swaps in a freshly built
//! collection. A reader holding a snapshot never observes a partial update.
//!
//! Mutations never raise for not-found conditions; they report whether a
//! record matched and otherwise leave the collections untouched.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use chrono::Utc;

use crate::models::{
    Activity, ActivityKind, Credit, CreditStatus, MarketplaceSummary, Project, ProjectMetadata,
    ProjectPatch, ProjectStatus, ProjectType, RegistryMetrics, Transaction, TransactionStatus,
};
use crate::time_utils::today_utc;

/// Fields a caller supplies when registering a project.
///
/// `id` and `date_created` are deliberately absent: the store assigns both.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub project_type: ProjectType,
    pub location: String,
    pub area: f64,
    pub status: ProjectStatus,
    pub estimated_carbon: f64,
    pub metadata: ProjectMetadata,
    pub notes: String,
}

#[derive(Default)]
struct Collections {
    projects: Arc<Vec<Project>>,
    credits: Arc<Vec<Credit>>,
    activities: Arc<Vec<Activity>>,
    transactions: Arc<Vec<Transaction>>,
}

/// Owner of the four domain collections.
///
/// Constructed once at the application root and shared via `AppState`; no
/// other component holds a mutable copy of the records.
pub struct DomainStore {
    inner: RwLock<Collections>,
    next_project_seq: AtomicU64,
    next_credit_seq: AtomicU64,
    next_activity_seq: AtomicU64,
}

impl Default for DomainStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Collections::default()),
            next_project_seq: AtomicU64::new(1),
            next_credit_seq: AtomicU64::new(1),
            next_activity_seq: AtomicU64::new(1),
        }
    }

    /// Replace the collections with a pre-built dataset and realign the id
    /// counters. Used at startup for demo seeding only.
    pub fn load_dataset(
        &self,
        projects: Vec<Project>,
        credits: Vec<Credit>,
        activities: Vec<Activity>,
        transactions: Vec<Transaction>,
    ) {
        self.next_project_seq
            .store(projects.len() as u64 + 1, Ordering::SeqCst);
        self.next_credit_seq
            .store(credits.len() as u64 + 1, Ordering::SeqCst);
        self.next_activity_seq
            .store(activities.len() as u64 + 1, Ordering::SeqCst);

        let mut inner = self.inner.write().expect("domain store lock poisoned");
        *inner = Collections {
            projects: Arc::new(projects),
            credits: Arc::new(credits),
            activities: Arc::new(activities),
            transactions: Arc::new(transactions),
        };
    }

    // ─── Reads ───────────────────────────────────────────────────

    /// Snapshot of all projects, insertion order.
    pub fn projects(&self) -> Arc<Vec<Project>> {
        self.inner
            .read()
            .expect("domain store lock poisoned")
            .projects
            .clone()
    }

    /// Snapshot of all credits, insertion order.
    pub fn credits(&self) -> Arc<Vec<Credit>> {
        self.inner
            .read()
            .expect("domain store lock poisoned")
            .credits
            .clone()
    }

    /// Snapshot of the activity feed, insertion order.
    pub fn activities(&self) -> Arc<Vec<Activity>> {
        self.inner
            .read()
            .expect("domain store lock poisoned")
            .activities
            .clone()
    }

    /// Snapshot of all marketplace transactions, insertion order.
    pub fn transactions(&self) -> Arc<Vec<Transaction>> {
        self.inner
            .read()
            .expect("domain store lock poisoned")
            .transactions
            .clone()
    }

    /// Dashboard metrics, recomputed from the live collections on every call.
    pub fn metrics(&self) -> RegistryMetrics {
        let inner = self.inner.read().expect("domain store lock poisoned");
        RegistryMetrics::compute(&inner.projects, &inner.credits)
    }

    /// Marketplace counters, recomputed on every call.
    pub fn marketplace_summary(&self) -> MarketplaceSummary {
        let inner = self.inner.read().expect("domain store lock poisoned");
        MarketplaceSummary::compute(&inner.transactions)
    }

    // ─── Projects ────────────────────────────────────────────────

    /// Register a new project. The store assigns the next sequential id and
    /// stamps today's date; everything else comes from the caller unchecked.
    pub fn add_project(&self, fields: NewProject) -> Project {
        let id = self
            .next_project_seq
            .fetch_add(1, Ordering::SeqCst)
            .to_string();

        let project = Project {
            id,
            name: fields.name,
            project_type: fields.project_type,
            location: fields.location,
            area: fields.area,
            status: fields.status,
            estimated_carbon: fields.estimated_carbon,
            date_created: today_utc(),
            metadata: fields.metadata,
            notes: fields.notes,
        };

        let mut inner = self.inner.write().expect("domain store lock poisoned");
        let mut projects: Vec<Project> = inner.projects.as_ref().clone();
        projects.push(project.clone());
        inner.projects = Arc::new(projects);

        Self::push_activity(
            &mut inner,
            &self.next_activity_seq,
            ActivityKind::Project,
            format!("Project '{}' was registered", project.name),
        );

        tracing::info!(project_id = %project.id, name = %project.name, "Project registered");
        project
    }

    /// Shallow-merge `patch` into the project with the given id.
    ///
    /// Returns the updated project, or `None` when no project matched. A miss
    /// is not an error and leaves every collection exactly as it was.
    pub fn update_project(&self, id: &str, patch: &ProjectPatch) -> Option<Project> {
        let mut inner = self.inner.write().expect("domain store lock poisoned");

        let index = inner.projects.iter().position(|p| p.id == id)?;

        let mut projects: Vec<Project> = inner.projects.as_ref().clone();
        patch.apply(&mut projects[index]);
        let updated = projects[index].clone();
        inner.projects = Arc::new(projects);

        let message = match patch.status {
            Some(ProjectStatus::Approved) => format!("Project '{}' was approved", updated.name),
            Some(ProjectStatus::Rejected) => format!("Project '{}' was rejected", updated.name),
            _ => format!("Project '{}' was updated", updated.name),
        };
        Self::push_activity(
            &mut inner,
            &self.next_activity_seq,
            ActivityKind::Project,
            message,
        );

        tracing::info!(project_id = %updated.id, "Project updated");
        Some(updated)
    }

    // ─── Credits ─────────────────────────────────────────────────

    /// Issue a credit batch against a project.
    ///
    /// Referential integrity is deliberately not enforced: a dangling
    /// `project_id` is accepted and the denormalized name falls back to the
    /// empty string.
    pub fn issue_credit(
        &self,
        project_id: &str,
        amount: f64,
        verification_report: Option<String>,
    ) -> Credit {
        let seq = self.next_credit_seq.fetch_add(1, Ordering::SeqCst);
        let id = format!("BC-{:03}", seq);

        let mut inner = self.inner.write().expect("domain store lock poisoned");

        let project_name = inner
            .projects
            .iter()
            .find(|p| p.id == project_id)
            .map(|p| p.name.clone())
            .unwrap_or_default();

        let credit = Credit {
            verification_report: verification_report
                .unwrap_or_else(|| format!("/reports/{}-verification.pdf", id)),
            id,
            project_id: project_id.to_string(),
            project_name,
            amount,
            status: CreditStatus::Issued,
            date_issued: today_utc(),
        };

        let mut credits: Vec<Credit> = inner.credits.as_ref().clone();
        credits.push(credit.clone());
        inner.credits = Arc::new(credits);

        Self::push_activity(
            &mut inner,
            &self.next_activity_seq,
            ActivityKind::Credit,
            format!("{} credits were issued ({})", credit.amount, credit.id),
        );

        tracing::info!(credit_id = %credit.id, amount = credit.amount, "Credits issued");
        credit
    }

    /// Mark a credit batch as retired. Idempotent; returns the credit when a
    /// record matched, `None` otherwise.
    pub fn retire_credit(&self, id: &str) -> Option<Credit> {
        let mut inner = self.inner.write().expect("domain store lock poisoned");

        let index = inner.credits.iter().position(|c| c.id == id)?;
        let already_retired = inner.credits[index].status == CreditStatus::Retired;

        let mut credits: Vec<Credit> = inner.credits.as_ref().clone();
        credits[index].status = CreditStatus::Retired;
        let retired = credits[index].clone();
        inner.credits = Arc::new(credits);

        if !already_retired {
            Self::push_activity(
                &mut inner,
                &self.next_activity_seq,
                ActivityKind::Credit,
                format!("{} credits were retired ({})", retired.amount, retired.id),
            );
        }

        tracing::info!(credit_id = %retired.id, "Credits retired");
        Some(retired)
    }

    // ─── Activities ──────────────────────────────────────────────

    /// Append an entry to the activity feed.
    pub fn record_activity(&self, kind: ActivityKind, message: impl Into<String>) -> Activity {
        let mut inner = self.inner.write().expect("domain store lock poisoned");
        Self::push_activity(&mut inner, &self.next_activity_seq, kind, message.into())
    }

    fn push_activity(
        inner: &mut Collections,
        seq: &AtomicU64,
        kind: ActivityKind,
        message: String,
    ) -> Activity {
        let activity = Activity {
            id: seq.fetch_add(1, Ordering::SeqCst).to_string(),
            message,
            timestamp: Utc::now(),
            kind,
        };

        let mut activities: Vec<Activity> = inner.activities.as_ref().clone();
        activities.push(activity.clone());
        inner.activities = Arc::new(activities);
        activity
    }

    // ─── Marketplace ─────────────────────────────────────────────

    /// Mark a pending transaction as completed. No-op on a missing id.
    pub fn approve_transaction(&self, id: &str) -> Option<Transaction> {
        self.set_transaction_status(id, TransactionStatus::Completed)
    }

    /// Mark a pending transaction as cancelled. No-op on a missing id.
    pub fn cancel_transaction(&self, id: &str) -> Option<Transaction> {
        self.set_transaction_status(id, TransactionStatus::Cancelled)
    }

    fn set_transaction_status(&self, id: &str, status: TransactionStatus) -> Option<Transaction> {
        let mut inner = self.inner.write().expect("domain store lock poisoned");

        let index = inner.transactions.iter().position(|t| t.id == id)?;

        let mut transactions: Vec<Transaction> = inner.transactions.as_ref().clone();
        transactions[index].status = status;
        let updated = transactions[index].clone();
        inner.transactions = Arc::new(transactions);

        let verb = match status {
            TransactionStatus::Completed => "approved",
            TransactionStatus::Cancelled => "rejected",
            TransactionStatus::Pending => "reopened",
        };
        Self::push_activity(
            &mut inner,
            &self.next_activity_seq,
            ActivityKind::Credit,
            format!("Transaction {} was {}", updated.id, verb),
        );

        tracing::info!(transaction_id = %updated.id, status = ?updated.status, "Transaction settled");
        Some(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_project_fields(name: &str, status: ProjectStatus) -> NewProject {
        NewProject {
            name: name.to_string(),
            project_type: ProjectType::Mangrove,
            location: "L".to_string(),
            area: 10.0,
            status,
            estimated_carbon: 100.0,
            metadata: ProjectMetadata {
                coordinator: "Dr. Test".to_string(),
                funding_source: "Grant".to_string(),
                methodology: "VM0033".to_string(),
                monitoring_frequency: "Quarterly".to_string(),
            },
            notes: String::new(),
        }
    }

    #[test]
    fn test_first_project_gets_id_one() {
        let store = DomainStore::new();
        let project = store.add_project(new_project_fields("X", ProjectStatus::Pending));

        assert_eq!(project.id, "1");
        assert_eq!(project.date_created, today_utc());
        assert_eq!(store.projects().len(), 1);
    }

    #[test]
    fn test_sequential_ids_are_unique() {
        let store = DomainStore::new();
        for i in 0..10 {
            store.add_project(new_project_fields(&format!("P{}", i), ProjectStatus::Pending));
        }

        let projects = store.projects();
        let mut ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
        assert_eq!(projects.last().unwrap().id, "10");
    }

    #[test]
    fn test_update_missing_project_is_a_noop() {
        let store = DomainStore::new();
        store.add_project(new_project_fields("X", ProjectStatus::Pending));
        let before = store.projects();
        let activities_before = store.activities().len();

        let patch = ProjectPatch {
            status: Some(ProjectStatus::Approved),
            ..Default::default()
        };
        assert!(store.update_project("999", &patch).is_none());

        let after = store.projects();
        assert_eq!(before.len(), after.len());
        assert_eq!(before[0].status, after[0].status);
        // A miss records nothing in the feed either
        assert_eq!(store.activities().len(), activities_before);
    }

    #[test]
    fn test_status_update_moves_metric_buckets() {
        let store = DomainStore::new();
        store.add_project(new_project_fields("A", ProjectStatus::Pending));
        store.add_project(new_project_fields("B", ProjectStatus::Pending));
        store.add_project(new_project_fields("C", ProjectStatus::Pending));

        let before = store.metrics();
        let patch = ProjectPatch {
            status: Some(ProjectStatus::Approved),
            ..Default::default()
        };
        let updated = store.update_project("3", &patch).unwrap();
        let after = store.metrics();

        assert_eq!(updated.status, ProjectStatus::Approved);
        assert_eq!(after.approved_projects, before.approved_projects + 1);
        assert_eq!(after.pending_verification, before.pending_verification - 1);
        assert_eq!(after.total_projects, before.total_projects);
    }

    #[test]
    fn test_issue_credit_tolerates_dangling_project() {
        let store = DomainStore::new();
        let credit = store.issue_credit("42", 75.0, None);

        assert_eq!(credit.id, "BC-001");
        assert_eq!(credit.project_id, "42");
        assert_eq!(credit.project_name, "");
        assert_eq!(credit.verification_report, "/reports/BC-001-verification.pdf");
        assert_eq!(store.metrics().total_credits_issued, 75.0);
    }

    #[test]
    fn test_issue_denormalizes_name_at_issuance() {
        let store = DomainStore::new();
        store.add_project(new_project_fields("Original Name", ProjectStatus::Approved));
        let credit = store.issue_credit("1", 50.0, None);
        assert_eq!(credit.project_name, "Original Name");

        // A later rename does not touch the issued credit
        let patch = ProjectPatch {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };
        store.update_project("1", &patch).unwrap();
        assert_eq!(store.credits()[0].project_name, "Original Name");
    }

    #[test]
    fn test_retire_is_idempotent() {
        let store = DomainStore::new();
        store.issue_credit("1", 100.0, None);

        assert_eq!(
            store.retire_credit("BC-001").unwrap().status,
            CreditStatus::Retired
        );
        let feed_len = store.activities().len();

        // Second retire keeps the status and records nothing new
        assert_eq!(
            store.retire_credit("BC-001").unwrap().status,
            CreditStatus::Retired
        );
        assert_eq!(store.activities().len(), feed_len);

        assert!(store.retire_credit("BC-999").is_none());
    }

    #[test]
    fn test_mutations_append_to_activity_feed() {
        let store = DomainStore::new();
        store.add_project(new_project_fields("X", ProjectStatus::Pending));
        store.issue_credit("1", 10.0, None);
        store.retire_credit("BC-001");

        let feed = store.activities();
        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].kind, ActivityKind::Project);
        assert_eq!(feed[1].kind, ActivityKind::Credit);
        // Ids are sequential and the feed is insertion-ordered
        assert_eq!(feed[0].id, "1");
        assert_eq!(feed[2].id, "3");
    }

    #[test]
    fn test_record_activity_takes_the_shared_sequence() {
        let store = DomainStore::new();
        store.add_project(new_project_fields("X", ProjectStatus::Pending));

        let activity = store.record_activity(ActivityKind::System, "Nightly report generated");

        assert_eq!(activity.kind, ActivityKind::System);
        assert_eq!(activity.id, "2");
        let feed = store.activities();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[1].message, "Nightly report generated");
    }

    #[test]
    fn test_snapshot_is_stable_across_mutations() {
        let store = DomainStore::new();
        store.add_project(new_project_fields("X", ProjectStatus::Pending));

        let snapshot = store.projects();
        store.add_project(new_project_fields("Y", ProjectStatus::Pending));

        // The earlier snapshot still sees one project
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.projects().len(), 2);
    }

    #[test]
    fn test_metrics_match_collection_lengths() {
        let store = DomainStore::new();
        store.add_project(new_project_fields("A", ProjectStatus::Pending));
        store.add_project(new_project_fields("B", ProjectStatus::Approved));
        store.issue_credit("1", 150.0, None);
        store.issue_credit("2", 100.0, None);
        store.retire_credit("BC-002");

        let metrics = store.metrics();
        assert_eq!(metrics.total_projects as usize, store.projects().len());
        assert_eq!(metrics.pending_verification, 1);
        assert_eq!(metrics.approved_projects, 1);
        // Retiring the 100 tCO2e batch counts against the issued 150
        assert_eq!(metrics.total_credits_issued, 250.0);
        assert_eq!(metrics.available_credits, 50.0);
    }
}
