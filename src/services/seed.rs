//! Demo dataset loaded at startup when `SEED_DEMO_DATA` is set.
//!
//! The records mirror the reference deployment's mock registry so the
//! dashboard has something to show on a fresh instance.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    Activity, ActivityKind, Credit, CreditStatus, Project, ProjectMetadata, ProjectStatus,
    ProjectType, Transaction, TransactionStatus,
};
use crate::store::DomainStore;

/// Populate the store with the demo registry.
pub fn load_demo_data(store: &DomainStore) {
    store.load_dataset(
        demo_projects(),
        demo_credits(),
        demo_activities(),
        demo_transactions(),
    );
    tracing::info!(
        projects = store.projects().len(),
        credits = store.credits().len(),
        transactions = store.transactions().len(),
        "Demo dataset loaded"
    );
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn instant(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

fn demo_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            name: "Mangrove Restoration Sundarbans".to_string(),
            project_type: ProjectType::Mangrove,
            location: "Sundarbans, West Bengal, India".to_string(),
            area: 150.0,
            status: ProjectStatus::Approved,
            estimated_carbon: 2250.0,
            date_created: date(2024, 1, 15),
            metadata: ProjectMetadata {
                coordinator: "Dr. Sarah Johnson".to_string(),
                funding_source: "Blue Carbon Initiative".to_string(),
                methodology: "VM0033".to_string(),
                monitoring_frequency: "Quarterly".to_string(),
            },
            notes: "Restoring 150 hectares of mangrove ecosystem in the Sundarbans, \
                    replanting native species and removing invasive vegetation."
                .to_string(),
        },
        Project {
            id: "2".to_string(),
            name: "Seagrass Conservation Gulf of Mannar".to_string(),
            project_type: ProjectType::Seagrass,
            location: "Gulf of Mannar, Tamil Nadu, India".to_string(),
            area: 200.0,
            status: ProjectStatus::Pending,
            estimated_carbon: 1800.0,
            date_created: date(2024, 2, 20),
            metadata: ProjectMetadata {
                coordinator: "Prof. Michael Chen".to_string(),
                funding_source: "EPA Grant".to_string(),
                methodology: "VM0033".to_string(),
                monitoring_frequency: "Monthly".to_string(),
            },
            notes: "Large-scale seagrass restoration focusing on Halophila ovalis, \
                    with water quality monitoring and community engagement."
                .to_string(),
        },
        Project {
            id: "3".to_string(),
            name: "Saltmarsh Restoration Bhitarkanika".to_string(),
            project_type: ProjectType::Saltmarsh,
            location: "Bhitarkanika, Odisha, India".to_string(),
            area: 120.0,
            status: ProjectStatus::Approved,
            estimated_carbon: 1680.0,
            date_created: date(2024, 1, 8),
            metadata: ProjectMetadata {
                coordinator: "Dr. Emily Rodriguez".to_string(),
                funding_source: "State Environmental Fund".to_string(),
                methodology: "VM0033".to_string(),
                monitoring_frequency: "Bi-monthly".to_string(),
            },
            notes: "Restoration of degraded saltmarsh habitat with native plant species, \
                    including sediment management and invasive species control."
                .to_string(),
        },
        Project {
            id: "4".to_string(),
            name: "Coastal Wetland Protection Gujarat".to_string(),
            project_type: ProjectType::Mangrove,
            location: "Gulf of Kutch, Gujarat, India".to_string(),
            area: 300.0,
            status: ProjectStatus::Rejected,
            estimated_carbon: 4500.0,
            date_created: date(2024, 3, 1),
            metadata: ProjectMetadata {
                coordinator: "Dr. James Wilson".to_string(),
                funding_source: "Private Foundation".to_string(),
                methodology: "VM0033".to_string(),
                monitoring_frequency: "Quarterly".to_string(),
            },
            notes: "Rejected due to insufficient baseline data. Resubmission planned \
                    with additional monitoring data."
                .to_string(),
        },
        Project {
            id: "5".to_string(),
            name: "Blue Carbon Research Chilika Lake".to_string(),
            project_type: ProjectType::Seagrass,
            location: "Chilika Lake, Odisha, India".to_string(),
            area: 80.0,
            status: ProjectStatus::Pending,
            estimated_carbon: 720.0,
            date_created: date(2024, 3, 10),
            metadata: ProjectMetadata {
                coordinator: "Dr. Lisa Park".to_string(),
                funding_source: "Research Grant".to_string(),
                methodology: "VM0033".to_string(),
                monitoring_frequency: "Weekly".to_string(),
            },
            notes: "Research project studying sequestration rates in seagrass meadows \
                    with advanced monitoring equipment."
                .to_string(),
        },
    ]
}

fn demo_credits() -> Vec<Credit> {
    vec![
        Credit {
            id: "BC-001".to_string(),
            project_id: "1".to_string(),
            project_name: "Mangrove Restoration Sundarbans".to_string(),
            amount: 150.0,
            status: CreditStatus::Issued,
            date_issued: date(2024, 2, 15),
            verification_report: "/reports/BC-001-verification.pdf".to_string(),
        },
        Credit {
            id: "BC-002".to_string(),
            project_id: "3".to_string(),
            project_name: "Saltmarsh Restoration Bhitarkanika".to_string(),
            amount: 120.0,
            status: CreditStatus::Issued,
            date_issued: date(2024, 2, 28),
            verification_report: "/reports/BC-002-verification.pdf".to_string(),
        },
        Credit {
            id: "BC-003".to_string(),
            project_id: "1".to_string(),
            project_name: "Mangrove Restoration Sundarbans".to_string(),
            amount: 100.0,
            status: CreditStatus::Retired,
            date_issued: date(2024, 3, 5),
            verification_report: "/reports/BC-003-verification.pdf".to_string(),
        },
    ]
}

fn demo_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: "1".to_string(),
            message: "Project 'Mangrove Restoration Sundarbans' was approved".to_string(),
            timestamp: instant("2024-03-15T10:30:00Z"),
            kind: ActivityKind::Project,
        },
        Activity {
            id: "2".to_string(),
            message: "150 credits were issued to Blue Carbon Initiative".to_string(),
            timestamp: instant("2024-03-15T09:15:00Z"),
            kind: ActivityKind::Credit,
        },
        Activity {
            id: "3".to_string(),
            message: "Project 'Coastal Wetland Protection Gujarat' verification completed"
                .to_string(),
            timestamp: instant("2024-03-14T16:45:00Z"),
            kind: ActivityKind::Project,
        },
        Activity {
            id: "4".to_string(),
            message: "100 credits were retired by Ocean Foundation".to_string(),
            timestamp: instant("2024-03-14T14:20:00Z"),
            kind: ActivityKind::Credit,
        },
        Activity {
            id: "5".to_string(),
            message: "System maintenance completed successfully".to_string(),
            timestamp: instant("2024-03-13T22:00:00Z"),
            kind: ActivityKind::System,
        },
    ]
}

fn demo_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
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
            transaction_date: date(2024, 1, 15),
            status: TransactionStatus::Completed,
            project_type: "Mangrove Restoration".to_string(),
        },
        Transaction {
            id: "TXN-002".to_string(),
            seller_id: "NGO-002".to_string(),
            seller_name: "Priya Sharma".to_string(),
            seller_company: "Sustainable India Trust".to_string(),
            seller_location: "Delhi, NCR".to_string(),
            seller_registration: "NGO/2020/0023456".to_string(),
            buyer_id: "CMP-002".to_string(),
            buyer_company: "Apple Inc".to_string(),
            credit_amount: 2000.0,
            price_per_credit: 28.75,
            total_value: 57500.0,
            transaction_date: date(2024, 1, 14),
            status: TransactionStatus::Pending,
            project_type: "Seagrass Conservation".to_string(),
        },
        Transaction {
            id: "TXN-003".to_string(),
            seller_id: "NGO-003".to_string(),
            seller_name: "Arjun Patel".to_string(),
            seller_company: "Carbon Neutral India".to_string(),
            seller_location: "Ahmedabad, Gujarat".to_string(),
            seller_registration: "NGO/2018/0034567".to_string(),
            buyer_id: "CMP-003".to_string(),
            buyer_company: "Google LLC".to_string(),
            credit_amount: 800.0,
            price_per_credit: 32.0,
            total_value: 25600.0,
            transaction_date: date(2024, 1, 13),
            status: TransactionStatus::Completed,
            project_type: "Coastal Wetland Protection".to_string(),
        },
        Transaction {
            id: "TXN-004".to_string(),
            seller_id: "NGO-004".to_string(),
            seller_name: "Meera Reddy".to_string(),
            seller_company: "Wind Energy Alliance".to_string(),
            seller_location: "Hyderabad, Telangana".to_string(),
            seller_registration: "NGO/2021/0045678".to_string(),
            buyer_id: "CMP-004".to_string(),
            buyer_company: "Amazon".to_string(),
            credit_amount: 1200.0,
            price_per_credit: 26.25,
            total_value: 31500.0,
            transaction_date: date(2024, 1, 12),
            status: TransactionStatus::Completed,
            project_type: "Salt Marsh Restoration".to_string(),
        },
        Transaction {
            id: "TXN-005".to_string(),
            seller_id: "NGO-005".to_string(),
            seller_name: "Vikram Singh".to_string(),
            seller_company: "Ocean Conservation Society".to_string(),
            seller_location: "Chennai, Tamil Nadu".to_string(),
            seller_registration: "NGO/2019/0056789".to_string(),
            buyer_id: "CMP-005".to_string(),
            buyer_company: "Tesla Inc".to_string(),
            credit_amount: 950.0,
            price_per_credit: 30.0,
            total_value: 28500.0,
            transaction_date: date(2024, 1, 11),
            status: TransactionStatus::Cancelled,
            project_type: "Marine Protected Areas".to_string(),
        },
    ]
}
