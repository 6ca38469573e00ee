// SPDX-License-Identifier: MIT

//! Blue Carbon Registry: backend API for tracking blue carbon restoration
//! projects, issued credits and a simulated credit marketplace.
//!
//! All "blockchain" behavior is local simulation with generated values and
//! configurable delays; there is no real chain anywhere in this crate.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use services::LedgerService;
use store::{DomainStore, SessionStore};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: DomainStore,
    pub sessions: SessionStore,
    pub ledger: LedgerService,
}

impl AppState {
    /// Wire the stores and services from a config.
    pub fn from_config(config: Config) -> Self {
        let sessions = SessionStore::new(
            config.auth_policy.clone(),
            config.default_organization.clone(),
            config.default_login_role.clone(),
            config.default_signup_role.clone(),
        );
        let store = DomainStore::new();
        if config.seed_demo_data {
            services::seed::load_demo_data(&store);
        }
        let ledger = LedgerService::new(config.ledger_latency);

        Self {
            config,
            store,
            sessions,
            ledger,
        }
    }
}
