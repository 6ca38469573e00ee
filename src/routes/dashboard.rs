// SPDX-License-Identifier: MIT

//! Dashboard summary and activity feed routes.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::{Activity, RegistryMetrics};
use crate::AppState;

const DEFAULT_ACTIVITY_LIMIT: usize = 20;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/activities", get(list_activities))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DashboardResponse {
    pub metrics: RegistryMetrics,
    /// Most recent entries first
    pub recent_activities: Vec<Activity>,
}

/// Summary metrics plus the most recent activity entries, recomputed from
/// the live collections on every call.
async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        metrics: state.store.metrics(),
        recent_activities: recent(&state, DEFAULT_ACTIVITY_LIMIT),
    })
}

#[derive(Deserialize)]
struct ActivitiesQuery {
    limit: Option<usize>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitiesResponse {
    pub activities: Vec<Activity>,
    pub total: u32,
}

/// Activity feed, most recent first.
async fn list_activities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ActivitiesQuery>,
) -> Json<ActivitiesResponse> {
    let total = state.store.activities().len() as u32;
    let limit = params.limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT);
    Json(ActivitiesResponse {
        activities: recent(&state, limit),
        total,
    })
}

fn recent(state: &AppState, limit: usize) -> Vec<Activity> {
    let snapshot = state.store.activities();
    let mut activities: Vec<Activity> = snapshot.as_ref().clone();
    activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    activities.truncate(limit);
    activities
}
