// SPDX-License-Identifier: MIT

//! Credit registry routes.
//!
//! Issuance and retirement run through the simulated ledger before touching
//! the store, so the client gets a synthetic receipt alongside the record.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{Credit, CreditStatus};
use crate::services::TxReceipt;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/credits", get(list_credits))
        .route("/api/credits/issue", post(issue_credits))
        .route("/api/credits/{id}/retire", post(retire_credits))
        .route("/api/credits/{id}/certificate", get(get_certificate))
}

#[derive(Deserialize)]
struct CreditsQuery {
    status: Option<CreditStatus>,
    /// Case-insensitive match on credit id or project name
    search: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreditsResponse {
    pub credits: Vec<Credit>,
    /// Sum of amounts regardless of status (tCO2e)
    pub total_issued: f64,
    /// Issued minus retired (tCO2e)
    pub available: f64,
}

/// List credits in insertion order, with optional filtering.
async fn list_credits(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CreditsQuery>,
) -> Json<CreditsResponse> {
    let snapshot = state.store.credits();
    let search = params.search.as_deref().map(str::to_lowercase);

    let credits: Vec<Credit> = snapshot
        .iter()
        .filter(|c| params.status.is_none_or(|s| c.status == s))
        .filter(|c| {
            search.as_deref().is_none_or(|q| {
                c.id.to_lowercase().contains(q) || c.project_name.to_lowercase().contains(q)
            })
        })
        .cloned()
        .collect();

    let metrics = state.store.metrics();
    Json(CreditsResponse {
        credits,
        total_issued: metrics.total_credits_issued,
        available: metrics.available_credits,
    })
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct IssueCreditsRequest {
    #[validate(length(min = 1, message = "projectId is required"))]
    pub project_id: String,
    /// tCO2e; must be positive
    #[validate(range(exclusive_min = 0.0, message = "amount must be positive"))]
    pub amount: f64,
    pub verification_report: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreditMutationResponse {
    pub credit: Credit,
    pub receipt: TxReceipt,
}

/// Issue a credit batch against a project.
///
/// `projectId` is accepted unverified; the registry tolerates dangling
/// references by design.
async fn issue_credits(
    State(state): State<Arc<AppState>>,
    Json(body): Json<IssueCreditsRequest>,
) -> Result<Json<CreditMutationResponse>> {
    body.validate()?;

    let receipt = state.ledger.submit_transaction("issue_credits").await?;
    let credit = state
        .store
        .issue_credit(&body.project_id, body.amount, body.verification_report);

    Ok(Json(CreditMutationResponse { credit, receipt }))
}

/// Retire a credit batch.
async fn retire_credits(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CreditMutationResponse>> {
    // Check existence before paying the simulated round-trip
    if !state.store.credits().iter().any(|c| c.id == id) {
        return Err(AppError::NotFound(format!("Credit {} not found", id)));
    }

    let receipt = state.ledger.submit_transaction("retire_credits").await?;
    let credit = state
        .store
        .retire_credit(&id)
        .ok_or_else(|| AppError::NotFound(format!("Credit {} not found", id)))?;

    Ok(Json(CreditMutationResponse { credit, receipt }))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CertificateResponse {
    pub url: String,
}

/// Certificate download link for a credit, by path convention. There is no
/// generation step behind it.
async fn get_certificate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CertificateResponse>> {
    state
        .store
        .credits()
        .iter()
        .find(|c| c.id == id)
        .map(|c| {
            Json(CertificateResponse {
                url: c.certificate_path(),
            })
        })
        .ok_or_else(|| AppError::NotFound(format!("Credit {} not found", id)))
}
