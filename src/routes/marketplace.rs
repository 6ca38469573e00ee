// SPDX-License-Identifier: MIT

//! Marketplace routes: monitoring credit sales between NGO sellers and
//! corporate buyers.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::models::{MarketplaceSummary, Transaction, TransactionStatus};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/marketplace/transactions", get(list_transactions))
        .route(
            "/api/marketplace/transactions/{id}/approve",
            post(approve_transaction),
        )
        .route(
            "/api/marketplace/transactions/{id}/reject",
            post(reject_transaction),
        )
        .route("/api/marketplace/summary", get(get_summary))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionsQuery {
    status: Option<TransactionStatus>,
    project_type: Option<String>,
    /// Case-insensitive match on transaction id, seller name or buyer company
    search: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub total: u32,
}

/// List transactions in insertion order, with optional filtering.
async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TransactionsQuery>,
) -> Json<TransactionsResponse> {
    let snapshot = state.store.transactions();
    let search = params.search.as_deref().map(str::to_lowercase);

    let transactions: Vec<Transaction> = snapshot
        .iter()
        .filter(|t| params.status.is_none_or(|s| t.status == s))
        .filter(|t| {
            params
                .project_type
                .as_deref()
                .is_none_or(|pt| t.project_type == pt)
        })
        .filter(|t| {
            search.as_deref().is_none_or(|q| {
                t.id.to_lowercase().contains(q)
                    || t.seller_name.to_lowercase().contains(q)
                    || t.buyer_company.to_lowercase().contains(q)
            })
        })
        .cloned()
        .collect();

    Json(TransactionsResponse {
        total: transactions.len() as u32,
        transactions,
    })
}

/// Mark a pending transaction as completed.
async fn approve_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>> {
    state
        .store
        .approve_transaction(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Transaction {} not found", id)))
}

/// Mark a pending transaction as cancelled.
async fn reject_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>> {
    state
        .store
        .cancel_transaction(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Transaction {} not found", id)))
}

/// Marketplace summary counters.
async fn get_summary(State(state): State<Arc<AppState>>) -> Json<MarketplaceSummary> {
    Json(state.store.marketplace_summary())
}
