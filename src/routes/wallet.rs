// SPDX-License-Identifier: MIT

//! Simulated wallet routes.

use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::Result;
use crate::services::ledger::{explorer_contract_url, CONTRACT_ADDRESS};
use crate::services::WalletSession;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/wallet", get(wallet_status))
        .route("/api/wallet/connect", post(connect_wallet))
        .route("/api/wallet/disconnect", post(disconnect_wallet))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WalletStatusResponse {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet: Option<WalletSession>,
    pub contract_address: String,
    pub explorer_url: String,
}

fn status_body(wallet: Option<WalletSession>) -> WalletStatusResponse {
    WalletStatusResponse {
        connected: wallet.is_some(),
        wallet,
        contract_address: CONTRACT_ADDRESS.to_string(),
        explorer_url: explorer_contract_url(),
    }
}

/// Current wallet state.
async fn wallet_status(State(state): State<Arc<AppState>>) -> Json<WalletStatusResponse> {
    Json(status_body(state.ledger.wallet()))
}

/// Connect a simulated wallet. Waits out the configured latency and mints a
/// random address and gas price.
async fn connect_wallet(State(state): State<Arc<AppState>>) -> Result<Json<WalletStatusResponse>> {
    let session = state.ledger.connect_wallet().await?;
    Ok(Json(status_body(Some(session))))
}

/// Drop the wallet session.
async fn disconnect_wallet(State(state): State<Arc<AppState>>) -> Json<WalletStatusResponse> {
    state.ledger.disconnect_wallet();
    Json(status_body(None))
}
