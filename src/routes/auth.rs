// SPDX-License-Identifier: MIT

//! Login and signup routes.
//!
//! Both return a bearer JWT plus the established profile. The credential
//! check itself lives in the session store and follows the configured
//! [`AuthPolicy`](crate::config::AuthPolicy).

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::create_jwt;
use crate::models::UserProfile;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/signup", post(signup))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Successful authentication response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Establish a session from credentials.
///
/// Any failure, policy rejection included, is a 401 with no partial state.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let user = state
        .sessions
        .login(&body.email, &body.password)
        .ok_or(AppError::LoginFailed)?;

    let token = create_jwt(&user.email, &state.config.jwt_signing_key)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    tracing::info!(email = %user.email, "Login successful");
    Ok(Json(AuthResponse { token, user }))
}

/// Establish a session for a new user. The identity lives only as long as
/// the session; there is no account store behind it.
async fn signup(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SignupRequest>,
) -> Result<Json<AuthResponse>> {
    let user = state
        .sessions
        .signup(&body.email, &body.password, &body.name)
        .ok_or_else(|| {
            AppError::Validation("email, password and name are all required".to_string())
        })?;

    let token = create_jwt(&user.email, &state.config.jwt_signing_key)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    tracing::info!(email = %user.email, "Signup successful");
    Ok(Json(AuthResponse { token, user }))
}
