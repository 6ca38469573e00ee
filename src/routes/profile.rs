// SPDX-License-Identifier: MIT

//! Profile and session routes for authenticated users.

use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthSession;
use crate::models::{ProfilePatch, UserProfile};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me).put(update_me))
        .route("/api/logout", post(logout))
}

/// Get the current user's profile.
async fn get_me(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AuthSession>,
) -> Result<Json<UserProfile>> {
    state
        .sessions
        .profile(&session.email)
        .map(Json)
        .ok_or(AppError::Unauthorized)
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UpdateProfileResponse {
    pub success: bool,
    pub user: UserProfile,
}

/// Merge a partial update into the current profile.
async fn update_me(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AuthSession>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<UpdateProfileResponse>> {
    if let Some(picture) = &patch.profile_picture {
        validate_profile_picture(picture)?;
    }

    let user = state
        .sessions
        .update_profile(&session.email, &patch)
        .ok_or(AppError::Unauthorized)?;

    tracing::info!(email = %session.email, "Profile updated");
    Ok(Json(UpdateProfileResponse {
        success: true,
        user,
    }))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Clear the current session. The bearer token is dead afterwards even if
/// it has not expired.
async fn logout(
    State(state): State<Arc<AppState>>,
    Extension(session): Extension<AuthSession>,
) -> Json<LogoutResponse> {
    state.sessions.logout(&session.email);
    Json(LogoutResponse { success: true })
}

/// Accept either a plain URL or a base64 `data:` URI for the profile picture.
fn validate_profile_picture(value: &str) -> Result<()> {
    let Some(rest) = value.strip_prefix("data:") else {
        return Ok(()); // Plain URL, nothing to decode
    };

    let payload = rest
        .split_once(";base64,")
        .map(|(_, payload)| payload)
        .ok_or_else(|| {
            AppError::Validation("profilePicture data URI must be base64-encoded".to_string())
        })?;

    STANDARD.decode(payload).map_err(|_| {
        AppError::Validation("profilePicture data URI payload is not valid base64".to_string())
    })?;

    Ok(())
}
