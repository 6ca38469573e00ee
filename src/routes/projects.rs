// SPDX-License-Identifier: MIT

//! Project registry routes.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::models::{Project, ProjectMetadata, ProjectPatch, ProjectStatus, ProjectType};
use crate::store::NewProject;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/projects", get(list_projects).post(create_project))
        .route("/api/projects/{id}", get(get_project).patch(update_project))
}

#[derive(Deserialize)]
struct ProjectsQuery {
    /// Filter by verification status
    status: Option<ProjectStatus>,
    /// Filter by ecosystem type
    #[serde(rename = "type")]
    project_type: Option<ProjectType>,
    /// Case-insensitive match on name or location
    search: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
    pub total: u32,
}

/// List projects in insertion order, with optional filtering.
async fn list_projects(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProjectsQuery>,
) -> Json<ProjectsResponse> {
    let snapshot = state.store.projects();
    let search = params.search.as_deref().map(str::to_lowercase);

    let projects: Vec<Project> = snapshot
        .iter()
        .filter(|p| params.status.is_none_or(|s| p.status == s))
        .filter(|p| params.project_type.is_none_or(|t| p.project_type == t))
        .filter(|p| {
            search.as_deref().is_none_or(|q| {
                p.name.to_lowercase().contains(q) || p.location.to_lowercase().contains(q)
            })
        })
        .cloned()
        .collect();

    Json(ProjectsResponse {
        total: projects.len() as u32,
        projects,
    })
}

/// Get one project by id.
async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Project>> {
    state
        .store
        .projects()
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))
}

fn default_status() -> ProjectStatus {
    ProjectStatus::Pending
}

/// Payload for registering a project. Identity fields are assigned by the
/// store, never taken from the request.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,
    /// Hectares; must be positive
    #[validate(range(exclusive_min = 0.0, message = "area must be positive"))]
    pub area: f64,
    #[serde(default = "default_status")]
    pub status: ProjectStatus,
    /// tCO2e; must not be negative
    #[validate(range(min = 0.0, message = "estimatedCarbon must not be negative"))]
    pub estimated_carbon: f64,
    pub metadata: ProjectMetadata,
    #[serde(default)]
    pub notes: String,
}

/// Register a new project.
async fn create_project(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateProjectRequest>,
) -> Result<Json<Project>> {
    body.validate()?;

    let project = state.store.add_project(NewProject {
        name: body.name,
        project_type: body.project_type,
        location: body.location,
        area: body.area,
        status: body.status,
        estimated_carbon: body.estimated_carbon,
        metadata: body.metadata,
        notes: body.notes,
    });

    Ok(Json(project))
}

/// Shallow-merge a partial update into a project.
///
/// The store treats a missing id as a no-op; at the HTTP boundary that
/// surfaces as a 404 so the client is not left guessing.
async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<ProjectPatch>,
) -> Result<Json<Project>> {
    if patch.is_empty() {
        return Err(AppError::BadRequest("empty update".to_string()));
    }

    state
        .store
        .update_project(&id, &patch)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))
}
