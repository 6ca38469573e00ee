// SPDX-License-Identifier: MIT

//! Restoration project model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Ecosystem type of a restoration project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ProjectType {
    Mangrove,
    Seagrass,
    Saltmarsh,
}

/// Verification status of a project.
///
/// Transitions are unconstrained: any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ProjectStatus {
    Pending,
    Approved,
    Rejected,
}

/// Free-text metadata recorded with every project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProjectMetadata {
    pub coordinator: String,
    pub funding_source: String,
    pub methodology: String,
    pub monitoring_frequency: String,
}

/// A blue carbon restoration project.
///
/// `id` and `date_created` are assigned by the store at creation time and
/// never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Project {
    /// Sequential registry id (stringified), unique for the store's lifetime
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub location: String,
    /// Project area in hectares
    pub area: f64,
    pub status: ProjectStatus,
    /// Estimated sequestration in tCO2e
    pub estimated_carbon: f64,
    /// Date-only, set once at creation
    pub date_created: NaiveDate,
    pub metadata: ProjectMetadata,
    pub notes: String,
}

/// Partial update for a project.
///
/// Shallow merge semantics: fields present replace the existing value, absent
/// fields are untouched. `id` and `date_created` are not representable here,
/// which is what keeps identity stable across updates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProjectPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<ProjectType>,
    pub location: Option<String>,
    pub area: Option<f64>,
    pub status: Option<ProjectStatus>,
    pub estimated_carbon: Option<f64>,
    pub metadata: Option<ProjectMetadata>,
    pub notes: Option<String>,
}

impl ProjectPatch {
    /// Merge this patch into a project, field by field.
    pub fn apply(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name = name.clone();
        }
        if let Some(project_type) = self.project_type {
            project.project_type = project_type;
        }
        if let Some(location) = &self.location {
            project.location = location.clone();
        }
        if let Some(area) = self.area {
            project.area = area;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(estimated_carbon) = self.estimated_carbon {
            project.estimated_carbon = estimated_carbon;
        }
        if let Some(metadata) = &self.metadata {
            project.metadata = metadata.clone();
        }
        if let Some(notes) = &self.notes {
            project.notes = notes.clone();
        }
    }

    /// True if no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.project_type.is_none()
            && self.location.is_none()
            && self.area.is_none()
            && self.status.is_none()
            && self.estimated_carbon.is_none()
            && self.metadata.is_none()
            && self.notes.is_none()
    }
}
