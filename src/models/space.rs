//! Space models.

use serde::{Deserialize, Serialize};

use super::common::{MemberEntry, Status};

/// A space: the top level of the hierarchy inside a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    /// Space id.
    #[serde(deserialize_with = "super::common::string_or_number")]
    pub id: String,

    /// Space name.
    pub name: String,

    /// Whether the space is private.
    #[serde(default)]
    pub private: bool,

    /// Brand colour.
    #[serde(default)]
    pub color: Option<String>,

    /// Avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,

    /// Whether the space allows multiple assignees per task.
    #[serde(default)]
    pub multiple_assignees: bool,

    /// Statuses available in the space.
    #[serde(default)]
    pub statuses: Vec<Status>,

    /// ClickApps toggled on or off for the space.
    #[serde(default)]
    pub features: Option<SpaceFeatures>,

    /// Whether the space is archived.
    #[serde(default)]
    pub archived: bool,

    /// Members of a private space.
    #[serde(default)]
    pub members: Vec<MemberEntry>,
}

/// A feature toggle. The API wraps each flag as `{"enabled": bool, ...}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureToggle {
    pub enabled: bool,
}

impl FeatureToggle {
    pub fn on() -> Self {
        Self { enabled: true }
    }

    pub fn off() -> Self {
        Self { enabled: false }
    }
}

/// ClickApps for a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceFeatures {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_dates: Option<FeatureToggle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_tracking: Option<FeatureToggle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<FeatureToggle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_estimates: Option<FeatureToggle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklists: Option<FeatureToggle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<FeatureToggle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remap_dependencies: Option<FeatureToggle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_warning: Option<FeatureToggle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolios: Option<FeatureToggle>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpacesResponse {
    pub spaces: Vec<Space>,
}

/// Request body for `POST v2/team/{team_id}/space`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateSpaceRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_assignees: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<SpaceFeatures>,
}

/// Request body for `PUT v2/space/{space_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateSpaceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_can_manage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_assignees: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<SpaceFeatures>,
}
