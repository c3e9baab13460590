//! User group models.

use serde::{Deserialize, Serialize};

use super::common::User;
use super::task::MemberDelta;

/// A user group (called Teams in the app).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGroup {
    pub id: String,
    #[serde(default, deserialize_with = "super::common::opt_string_or_number")]
    pub team_id: Option<String>,
    #[serde(default)]
    pub userid: Option<i64>,
    pub name: String,
    /// Mention handle (`@handle`).
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub initials: Option<String>,
    #[serde(default)]
    pub members: Vec<User>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserGroupsResponse {
    pub groups: Vec<UserGroup>,
}

/// Request body for `POST v2/team/{team_id}/group`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateUserGroupRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    pub members: Vec<i64>,
}

/// Request body for `PUT v2/group/{group_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateUserGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "MemberDelta::is_empty")]
    pub members: MemberDelta<i64>,
}
