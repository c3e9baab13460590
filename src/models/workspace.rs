//! Workspace (team) and authorization models.

use serde::{Deserialize, Serialize};

use super::common::{ContainerRef, MemberEntry, User};

/// A workspace. The v2 API calls these "teams".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    /// Workspace id.
    #[serde(deserialize_with = "super::common::string_or_number")]
    pub id: String,

    /// Workspace name.
    pub name: String,

    /// Brand colour.
    #[serde(default)]
    pub color: Option<String>,

    /// Avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,

    /// Members.
    #[serde(default)]
    pub members: Vec<MemberEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WorkspacesResponse {
    pub teams: Vec<Workspace>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserResponse {
    pub user: User,
}

/// Seat usage for a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSeats {
    pub members: MemberSeats,
    pub guests: GuestSeats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSeats {
    pub filled_members_seats: u32,
    pub total_member_seats: u32,
    pub empty_member_seats: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestSeats {
    pub filled_guest_seats: u32,
    pub total_guest_seats: u32,
    pub empty_guest_seats: u32,
}

/// The workspace's subscription plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspacePlan {
    pub plan_name: String,
    #[serde(deserialize_with = "super::common::string_or_number")]
    pub plan_id: String,
}

/// A custom role (Enterprise workspaces).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRole {
    pub id: i64,
    #[serde(default)]
    pub team_id: Option<String>,
    pub name: String,
    /// Built-in role this one derives from.
    #[serde(default)]
    pub inherited_role: Option<i64>,
    #[serde(default)]
    pub date_created: Option<String>,
    /// Only present when members were requested.
    #[serde(default)]
    pub members: Vec<User>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CustomRolesResponse {
    pub custom_roles: Vec<CustomRole>,
}

/// Items shared with the token's user without access to their parents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedHierarchy {
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    pub lists: Vec<ContainerRef>,
    #[serde(default)]
    pub folders: Vec<ContainerRef>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SharedHierarchyResponse {
    pub shared: SharedHierarchy,
}
