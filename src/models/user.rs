//! Workspace members, users and guests.

use serde::{Deserialize, Serialize};

use super::common::User;
use super::workspace::Workspace;

#[derive(Debug, Deserialize)]
pub(crate) struct MembersResponse {
    pub members: Vec<User>,
}

/// A user as seen by a workspace, with their role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceUser {
    #[serde(flatten)]
    pub user: User,

    /// Role: 1 owner, 2 admin, 3 member, 4 guest.
    #[serde(default)]
    pub role: Option<i32>,

    #[serde(default)]
    pub custom_role: Option<serde_json::Value>,

    /// Unix milliseconds, as sent by the API.
    #[serde(default)]
    pub last_active: Option<String>,

    #[serde(default)]
    pub date_joined: Option<String>,

    #[serde(default)]
    pub date_invited: Option<String>,
}

impl WorkspaceUser {
    /// Whether the user is an owner or admin.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Some(1) | Some(2))
    }
}

/// A workspace member record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceMember {
    pub user: WorkspaceUser,
    #[serde(default)]
    pub invited_by: Option<User>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MemberEnvelope {
    pub member: WorkspaceMember,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeamEnvelope {
    pub team: Workspace,
}

/// Request body for `POST v2/team/{team_id}/user`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InviteUserRequest {
    pub email: String,
    pub admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_role_id: Option<i64>,
}

/// Request body for `PUT v2/team/{team_id}/user/{user_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_role_id: Option<i64>,
}

/// A guest (Enterprise workspaces).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub user: WorkspaceUser,
    #[serde(default)]
    pub invited_by: Option<User>,
    #[serde(default)]
    pub can_see_time_spent: Option<bool>,
    #[serde(default)]
    pub can_see_time_estimated: Option<bool>,
    #[serde(default)]
    pub can_edit_tags: Option<bool>,
    #[serde(default)]
    pub can_create_views: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GuestEnvelope {
    pub guest: Guest,
}

/// Request body for `POST v2/team/{team_id}/guest`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InviteGuestRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_see_time_spent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_see_time_estimated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_create_views: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_role_id: Option<i64>,
}

/// Request body for `PUT v2/team/{team_id}/guest/{guest_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditGuestRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_edit_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_see_time_spent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_see_time_estimated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_create_views: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_role_id: Option<i64>,
}

/// Access level granted to a guest on a task, list or folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestPermission {
    Read,
    Comment,
    Edit,
    Create,
}

/// Request body for sharing an item with a guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestAccessRequest {
    pub permission_level: GuestPermission,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_envelope_flattens_user() {
        let json = r#"{"member": {
            "user": {"id": 183, "username": "Ada", "email": "ada@example.com", "role": 2,
                     "last_active": "1704067200000", "date_joined": "1700000000000"},
            "invited_by": {"id": 1, "username": "Owner"}
        }}"#;
        let parsed: MemberEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.member.user.user.id, 183);
        assert!(parsed.member.user.is_admin());
        assert_eq!(parsed.member.invited_by.unwrap().id, 1);
    }

    #[test]
    fn test_guest_access_request() {
        let json = serde_json::to_value(GuestAccessRequest {
            permission_level: GuestPermission::Comment,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"permission_level": "comment"}));
    }
}
