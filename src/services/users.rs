//! Workspace users and guests.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{
    EditGuestRequest, EditUserRequest, Guest, GuestAccessRequest, GuestEnvelope,
    GuestPermission, InviteGuestRequest, InviteUserRequest, MemberEnvelope, TeamEnvelope,
    Workspace, WorkspaceMember,
};
use crate::validation::{require_id, require_text};

/// Workspace user endpoints (Enterprise workspaces).
#[async_trait]
pub trait UsersService: Send + Sync {
    /// `POST v2/team/{team_id}/user`
    async fn invite_user_to_workspace(
        &self,
        team_id: &str,
        request: &InviteUserRequest,
    ) -> Result<Workspace>;

    /// `GET v2/team/{team_id}/user/{user_id}`
    async fn get_user(&self, team_id: &str, user_id: i64) -> Result<WorkspaceMember>;

    /// `PUT v2/team/{team_id}/user/{user_id}`
    async fn edit_user_on_workspace(
        &self,
        team_id: &str,
        user_id: i64,
        request: &EditUserRequest,
    ) -> Result<WorkspaceMember>;

    /// `DELETE v2/team/{team_id}/user/{user_id}`
    async fn remove_user_from_workspace(&self, team_id: &str, user_id: i64) -> Result<()>;
}

/// Guest endpoints (Enterprise workspaces).
#[async_trait]
pub trait GuestsService: Send + Sync {
    /// `POST v2/team/{team_id}/guest`
    async fn invite_guest(&self, team_id: &str, request: &InviteGuestRequest)
        -> Result<Workspace>;

    /// `GET v2/team/{team_id}/guest/{guest_id}`
    async fn get_guest(&self, team_id: &str, guest_id: i64) -> Result<Guest>;

    /// `PUT v2/team/{team_id}/guest/{guest_id}`
    async fn edit_guest(
        &self,
        team_id: &str,
        guest_id: i64,
        request: &EditGuestRequest,
    ) -> Result<Guest>;

    /// `DELETE v2/team/{team_id}/guest/{guest_id}`
    async fn remove_guest(&self, team_id: &str, guest_id: i64) -> Result<()>;

    /// `POST v2/task/{task_id}/guest/{guest_id}`
    async fn add_guest_to_task(
        &self,
        task_id: &str,
        guest_id: i64,
        permission: GuestPermission,
    ) -> Result<Guest>;

    /// `DELETE v2/task/{task_id}/guest/{guest_id}`
    async fn remove_guest_from_task(&self, task_id: &str, guest_id: i64) -> Result<()>;

    /// `POST v2/list/{list_id}/guest/{guest_id}`
    async fn add_guest_to_list(
        &self,
        list_id: &str,
        guest_id: i64,
        permission: GuestPermission,
    ) -> Result<Guest>;

    /// `DELETE v2/list/{list_id}/guest/{guest_id}`
    async fn remove_guest_from_list(&self, list_id: &str, guest_id: i64) -> Result<()>;

    /// `POST v2/folder/{folder_id}/guest/{guest_id}`
    async fn add_guest_to_folder(
        &self,
        folder_id: &str,
        guest_id: i64,
        permission: GuestPermission,
    ) -> Result<Guest>;

    /// `DELETE v2/folder/{folder_id}/guest/{guest_id}`
    async fn remove_guest_from_folder(&self, folder_id: &str, guest_id: i64) -> Result<()>;
}

fn team_path(team_id: &str, kind: &str, id: i64) -> Result<String> {
    require_id("team_id", team_id)?;
    Ok(format!("v2/team/{}/{kind}/{id}", segment(team_id)))
}

fn item_guest_path(field: &'static str, kind: &str, item_id: &str, guest_id: i64) -> Result<String> {
    require_id(field, item_id)?;
    Ok(format!("v2/{kind}/{}/guest/{guest_id}", segment(item_id)))
}

impl ClickUpClient {
    async fn share_with_guest(&self, path: &str, permission: GuestPermission) -> Result<Guest> {
        let body = GuestAccessRequest {
            permission_level: permission,
        };
        let response: GuestEnvelope = self.post_json(path, &body).await?;
        Ok(response.guest)
    }
}

#[async_trait]
impl UsersService for ClickUpClient {
    #[tracing::instrument(skip(self, request))]
    async fn invite_user_to_workspace(
        &self,
        team_id: &str,
        request: &InviteUserRequest,
    ) -> Result<Workspace> {
        require_id("team_id", team_id)?;
        require_text("email", Some(request.email.as_str()))?;
        let response: TeamEnvelope = self
            .post_json(&format!("v2/team/{}/user", segment(team_id)), request)
            .await?;
        Ok(response.team)
    }

    #[tracing::instrument(skip(self))]
    async fn get_user(&self, team_id: &str, user_id: i64) -> Result<WorkspaceMember> {
        let response: MemberEnvelope = self.get_json(&team_path(team_id, "user", user_id)?).await?;
        Ok(response.member)
    }

    #[tracing::instrument(skip(self, request))]
    async fn edit_user_on_workspace(
        &self,
        team_id: &str,
        user_id: i64,
        request: &EditUserRequest,
    ) -> Result<WorkspaceMember> {
        let path = team_path(team_id, "user", user_id)?;
        let response: MemberEnvelope = self.put_json(&path, request).await?;
        Ok(response.member)
    }

    #[tracing::instrument(skip(self))]
    async fn remove_user_from_workspace(&self, team_id: &str, user_id: i64) -> Result<()> {
        self.delete(&team_path(team_id, "user", user_id)?).await?;
        Ok(())
    }
}

#[async_trait]
impl GuestsService for ClickUpClient {
    #[tracing::instrument(skip(self, request))]
    async fn invite_guest(
        &self,
        team_id: &str,
        request: &InviteGuestRequest,
    ) -> Result<Workspace> {
        require_id("team_id", team_id)?;
        require_text("email", Some(request.email.as_str()))?;
        let response: TeamEnvelope = self
            .post_json(&format!("v2/team/{}/guest", segment(team_id)), request)
            .await?;
        Ok(response.team)
    }

    #[tracing::instrument(skip(self))]
    async fn get_guest(&self, team_id: &str, guest_id: i64) -> Result<Guest> {
        let response: GuestEnvelope = self
            .get_json(&team_path(team_id, "guest", guest_id)?)
            .await?;
        Ok(response.guest)
    }

    #[tracing::instrument(skip(self, request))]
    async fn edit_guest(
        &self,
        team_id: &str,
        guest_id: i64,
        request: &EditGuestRequest,
    ) -> Result<Guest> {
        let path = team_path(team_id, "guest", guest_id)?;
        let response: GuestEnvelope = self.put_json(&path, request).await?;
        Ok(response.guest)
    }

    #[tracing::instrument(skip(self))]
    async fn remove_guest(&self, team_id: &str, guest_id: i64) -> Result<()> {
        self.delete(&team_path(team_id, "guest", guest_id)?).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn add_guest_to_task(
        &self,
        task_id: &str,
        guest_id: i64,
        permission: GuestPermission,
    ) -> Result<Guest> {
        let path = item_guest_path("task_id", "task", task_id, guest_id)?;
        self.share_with_guest(&path, permission).await
    }

    #[tracing::instrument(skip(self))]
    async fn remove_guest_from_task(&self, task_id: &str, guest_id: i64) -> Result<()> {
        self.delete(&item_guest_path("task_id", "task", task_id, guest_id)?)
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn add_guest_to_list(
        &self,
        list_id: &str,
        guest_id: i64,
        permission: GuestPermission,
    ) -> Result<Guest> {
        let path = item_guest_path("list_id", "list", list_id, guest_id)?;
        self.share_with_guest(&path, permission).await
    }

    #[tracing::instrument(skip(self))]
    async fn remove_guest_from_list(&self, list_id: &str, guest_id: i64) -> Result<()> {
        self.delete(&item_guest_path("list_id", "list", list_id, guest_id)?)
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn add_guest_to_folder(
        &self,
        folder_id: &str,
        guest_id: i64,
        permission: GuestPermission,
    ) -> Result<Guest> {
        let path = item_guest_path("folder_id", "folder", folder_id, guest_id)?;
        self.share_with_guest(&path, permission).await
    }

    #[tracing::instrument(skip(self))]
    async fn remove_guest_from_folder(&self, folder_id: &str, guest_id: i64) -> Result<()> {
        self.delete(&item_guest_path("folder_id", "folder", folder_id, guest_id)?)
            .await?;
        Ok(())
    }
}
