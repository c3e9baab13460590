//! Fluent user group (team) requests.

use crate::error::{ClickUpError, Result};
use crate::models::{CreateUserGroupRequest, UpdateUserGroupRequest, UserGroup};
use crate::services::UserGroupsService;
use crate::validation::{require_id, require_text};

/// User group requests, see
/// [`ClickUpClient::user_groups`](crate::ClickUpClient::user_groups).
pub struct UserGroupsApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: UserGroupsService + ?Sized> UserGroupsApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Groups in a workspace, optionally only those in `group_ids`.
    pub async fn list(&self, team_id: &str, group_ids: &[String]) -> Result<Vec<UserGroup>> {
        self.service.get_user_groups(team_id, group_ids).await
    }

    pub fn create(
        &self,
        team_id: impl Into<String>,
        name: impl Into<String>,
    ) -> CreateUserGroupBuilder<'a, S> {
        CreateUserGroupBuilder {
            service: self.service,
            team_id: team_id.into(),
            request: CreateUserGroupRequest {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    pub fn update(&self, group_id: impl Into<String>) -> UpdateUserGroupBuilder<'a, S> {
        UpdateUserGroupBuilder {
            service: self.service,
            group_id: group_id.into(),
            request: UpdateUserGroupRequest::default(),
        }
    }

    pub async fn delete(&self, group_id: &str) -> Result<()> {
        self.service.delete_user_group(group_id).await
    }
}

/// Builder for `POST v2/team/{team_id}/group`.
pub struct CreateUserGroupBuilder<'a, S: ?Sized> {
    service: &'a S,
    team_id: String,
    request: CreateUserGroupRequest,
}

impl<'a, S: UserGroupsService + ?Sized> CreateUserGroupBuilder<'a, S> {
    /// Mention handle, e.g. `platform` for `@platform`.
    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.request.handle = Some(handle.into());
        self
    }

    pub fn member(mut self, user_id: i64) -> Self {
        self.request.members.push(user_id);
        self
    }

    pub async fn send(self) -> Result<UserGroup> {
        require_id("team_id", &self.team_id)?;
        require_text("name", Some(self.request.name.as_str()))?;
        self.service
            .create_user_group(&self.team_id, &self.request)
            .await
    }
}

/// Builder for `PUT v2/group/{group_id}`.
pub struct UpdateUserGroupBuilder<'a, S: ?Sized> {
    service: &'a S,
    group_id: String,
    request: UpdateUserGroupRequest,
}

impl<'a, S: UserGroupsService + ?Sized> UpdateUserGroupBuilder<'a, S> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = Some(name.into());
        self
    }

    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.request.handle = Some(handle.into());
        self
    }

    pub fn add_member(mut self, user_id: i64) -> Self {
        self.request.members.add.push(user_id);
        self
    }

    pub fn remove_member(mut self, user_id: i64) -> Self {
        self.request.members.rem.push(user_id);
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_id("group_id", &self.group_id)?;
        if let Some(name) = &self.request.name {
            require_text("name", Some(name.as_str()))?;
        }
        let members = &self.request.members;
        if members.add.iter().any(|id| members.rem.contains(id)) {
            return Err(ClickUpError::validation(
                "members",
                "a user cannot be added and removed at once",
            ));
        }
        Ok(())
    }

    pub async fn send(self) -> Result<UserGroup> {
        self.validate()?;
        self.service
            .update_user_group(&self.group_id, &self.request)
            .await
    }
}
