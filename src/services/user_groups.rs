//! User groups.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{
    CreateUserGroupRequest, UpdateUserGroupRequest, UserGroup, UserGroupsResponse,
};
use crate::query::QueryPairs;
use crate::validation::{require_id, require_text};

/// User group endpoints.
#[async_trait]
pub trait UserGroupsService: Send + Sync {
    /// Groups in a workspace, optionally limited to the given ids.
    /// `GET v2/group?team_id=..&group_ids=a,b`
    async fn get_user_groups(&self, team_id: &str, group_ids: &[String]) -> Result<Vec<UserGroup>>;

    /// `POST v2/team/{team_id}/group`
    async fn create_user_group(
        &self,
        team_id: &str,
        request: &CreateUserGroupRequest,
    ) -> Result<UserGroup>;

    /// `PUT v2/group/{group_id}`
    async fn update_user_group(
        &self,
        group_id: &str,
        request: &UpdateUserGroupRequest,
    ) -> Result<UserGroup>;

    /// `DELETE v2/group/{group_id}`
    async fn delete_user_group(&self, group_id: &str) -> Result<()>;
}

#[async_trait]
impl UserGroupsService for ClickUpClient {
    #[tracing::instrument(skip(self))]
    async fn get_user_groups(&self, team_id: &str, group_ids: &[String]) -> Result<Vec<UserGroup>> {
        require_id("team_id", team_id)?;
        let mut query = QueryPairs::new();
        query.push("team_id", team_id);
        if !group_ids.is_empty() {
            query.push("group_ids", group_ids.join(","));
        }
        let response: UserGroupsResponse = self.get_json_with_query("v2/group", &query).await?;
        Ok(response.groups)
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_user_group(
        &self,
        team_id: &str,
        request: &CreateUserGroupRequest,
    ) -> Result<UserGroup> {
        require_id("team_id", team_id)?;
        require_text("name", Some(request.name.as_str()))?;
        self.post_json(&format!("v2/team/{}/group", segment(team_id)), request)
            .await
    }

    #[tracing::instrument(skip(self, request))]
    async fn update_user_group(
        &self,
        group_id: &str,
        request: &UpdateUserGroupRequest,
    ) -> Result<UserGroup> {
        require_id("group_id", group_id)?;
        self.put_json(&format!("v2/group/{}", segment(group_id)), request)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_user_group(&self, group_id: &str) -> Result<()> {
        require_id("group_id", group_id)?;
        self.delete(&format!("v2/group/{}", segment(group_id)))
            .await?;
        Ok(())
    }
}
