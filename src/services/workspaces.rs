//! Workspace-level endpoints.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{
    CustomRole, CustomRolesResponse, SharedHierarchy, SharedHierarchyResponse, WorkspacePlan,
    WorkspaceSeats,
};
use crate::query::QueryPairs;
use crate::validation::require_id;

/// Workspace endpoints.
#[async_trait]
pub trait WorkspacesService: Send + Sync {
    /// Seat usage. `GET v2/team/{team_id}/seats`
    async fn get_workspace_seats(&self, team_id: &str) -> Result<WorkspaceSeats>;

    /// Current plan. `GET v2/team/{team_id}/plan`
    async fn get_workspace_plan(&self, team_id: &str) -> Result<WorkspacePlan>;

    /// Custom roles. `GET v2/team/{team_id}/customroles`
    async fn get_custom_roles(&self, team_id: &str, include_members: bool)
        -> Result<Vec<CustomRole>>;

    /// Items shared with the token's user. `GET v2/team/{team_id}/shared`
    async fn get_shared_hierarchy(&self, team_id: &str) -> Result<SharedHierarchy>;
}

#[async_trait]
impl WorkspacesService for ClickUpClient {
    #[tracing::instrument(skip(self))]
    async fn get_workspace_seats(&self, team_id: &str) -> Result<WorkspaceSeats> {
        require_id("team_id", team_id)?;
        self.get_json(&format!("v2/team/{}/seats", segment(team_id)))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_workspace_plan(&self, team_id: &str) -> Result<WorkspacePlan> {
        require_id("team_id", team_id)?;
        self.get_json(&format!("v2/team/{}/plan", segment(team_id)))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_custom_roles(
        &self,
        team_id: &str,
        include_members: bool,
    ) -> Result<Vec<CustomRole>> {
        require_id("team_id", team_id)?;
        let mut query = QueryPairs::new();
        query.push("include_members", include_members);
        let response: CustomRolesResponse = self
            .get_json_with_query(&format!("v2/team/{}/customroles", segment(team_id)), &query)
            .await?;
        Ok(response.custom_roles)
    }

    #[tracing::instrument(skip(self))]
    async fn get_shared_hierarchy(&self, team_id: &str) -> Result<SharedHierarchy> {
        require_id("team_id", team_id)?;
        let response: SharedHierarchyResponse = self
            .get_json(&format!("v2/team/{}/shared", segment(team_id)))
            .await?;
        Ok(response.shared)
    }
}
