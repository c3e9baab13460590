//! Fluent workspace lookups.

use crate::error::Result;
use crate::models::{CustomRole, SharedHierarchy, WorkspacePlan, WorkspaceSeats};
use crate::services::WorkspacesService;

/// Workspace requests, see [`ClickUpClient::workspaces`](crate::ClickUpClient::workspaces).
pub struct WorkspacesApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: WorkspacesService + ?Sized> WorkspacesApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    pub async fn seats(&self, team_id: &str) -> Result<WorkspaceSeats> {
        self.service.get_workspace_seats(team_id).await
    }

    pub async fn plan(&self, team_id: &str) -> Result<WorkspacePlan> {
        self.service.get_workspace_plan(team_id).await
    }

    /// Custom roles, optionally with the members holding each role.
    pub async fn custom_roles(&self, team_id: &str, include_members: bool) -> Result<Vec<CustomRole>> {
        self.service.get_custom_roles(team_id, include_members).await
    }

    /// Tasks, lists and folders shared with the authenticated user.
    pub async fn shared(&self, team_id: &str) -> Result<SharedHierarchy> {
        self.service.get_shared_hierarchy(team_id).await
    }
}
