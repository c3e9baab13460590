//! Authorization endpoints: who the token belongs to and what it can see.

use async_trait::async_trait;

use crate::client::ClickUpClient;
use crate::error::Result;
use crate::models::{User, UserResponse, Workspace, WorkspacesResponse};

/// Token introspection.
#[async_trait]
pub trait AuthorizationService: Send + Sync {
    /// The user the token belongs to. `GET v2/user`
    async fn get_authorized_user(&self) -> Result<User>;

    /// Workspaces the token can access. `GET v2/team`
    async fn get_authorized_workspaces(&self) -> Result<Vec<Workspace>>;
}

#[async_trait]
impl AuthorizationService for ClickUpClient {
    #[tracing::instrument(skip(self))]
    async fn get_authorized_user(&self) -> Result<User> {
        let response: UserResponse = self.get_json("v2/user").await?;
        Ok(response.user)
    }

    #[tracing::instrument(skip(self))]
    async fn get_authorized_workspaces(&self) -> Result<Vec<Workspace>> {
        let response: WorkspacesResponse = self.get_json("v2/team").await?;
        Ok(response.teams)
    }
}
