//! Task and list members.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{MembersResponse, User};
use crate::validation::require_id;

/// Member endpoints.
#[async_trait]
pub trait MembersService: Send + Sync {
    /// Users with explicit access to a task. `GET v2/task/{task_id}/member`
    async fn get_task_members(&self, task_id: &str) -> Result<Vec<User>>;

    /// Users with explicit access to a list. `GET v2/list/{list_id}/member`
    async fn get_list_members(&self, list_id: &str) -> Result<Vec<User>>;
}

#[async_trait]
impl MembersService for ClickUpClient {
    #[tracing::instrument(skip(self))]
    async fn get_task_members(&self, task_id: &str) -> Result<Vec<User>> {
        require_id("task_id", task_id)?;
        let response: MembersResponse = self
            .get_json(&format!("v2/task/{}/member", segment(task_id)))
            .await?;
        Ok(response.members)
    }

    #[tracing::instrument(skip(self))]
    async fn get_list_members(&self, list_id: &str) -> Result<Vec<User>> {
        require_id("list_id", list_id)?;
        let response: MembersResponse = self
            .get_json(&format!("v2/list/{}/member", segment(list_id)))
            .await?;
        Ok(response.members)
    }
}
