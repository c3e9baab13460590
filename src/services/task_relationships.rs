//! Task dependencies and links.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{AddDependencyRequest, DeleteDependencyQuery, Empty, Task, TaskLinkResponse};
use crate::validation::require_id;

/// Dependency and link endpoints.
#[async_trait]
pub trait TaskRelationshipsService: Send + Sync {
    /// `POST v2/task/{task_id}/dependency`
    async fn add_dependency(&self, task_id: &str, request: &AddDependencyRequest) -> Result<()>;

    /// `DELETE v2/task/{task_id}/dependency`
    async fn delete_dependency(&self, task_id: &str, query: &DeleteDependencyQuery) -> Result<()>;

    /// `POST v2/task/{task_id}/link/{links_to}`
    async fn add_task_link(&self, task_id: &str, links_to: &str) -> Result<Task>;

    /// `DELETE v2/task/{task_id}/link/{links_to}`
    async fn delete_task_link(&self, task_id: &str, links_to: &str) -> Result<Task>;
}

fn link_path(task_id: &str, links_to: &str) -> Result<String> {
    require_id("task_id", task_id)?;
    require_id("links_to", links_to)?;
    Ok(format!(
        "v2/task/{}/link/{}",
        segment(task_id),
        segment(links_to)
    ))
}

#[async_trait]
impl TaskRelationshipsService for ClickUpClient {
    #[tracing::instrument(skip(self, request))]
    async fn add_dependency(&self, task_id: &str, request: &AddDependencyRequest) -> Result<()> {
        require_id("task_id", task_id)?;
        request.validate()?;
        self.post(&format!("v2/task/{}/dependency", segment(task_id)), request)
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, query))]
    async fn delete_dependency(&self, task_id: &str, query: &DeleteDependencyQuery) -> Result<()> {
        require_id("task_id", task_id)?;
        query.dependency.validate()?;
        query.id_options.validate()?;
        self.delete_with_query(&format!("v2/task/{}/dependency", segment(task_id)), query)
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn add_task_link(&self, task_id: &str, links_to: &str) -> Result<Task> {
        let path = link_path(task_id, links_to)?;
        let response: TaskLinkResponse = self.post_json(&path, &Empty {}).await?;
        Ok(response.task)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_task_link(&self, task_id: &str, links_to: &str) -> Result<Task> {
        let path = link_path(task_id, links_to)?;
        let response: TaskLinkResponse = ClickUpClient::decode(self.delete(&path).await?).await?;
        Ok(response.task)
    }
}
