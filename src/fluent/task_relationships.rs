//! Fluent dependency and link requests.

use crate::error::Result;
use crate::models::{AddDependencyRequest, DeleteDependencyQuery, Task, TaskIdOptions};
use crate::services::TaskRelationshipsService;
use crate::validation::require_id;

/// Dependency and link requests, see
/// [`ClickUpClient::task_relationships`](crate::ClickUpClient::task_relationships).
pub struct TaskRelationshipsApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: TaskRelationshipsService + ?Sized> TaskRelationshipsApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Add a dependency to `task_id`; set its direction with
    /// [`DependencyBuilder::depends_on`] or [`DependencyBuilder::dependency_of`].
    pub fn add_dependency(&self, task_id: impl Into<String>) -> DependencyBuilder<'a, S> {
        DependencyBuilder::new(self.service, task_id.into(), DependencyAction::Add)
    }

    pub fn delete_dependency(&self, task_id: impl Into<String>) -> DependencyBuilder<'a, S> {
        DependencyBuilder::new(self.service, task_id.into(), DependencyAction::Delete)
    }

    pub async fn link(&self, task_id: &str, links_to: &str) -> Result<Task> {
        self.service.add_task_link(task_id, links_to).await
    }

    pub async fn unlink(&self, task_id: &str, links_to: &str) -> Result<Task> {
        self.service.delete_task_link(task_id, links_to).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DependencyAction {
    Add,
    Delete,
}

/// Builder for adding or removing a task dependency.
pub struct DependencyBuilder<'a, S: ?Sized> {
    service: &'a S,
    task_id: String,
    action: DependencyAction,
    dependency: AddDependencyRequest,
    id_options: TaskIdOptions,
}

impl<'a, S: TaskRelationshipsService + ?Sized> DependencyBuilder<'a, S> {
    fn new(service: &'a S, task_id: String, action: DependencyAction) -> Self {
        Self {
            service,
            task_id,
            action,
            dependency: AddDependencyRequest::default(),
            id_options: TaskIdOptions::default(),
        }
    }

    /// The task waits on `task_id`.
    pub fn depends_on(mut self, task_id: impl Into<String>) -> Self {
        self.dependency.depends_on = Some(task_id.into());
        self
    }

    /// `task_id` waits on the task.
    pub fn dependency_of(mut self, task_id: impl Into<String>) -> Self {
        self.dependency.dependency_of = Some(task_id.into());
        self
    }

    /// Custom id addressing; only used when deleting.
    pub fn custom_task_id(mut self, team_id: impl Into<String>) -> Self {
        self.id_options = TaskIdOptions::custom(team_id);
        self
    }

    pub fn request(&self) -> &AddDependencyRequest {
        &self.dependency
    }

    pub fn validate(&self) -> Result<()> {
        require_id("task_id", &self.task_id)?;
        self.id_options.validate()?;
        self.dependency.validate()
    }

    pub async fn send(self) -> Result<()> {
        self.validate()?;
        match self.action {
            DependencyAction::Add => {
                self.service
                    .add_dependency(&self.task_id, &self.dependency)
                    .await
            }
            DependencyAction::Delete => {
                let query = DeleteDependencyQuery {
                    dependency: self.dependency,
                    id_options: self.id_options,
                };
                self.service.delete_dependency(&self.task_id, &query).await
            }
        }
    }
}
