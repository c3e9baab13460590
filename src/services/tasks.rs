//! Task operations.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::{ClickUpError, Result};
use crate::models::{
    BulkTimeInStatus, CreateTaskRequest, GetTaskQuery, MergeTasksRequest, Task, TaskIdOptions,
    TaskListResponse, TaskQuery, TaskTimeInStatus, UpdateTaskRequest,
};
use crate::pagination::{Page, TASK_PAGE_SIZE};
use crate::query::ToQuery;
use crate::validation::{require_id, require_ids, require_text};

/// Most task ids the bulk time-in-status endpoint accepts per call.
pub const BULK_TIME_IN_STATUS_LIMIT: usize = 100;

/// Task endpoints.
#[async_trait]
pub trait TasksService: Send + Sync {
    /// Fetch a task. `GET v2/task/{task_id}`
    async fn get_task(&self, task_id: &str, query: &GetTaskQuery) -> Result<Task>;

    /// Fetch one page (0-indexed, 100 tasks) of a list's tasks.
    /// `GET v2/list/{list_id}/task`
    async fn get_tasks(&self, list_id: &str, query: &TaskQuery, page: u32) -> Result<Page<Task>>;

    /// Create a task in a list. `POST v2/list/{list_id}/task`
    async fn create_task(&self, list_id: &str, request: &CreateTaskRequest) -> Result<Task>;

    /// Update a task. `PUT v2/task/{task_id}`
    async fn update_task(
        &self,
        task_id: &str,
        request: &UpdateTaskRequest,
        options: &TaskIdOptions,
    ) -> Result<Task>;

    /// Delete a task. `DELETE v2/task/{task_id}`
    async fn delete_task(&self, task_id: &str, options: &TaskIdOptions) -> Result<()>;

    /// Fetch one page of tasks across a workspace, filtered.
    /// `GET v2/team/{team_id}/task`
    async fn get_filtered_team_tasks(
        &self,
        team_id: &str,
        query: &TaskQuery,
        page: u32,
    ) -> Result<Page<Task>>;

    /// Time spent in each status. `GET v2/task/{task_id}/time_in_status`
    async fn get_time_in_status(
        &self,
        task_id: &str,
        options: &TaskIdOptions,
    ) -> Result<TaskTimeInStatus>;

    /// Time in status for up to 100 tasks.
    /// `GET v2/task/bulk_time_in_status/task_ids`
    async fn get_bulk_time_in_status(
        &self,
        task_ids: &[String],
        options: &TaskIdOptions,
    ) -> Result<BulkTimeInStatus>;

    /// Merge source tasks into a target task. `POST v2/task/{task_id}/merge`
    async fn merge_tasks(&self, task_id: &str, request: &MergeTasksRequest) -> Result<()>;
}

#[async_trait]
impl TasksService for ClickUpClient {
    #[tracing::instrument(skip(self, query))]
    async fn get_task(&self, task_id: &str, query: &GetTaskQuery) -> Result<Task> {
        require_id("task_id", task_id)?;
        query.id_options.validate()?;
        self.get_json_with_query(&format!("v2/task/{}", segment(task_id)), query)
            .await
    }

    #[tracing::instrument(skip(self, query))]
    async fn get_tasks(&self, list_id: &str, query: &TaskQuery, page: u32) -> Result<Page<Task>> {
        require_id("list_id", list_id)?;
        let path = format!("v2/list/{}/task", segment(list_id));
        let response: TaskListResponse = self
            .get_json_with_query(&path, &query.to_query_for_page(page))
            .await?;
        Ok(Page::new(
            response.tasks,
            page,
            response.last_page,
            TASK_PAGE_SIZE,
        ))
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_task(&self, list_id: &str, request: &CreateTaskRequest) -> Result<Task> {
        require_id("list_id", list_id)?;
        require_text("name", Some(request.name.as_str()))?;
        self.post_json(&format!("v2/list/{}/task", segment(list_id)), request)
            .await
    }

    #[tracing::instrument(skip(self, request, options))]
    async fn update_task(
        &self,
        task_id: &str,
        request: &UpdateTaskRequest,
        options: &TaskIdOptions,
    ) -> Result<Task> {
        require_id("task_id", task_id)?;
        options.validate()?;
        let path = format!("v2/task/{}", segment(task_id));
        ClickUpClient::decode(self.put_with_query(&path, options, request).await?).await
    }

    #[tracing::instrument(skip(self, options))]
    async fn delete_task(&self, task_id: &str, options: &TaskIdOptions) -> Result<()> {
        require_id("task_id", task_id)?;
        options.validate()?;
        self.delete_with_query(&format!("v2/task/{}", segment(task_id)), options)
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, query))]
    async fn get_filtered_team_tasks(
        &self,
        team_id: &str,
        query: &TaskQuery,
        page: u32,
    ) -> Result<Page<Task>> {
        require_id("team_id", team_id)?;
        let path = format!("v2/team/{}/task", segment(team_id));
        let response: TaskListResponse = self
            .get_json_with_query(&path, &query.to_query_for_page(page))
            .await?;
        Ok(Page::new(
            response.tasks,
            page,
            response.last_page,
            TASK_PAGE_SIZE,
        ))
    }

    #[tracing::instrument(skip(self, options))]
    async fn get_time_in_status(
        &self,
        task_id: &str,
        options: &TaskIdOptions,
    ) -> Result<TaskTimeInStatus> {
        require_id("task_id", task_id)?;
        options.validate()?;
        let path = format!("v2/task/{}/time_in_status", segment(task_id));
        self.get_json_with_query(&path, options).await
    }

    #[tracing::instrument(skip(self, options))]
    async fn get_bulk_time_in_status(
        &self,
        task_ids: &[String],
        options: &TaskIdOptions,
    ) -> Result<BulkTimeInStatus> {
        require_ids("task_ids", task_ids)?;
        if task_ids.len() > BULK_TIME_IN_STATUS_LIMIT {
            return Err(ClickUpError::validation(
                "task_ids",
                format!("at most {BULK_TIME_IN_STATUS_LIMIT} tasks per request"),
            ));
        }
        options.validate()?;

        let mut query = options.to_query();
        for id in task_ids {
            query.push("task_ids", id);
        }
        self.get_json_with_query("v2/task/bulk_time_in_status/task_ids", &query)
            .await
    }

    #[tracing::instrument(skip(self, request))]
    async fn merge_tasks(&self, task_id: &str, request: &MergeTasksRequest) -> Result<()> {
        require_id("task_id", task_id)?;
        require_ids("source_task_ids", &request.source_task_ids)?;
        if request.source_task_ids.iter().any(|id| id == task_id) {
            return Err(ClickUpError::validation(
                "source_task_ids",
                "must not contain the target task",
            ));
        }
        self.post(&format!("v2/task/{}/merge", segment(task_id)), request)
            .await?;
        Ok(())
    }
}
