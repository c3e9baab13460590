//! View operations.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{
    CreateViewRequest, Task, UpdateViewRequest, View, ViewParent, ViewResponse,
    ViewTasksResponse, ViewsResponse, VIEW_TASK_PAGE_SIZE,
};
use crate::pagination::Page;
use crate::query::QueryPairs;
use crate::validation::{require_id, require_text};

/// View endpoints.
#[async_trait]
pub trait ViewsService: Send + Sync {
    /// Views of a workspace, space, folder or list.
    /// `GET v2/{team|space|folder|list}/{id}/view`
    async fn get_views(&self, parent: &ViewParent) -> Result<Vec<View>>;

    /// `GET v2/view/{view_id}`
    async fn get_view(&self, view_id: &str) -> Result<View>;

    /// `POST v2/{team|space|folder|list}/{id}/view`
    async fn create_view(&self, parent: &ViewParent, request: &CreateViewRequest) -> Result<View>;

    /// `PUT v2/view/{view_id}`
    async fn update_view(&self, view_id: &str, request: &UpdateViewRequest) -> Result<View>;

    /// `DELETE v2/view/{view_id}`
    async fn delete_view(&self, view_id: &str) -> Result<()>;

    /// One page (0-indexed, 30 tasks) of the tasks a view shows.
    /// `GET v2/view/{view_id}/task`
    async fn get_view_tasks(&self, view_id: &str, page: u32) -> Result<Page<Task>>;

    /// Workspace ("Everything") views.
    async fn get_team_views(&self, team_id: &str) -> Result<Vec<View>> {
        self.get_views(&ViewParent::Team(team_id.to_string())).await
    }

    async fn get_space_views(&self, space_id: &str) -> Result<Vec<View>> {
        self.get_views(&ViewParent::Space(space_id.to_string())).await
    }

    async fn get_folder_views(&self, folder_id: &str) -> Result<Vec<View>> {
        self.get_views(&ViewParent::Folder(folder_id.to_string())).await
    }

    async fn get_list_views(&self, list_id: &str) -> Result<Vec<View>> {
        self.get_views(&ViewParent::List(list_id.to_string())).await
    }
}

fn parent_path(parent: &ViewParent) -> Result<String> {
    require_id("parent_id", parent.id())?;
    Ok(format!("v2/{}/{}/view", parent.kind(), segment(parent.id())))
}

#[async_trait]
impl ViewsService for ClickUpClient {
    #[tracing::instrument(skip(self))]
    async fn get_views(&self, parent: &ViewParent) -> Result<Vec<View>> {
        let response: ViewsResponse = self.get_json(&parent_path(parent)?).await?;
        Ok(response.views)
    }

    #[tracing::instrument(skip(self))]
    async fn get_view(&self, view_id: &str) -> Result<View> {
        require_id("view_id", view_id)?;
        let response: ViewResponse = self
            .get_json(&format!("v2/view/{}", segment(view_id)))
            .await?;
        Ok(response.view)
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_view(&self, parent: &ViewParent, request: &CreateViewRequest) -> Result<View> {
        let path = parent_path(parent)?;
        require_text("name", Some(request.name.as_str()))?;
        require_text("type", Some(request.view_type.as_str()))?;
        let response: ViewResponse = self.post_json(&path, request).await?;
        Ok(response.view)
    }

    #[tracing::instrument(skip(self, request))]
    async fn update_view(&self, view_id: &str, request: &UpdateViewRequest) -> Result<View> {
        require_id("view_id", view_id)?;
        require_text("name", Some(request.name.as_str()))?;
        let response: ViewResponse = self
            .put_json(&format!("v2/view/{}", segment(view_id)), request)
            .await?;
        Ok(response.view)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_view(&self, view_id: &str) -> Result<()> {
        require_id("view_id", view_id)?;
        self.delete(&format!("v2/view/{}", segment(view_id)))
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn get_view_tasks(&self, view_id: &str, page: u32) -> Result<Page<Task>> {
        require_id("view_id", view_id)?;
        let mut query = QueryPairs::new();
        query.push("page", page);
        let response: ViewTasksResponse = self
            .get_json_with_query(&format!("v2/view/{}/task", segment(view_id)), &query)
            .await?;
        Ok(Page::new(
            response.tasks,
            page,
            response.last_page,
            VIEW_TASK_PAGE_SIZE,
        ))
    }
}
