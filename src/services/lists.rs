//! List operations.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{CreateListRequest, Empty, List, ListsResponse, UpdateListRequest};
use crate::query::QueryPairs;
use crate::validation::{require_exclusive, require_id, require_text};

/// List endpoints.
#[async_trait]
pub trait ListsService: Send + Sync {
    /// Lists in a folder. `GET v2/folder/{folder_id}/list`
    async fn get_lists(&self, folder_id: &str, archived: bool) -> Result<Vec<List>>;

    /// Lists directly in a space. `GET v2/space/{space_id}/list`
    async fn get_folderless_lists(&self, space_id: &str, archived: bool) -> Result<Vec<List>>;

    /// `GET v2/list/{list_id}`
    async fn get_list(&self, list_id: &str) -> Result<List>;

    /// `POST v2/folder/{folder_id}/list`
    async fn create_list(&self, folder_id: &str, request: &CreateListRequest) -> Result<List>;

    /// `POST v2/space/{space_id}/list`
    async fn create_folderless_list(
        &self,
        space_id: &str,
        request: &CreateListRequest,
    ) -> Result<List>;

    /// `PUT v2/list/{list_id}`
    async fn update_list(&self, list_id: &str, request: &UpdateListRequest) -> Result<List>;

    /// `DELETE v2/list/{list_id}`
    async fn delete_list(&self, list_id: &str) -> Result<()>;

    /// Add a task to an additional list. `POST v2/list/{list_id}/task/{task_id}`
    async fn add_task_to_list(&self, list_id: &str, task_id: &str) -> Result<()>;

    /// Remove a task from an additional list. `DELETE v2/list/{list_id}/task/{task_id}`
    async fn remove_task_from_list(&self, list_id: &str, task_id: &str) -> Result<()>;
}

fn check_create(request: &CreateListRequest) -> Result<()> {
    require_text("name", Some(request.name.as_str()))?;
    require_exclusive(
        "content",
        request.content.is_some(),
        "markdown_content",
        request.markdown_content.is_some(),
    )
}

fn archived_query(archived: bool) -> QueryPairs {
    let mut query = QueryPairs::new();
    query.push("archived", archived);
    query
}

#[async_trait]
impl ListsService for ClickUpClient {
    #[tracing::instrument(skip(self))]
    async fn get_lists(&self, folder_id: &str, archived: bool) -> Result<Vec<List>> {
        require_id("folder_id", folder_id)?;
        let path = format!("v2/folder/{}/list", segment(folder_id));
        let response: ListsResponse = self
            .get_json_with_query(&path, &archived_query(archived))
            .await?;
        Ok(response.lists)
    }

    #[tracing::instrument(skip(self))]
    async fn get_folderless_lists(&self, space_id: &str, archived: bool) -> Result<Vec<List>> {
        require_id("space_id", space_id)?;
        let path = format!("v2/space/{}/list", segment(space_id));
        let response: ListsResponse = self
            .get_json_with_query(&path, &archived_query(archived))
            .await?;
        Ok(response.lists)
    }

    #[tracing::instrument(skip(self))]
    async fn get_list(&self, list_id: &str) -> Result<List> {
        require_id("list_id", list_id)?;
        self.get_json(&format!("v2/list/{}", segment(list_id)))
            .await
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_list(&self, folder_id: &str, request: &CreateListRequest) -> Result<List> {
        require_id("folder_id", folder_id)?;
        check_create(request)?;
        self.post_json(&format!("v2/folder/{}/list", segment(folder_id)), request)
            .await
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_folderless_list(
        &self,
        space_id: &str,
        request: &CreateListRequest,
    ) -> Result<List> {
        require_id("space_id", space_id)?;
        check_create(request)?;
        self.post_json(&format!("v2/space/{}/list", segment(space_id)), request)
            .await
    }

    #[tracing::instrument(skip(self, request))]
    async fn update_list(&self, list_id: &str, request: &UpdateListRequest) -> Result<List> {
        require_id("list_id", list_id)?;
        require_exclusive(
            "content",
            request.content.is_some(),
            "markdown_content",
            request.markdown_content.is_some(),
        )?;
        self.put_json(&format!("v2/list/{}", segment(list_id)), request)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_list(&self, list_id: &str) -> Result<()> {
        require_id("list_id", list_id)?;
        self.delete(&format!("v2/list/{}", segment(list_id)))
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn add_task_to_list(&self, list_id: &str, task_id: &str) -> Result<()> {
        require_id("list_id", list_id)?;
        require_id("task_id", task_id)?;
        let path = format!("v2/list/{}/task/{}", segment(list_id), segment(task_id));
        self.post(&path, &Empty {}).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn remove_task_from_list(&self, list_id: &str, task_id: &str) -> Result<()> {
        require_id("list_id", list_id)?;
        require_id("task_id", task_id)?;
        let path = format!("v2/list/{}/task/{}", segment(list_id), segment(task_id));
        self.delete(&path).await?;
        Ok(())
    }
}
