//! Checklist operations.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{
    Checklist, ChecklistResponse, CreateChecklistItemRequest, CreateChecklistRequest,
    EditChecklistItemRequest, EditChecklistRequest,
};
use crate::validation::{require_id, require_text};

/// Checklist endpoints.
#[async_trait]
pub trait ChecklistsService: Send + Sync {
    /// `POST v2/task/{task_id}/checklist`
    async fn create_checklist(
        &self,
        task_id: &str,
        request: &CreateChecklistRequest,
    ) -> Result<Checklist>;

    /// `PUT v2/checklist/{checklist_id}`
    async fn edit_checklist(&self, checklist_id: &str, request: &EditChecklistRequest)
        -> Result<()>;

    /// `DELETE v2/checklist/{checklist_id}`
    async fn delete_checklist(&self, checklist_id: &str) -> Result<()>;

    /// `POST v2/checklist/{checklist_id}/checklist_item`
    async fn create_checklist_item(
        &self,
        checklist_id: &str,
        request: &CreateChecklistItemRequest,
    ) -> Result<Checklist>;

    /// `PUT v2/checklist/{checklist_id}/checklist_item/{checklist_item_id}`
    async fn edit_checklist_item(
        &self,
        checklist_id: &str,
        item_id: &str,
        request: &EditChecklistItemRequest,
    ) -> Result<Checklist>;

    /// `DELETE v2/checklist/{checklist_id}/checklist_item/{checklist_item_id}`
    async fn delete_checklist_item(&self, checklist_id: &str, item_id: &str) -> Result<()>;
}

fn item_path(checklist_id: &str, item_id: &str) -> Result<String> {
    require_id("checklist_id", checklist_id)?;
    require_id("item_id", item_id)?;
    Ok(format!(
        "v2/checklist/{}/checklist_item/{}",
        segment(checklist_id),
        segment(item_id)
    ))
}

#[async_trait]
impl ChecklistsService for ClickUpClient {
    #[tracing::instrument(skip(self, request))]
    async fn create_checklist(
        &self,
        task_id: &str,
        request: &CreateChecklistRequest,
    ) -> Result<Checklist> {
        require_id("task_id", task_id)?;
        require_text("name", Some(request.name.as_str()))?;
        let response: ChecklistResponse = self
            .post_json(&format!("v2/task/{}/checklist", segment(task_id)), request)
            .await?;
        Ok(response.checklist)
    }

    #[tracing::instrument(skip(self, request))]
    async fn edit_checklist(
        &self,
        checklist_id: &str,
        request: &EditChecklistRequest,
    ) -> Result<()> {
        require_id("checklist_id", checklist_id)?;
        self.put(&format!("v2/checklist/{}", segment(checklist_id)), request)
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_checklist(&self, checklist_id: &str) -> Result<()> {
        require_id("checklist_id", checklist_id)?;
        self.delete(&format!("v2/checklist/{}", segment(checklist_id)))
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_checklist_item(
        &self,
        checklist_id: &str,
        request: &CreateChecklistItemRequest,
    ) -> Result<Checklist> {
        require_id("checklist_id", checklist_id)?;
        require_text("name", Some(request.name.as_str()))?;
        let path = format!("v2/checklist/{}/checklist_item", segment(checklist_id));
        let response: ChecklistResponse = self.post_json(&path, request).await?;
        Ok(response.checklist)
    }

    #[tracing::instrument(skip(self, request))]
    async fn edit_checklist_item(
        &self,
        checklist_id: &str,
        item_id: &str,
        request: &EditChecklistItemRequest,
    ) -> Result<Checklist> {
        let path = item_path(checklist_id, item_id)?;
        let response: ChecklistResponse = self.put_json(&path, request).await?;
        Ok(response.checklist)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_checklist_item(&self, checklist_id: &str, item_id: &str) -> Result<()> {
        let path = item_path(checklist_id, item_id)?;
        self.delete(&path).await?;
        Ok(())
    }
}
