//! Custom field operations.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{CustomField, CustomFieldsResponse, SetCustomFieldValueRequest};
use crate::validation::require_id;

/// Custom field endpoints.
#[async_trait]
pub trait CustomFieldsService: Send + Sync {
    /// Fields usable on a list's tasks. `GET v2/list/{list_id}/field`
    async fn get_accessible_custom_fields(&self, list_id: &str) -> Result<Vec<CustomField>>;

    /// Workspace-level fields. `GET v2/team/{team_id}/field`
    async fn get_workspace_custom_fields(&self, team_id: &str) -> Result<Vec<CustomField>>;

    /// `POST v2/task/{task_id}/field/{field_id}`
    async fn set_custom_field_value(
        &self,
        task_id: &str,
        field_id: &str,
        request: &SetCustomFieldValueRequest,
    ) -> Result<()>;

    /// `DELETE v2/task/{task_id}/field/{field_id}`
    async fn remove_custom_field_value(&self, task_id: &str, field_id: &str) -> Result<()>;
}

fn field_path(task_id: &str, field_id: &str) -> Result<String> {
    require_id("task_id", task_id)?;
    require_id("field_id", field_id)?;
    Ok(format!(
        "v2/task/{}/field/{}",
        segment(task_id),
        segment(field_id)
    ))
}

#[async_trait]
impl CustomFieldsService for ClickUpClient {
    #[tracing::instrument(skip(self))]
    async fn get_accessible_custom_fields(&self, list_id: &str) -> Result<Vec<CustomField>> {
        require_id("list_id", list_id)?;
        let response: CustomFieldsResponse = self
            .get_json(&format!("v2/list/{}/field", segment(list_id)))
            .await?;
        Ok(response.fields)
    }

    #[tracing::instrument(skip(self))]
    async fn get_workspace_custom_fields(&self, team_id: &str) -> Result<Vec<CustomField>> {
        require_id("team_id", team_id)?;
        let response: CustomFieldsResponse = self
            .get_json(&format!("v2/team/{}/field", segment(team_id)))
            .await?;
        Ok(response.fields)
    }

    #[tracing::instrument(skip(self, request))]
    async fn set_custom_field_value(
        &self,
        task_id: &str,
        field_id: &str,
        request: &SetCustomFieldValueRequest,
    ) -> Result<()> {
        let path = field_path(task_id, field_id)?;
        self.post(&path, request).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn remove_custom_field_value(&self, task_id: &str, field_id: &str) -> Result<()> {
        let path = field_path(task_id, field_id)?;
        self.delete(&path).await?;
        Ok(())
    }
}
