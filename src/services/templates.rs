//! Task, list and folder templates.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{
    CreatedFromTemplate, ListFromTemplateRequest, ListTemplateParent, TaskFromTemplateRequest,
    TaskTemplate, TaskTemplatesResponse,
};
use crate::query::QueryPairs;
use crate::validation::{require_id, require_text};

/// Template endpoints.
#[async_trait]
pub trait TemplatesService: Send + Sync {
    /// One page (0-indexed) of the workspace's task templates.
    /// `GET v2/team/{team_id}/taskTemplate`
    async fn get_task_templates(&self, team_id: &str, page: u32) -> Result<Vec<TaskTemplate>>;

    /// `POST v2/list/{list_id}/taskTemplate/{template_id}`
    async fn create_task_from_template(
        &self,
        list_id: &str,
        template_id: &str,
        request: &TaskFromTemplateRequest,
    ) -> Result<CreatedFromTemplate>;

    /// `POST v2/{folder|space}/{id}/list_template/{template_id}`
    async fn create_list_from_template(
        &self,
        parent: &ListTemplateParent,
        template_id: &str,
        request: &ListFromTemplateRequest,
    ) -> Result<CreatedFromTemplate>;
}

#[async_trait]
impl TemplatesService for ClickUpClient {
    #[tracing::instrument(skip(self))]
    async fn get_task_templates(&self, team_id: &str, page: u32) -> Result<Vec<TaskTemplate>> {
        require_id("team_id", team_id)?;
        let mut query = QueryPairs::new();
        query.push("page", page);
        let path = format!("v2/team/{}/taskTemplate", segment(team_id));
        let response: TaskTemplatesResponse = self.get_json_with_query(&path, &query).await?;
        Ok(response.templates)
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_task_from_template(
        &self,
        list_id: &str,
        template_id: &str,
        request: &TaskFromTemplateRequest,
    ) -> Result<CreatedFromTemplate> {
        require_id("list_id", list_id)?;
        require_id("template_id", template_id)?;
        require_text("name", Some(request.name.as_str()))?;
        let path = format!(
            "v2/list/{}/taskTemplate/{}",
            segment(list_id),
            segment(template_id)
        );
        self.post_json(&path, request).await
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_list_from_template(
        &self,
        parent: &ListTemplateParent,
        template_id: &str,
        request: &ListFromTemplateRequest,
    ) -> Result<CreatedFromTemplate> {
        require_id("parent_id", parent.id())?;
        require_id("template_id", template_id)?;
        require_text("name", Some(request.name.as_str()))?;
        let path = format!(
            "v2/{}/{}/list_template/{}",
            parent.kind(),
            segment(parent.id()),
            segment(template_id)
        );
        self.post_json(&path, request).await
    }
}
