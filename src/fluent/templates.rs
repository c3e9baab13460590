//! Fluent template requests.

use crate::error::Result;
use crate::models::{
    CreatedFromTemplate, ListFromTemplateRequest, ListTemplateParent, TaskFromTemplateRequest,
    TaskTemplate, TemplateOptions,
};
use crate::services::TemplatesService;
use crate::validation::{require_id, require_text};

/// Template requests, see [`ClickUpClient::templates`](crate::ClickUpClient::templates).
pub struct TemplatesApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: TemplatesService + ?Sized> TemplatesApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// One page (0-indexed) of a workspace's task templates.
    pub async fn task_templates(&self, team_id: &str, page: u32) -> Result<Vec<TaskTemplate>> {
        self.service.get_task_templates(team_id, page).await
    }

    /// Create a task named `name` in a list from a task template.
    pub async fn create_task(
        &self,
        list_id: &str,
        template_id: &str,
        name: impl Into<String>,
    ) -> Result<CreatedFromTemplate> {
        let request = TaskFromTemplateRequest { name: name.into() };
        require_text("name", Some(request.name.as_str()))?;
        self.service
            .create_task_from_template(list_id, template_id, &request)
            .await
    }

    /// Create a list in a folder or space from a list template.
    pub fn create_list(
        &self,
        parent: ListTemplateParent,
        template_id: impl Into<String>,
        name: impl Into<String>,
    ) -> ListFromTemplateBuilder<'a, S> {
        ListFromTemplateBuilder {
            service: self.service,
            parent,
            template_id: template_id.into(),
            request: ListFromTemplateRequest {
                name: name.into(),
                options: None,
            },
        }
    }
}

/// Builder for creating a list from a template.
pub struct ListFromTemplateBuilder<'a, S: ?Sized> {
    service: &'a S,
    parent: ListTemplateParent,
    template_id: String,
    request: ListFromTemplateRequest,
}

impl<'a, S: TemplatesService + ?Sized> ListFromTemplateBuilder<'a, S> {
    pub fn options(mut self, options: TemplateOptions) -> Self {
        self.request.options = Some(options);
        self
    }

    /// Return once the list exists; tasks are copied in the background.
    pub fn return_immediately(mut self) -> Self {
        self.request
            .options
            .get_or_insert_with(TemplateOptions::default)
            .return_immediately = Some(true);
        self
    }

    pub async fn send(self) -> Result<CreatedFromTemplate> {
        require_id("parent_id", self.parent.id())?;
        require_id("template_id", &self.template_id)?;
        require_text("name", Some(self.request.name.as_str()))?;
        self.service
            .create_list_from_template(&self.parent, &self.template_id, &self.request)
            .await
    }
}
