//! Fluent tag requests.

use crate::error::Result;
use crate::models::{Tag, TagDefinition, TagRequest};
use crate::services::TagsService;
use crate::validation::{require_id, require_text};

/// Tag requests, see [`ClickUpClient::tags`](crate::ClickUpClient::tags).
pub struct TagsApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: TagsService + ?Sized> TagsApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    pub async fn list(&self, space_id: &str) -> Result<Vec<Tag>> {
        self.service.get_space_tags(space_id).await
    }

    /// Define a new tag in a space.
    pub fn create(&self, space_id: impl Into<String>) -> SpaceTagBuilder<'a, S> {
        SpaceTagBuilder::new(self.service, space_id.into(), None)
    }

    /// Change an existing space tag.
    pub fn edit(
        &self,
        space_id: impl Into<String>,
        tag_name: impl Into<String>,
    ) -> SpaceTagBuilder<'a, S> {
        SpaceTagBuilder::new(self.service, space_id.into(), Some(tag_name.into()))
    }

    pub async fn delete(&self, space_id: &str, tag_name: &str) -> Result<()> {
        self.service.delete_space_tag(space_id, tag_name).await
    }

    pub async fn add_to_task(&self, task_id: &str, tag_name: &str) -> Result<()> {
        self.service.add_tag_to_task(task_id, tag_name).await
    }

    pub async fn remove_from_task(&self, task_id: &str, tag_name: &str) -> Result<()> {
        self.service.remove_tag_from_task(task_id, tag_name).await
    }
}

/// Builder for creating or editing a space tag.
pub struct SpaceTagBuilder<'a, S: ?Sized> {
    service: &'a S,
    space_id: String,
    existing: Option<String>,
    request: TagRequest,
}

impl<'a, S: TagsService + ?Sized> SpaceTagBuilder<'a, S> {
    fn new(service: &'a S, space_id: String, existing: Option<String>) -> Self {
        let name = existing.clone().unwrap_or_default();
        Self {
            service,
            space_id,
            existing,
            request: TagRequest {
                tag: TagDefinition {
                    name,
                    ..Default::default()
                },
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.tag.name = name.into();
        self
    }

    /// Text colour, e.g. `#ffffff`.
    pub fn foreground(mut self, color: impl Into<String>) -> Self {
        self.request.tag.tag_fg = Some(color.into());
        self
    }

    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.request.tag.tag_bg = Some(color.into());
        self
    }

    pub fn request(&self) -> &TagRequest {
        &self.request
    }

    pub async fn send(self) -> Result<()> {
        require_id("space_id", &self.space_id)?;
        require_text("name", Some(self.request.tag.name.as_str()))?;
        match &self.existing {
            Some(tag_name) => {
                self.service
                    .edit_space_tag(&self.space_id, tag_name, &self.request)
                    .await
            }
            None => self.service.create_space_tag(&self.space_id, &self.request).await,
        }
    }
}
