//! Space tags and task tagging.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{Empty, Tag, TagRequest, TagsResponse};
use crate::validation::{require_id, require_text};

/// Tag endpoints.
#[async_trait]
pub trait TagsService: Send + Sync {
    /// `GET v2/space/{space_id}/tag`
    async fn get_space_tags(&self, space_id: &str) -> Result<Vec<Tag>>;

    /// `POST v2/space/{space_id}/tag`
    async fn create_space_tag(&self, space_id: &str, request: &TagRequest) -> Result<()>;

    /// `PUT v2/space/{space_id}/tag/{tag_name}`
    async fn edit_space_tag(
        &self,
        space_id: &str,
        tag_name: &str,
        request: &TagRequest,
    ) -> Result<()>;

    /// `DELETE v2/space/{space_id}/tag/{tag_name}`
    async fn delete_space_tag(&self, space_id: &str, tag_name: &str) -> Result<()>;

    /// `POST v2/task/{task_id}/tag/{tag_name}`
    async fn add_tag_to_task(&self, task_id: &str, tag_name: &str) -> Result<()>;

    /// `DELETE v2/task/{task_id}/tag/{tag_name}`
    async fn remove_tag_from_task(&self, task_id: &str, tag_name: &str) -> Result<()>;
}

fn tag_path(parent: &str, parent_field: &'static str, parent_id: &str, tag_name: &str) -> Result<String> {
    require_id(parent_field, parent_id)?;
    require_id("tag_name", tag_name)?;
    Ok(format!(
        "v2/{parent}/{}/tag/{}",
        segment(parent_id),
        segment(tag_name)
    ))
}

#[async_trait]
impl TagsService for ClickUpClient {
    #[tracing::instrument(skip(self))]
    async fn get_space_tags(&self, space_id: &str) -> Result<Vec<Tag>> {
        require_id("space_id", space_id)?;
        let response: TagsResponse = self
            .get_json(&format!("v2/space/{}/tag", segment(space_id)))
            .await?;
        Ok(response.tags)
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_space_tag(&self, space_id: &str, request: &TagRequest) -> Result<()> {
        require_id("space_id", space_id)?;
        require_text("name", Some(request.tag.name.as_str()))?;
        self.post(&format!("v2/space/{}/tag", segment(space_id)), request)
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, request))]
    async fn edit_space_tag(
        &self,
        space_id: &str,
        tag_name: &str,
        request: &TagRequest,
    ) -> Result<()> {
        let path = tag_path("space", "space_id", space_id, tag_name)?;
        require_text("name", Some(request.tag.name.as_str()))?;
        self.put(&path, request).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_space_tag(&self, space_id: &str, tag_name: &str) -> Result<()> {
        let path = tag_path("space", "space_id", space_id, tag_name)?;
        self.delete(&path).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn add_tag_to_task(&self, task_id: &str, tag_name: &str) -> Result<()> {
        let path = tag_path("task", "task_id", task_id, tag_name)?;
        self.post(&path, &Empty {}).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn remove_tag_from_task(&self, task_id: &str, tag_name: &str) -> Result<()> {
        let path = tag_path("task", "task_id", task_id, tag_name)?;
        self.delete(&path).await?;
        Ok(())
    }
}
