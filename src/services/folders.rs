//! Folder operations.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{
    CreateFolderFromTemplateRequest, CreatedFromTemplate, Folder, FolderRequest, FoldersResponse,
};
use crate::query::QueryPairs;
use crate::validation::{require_id, require_text};

/// Folder endpoints.
#[async_trait]
pub trait FoldersService: Send + Sync {
    /// `GET v2/space/{space_id}/folder`
    async fn get_folders(&self, space_id: &str, archived: bool) -> Result<Vec<Folder>>;

    /// `GET v2/folder/{folder_id}`
    async fn get_folder(&self, folder_id: &str) -> Result<Folder>;

    /// `POST v2/space/{space_id}/folder`
    async fn create_folder(&self, space_id: &str, request: &FolderRequest) -> Result<Folder>;

    /// `PUT v2/folder/{folder_id}`
    async fn update_folder(&self, folder_id: &str, request: &FolderRequest) -> Result<Folder>;

    /// `DELETE v2/folder/{folder_id}`
    async fn delete_folder(&self, folder_id: &str) -> Result<()>;

    /// `POST v2/space/{space_id}/folder_template/{template_id}`
    async fn create_folder_from_template(
        &self,
        space_id: &str,
        template_id: &str,
        request: &CreateFolderFromTemplateRequest,
    ) -> Result<CreatedFromTemplate>;
}

#[async_trait]
impl FoldersService for ClickUpClient {
    #[tracing::instrument(skip(self))]
    async fn get_folders(&self, space_id: &str, archived: bool) -> Result<Vec<Folder>> {
        require_id("space_id", space_id)?;
        let mut query = QueryPairs::new();
        query.push("archived", archived);
        let response: FoldersResponse = self
            .get_json_with_query(&format!("v2/space/{}/folder", segment(space_id)), &query)
            .await?;
        Ok(response.folders)
    }

    #[tracing::instrument(skip(self))]
    async fn get_folder(&self, folder_id: &str) -> Result<Folder> {
        require_id("folder_id", folder_id)?;
        self.get_json(&format!("v2/folder/{}", segment(folder_id)))
            .await
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_folder(&self, space_id: &str, request: &FolderRequest) -> Result<Folder> {
        require_id("space_id", space_id)?;
        require_text("name", Some(request.name.as_str()))?;
        self.post_json(&format!("v2/space/{}/folder", segment(space_id)), request)
            .await
    }

    #[tracing::instrument(skip(self, request))]
    async fn update_folder(&self, folder_id: &str, request: &FolderRequest) -> Result<Folder> {
        require_id("folder_id", folder_id)?;
        require_text("name", Some(request.name.as_str()))?;
        self.put_json(&format!("v2/folder/{}", segment(folder_id)), request)
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_folder(&self, folder_id: &str) -> Result<()> {
        require_id("folder_id", folder_id)?;
        self.delete(&format!("v2/folder/{}", segment(folder_id)))
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_folder_from_template(
        &self,
        space_id: &str,
        template_id: &str,
        request: &CreateFolderFromTemplateRequest,
    ) -> Result<CreatedFromTemplate> {
        require_id("space_id", space_id)?;
        require_id("template_id", template_id)?;
        require_text("name", Some(request.name.as_str()))?;
        let path = format!(
            "v2/space/{}/folder_template/{}",
            segment(space_id),
            segment(template_id)
        );
        self.post_json(&path, request).await
    }
}
