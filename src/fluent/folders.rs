//! Fluent folder requests.

use crate::error::Result;
use crate::models::{
    CreateFolderFromTemplateRequest, CreatedFromTemplate, Folder, FolderRequest, TemplateOptions,
};
use crate::services::FoldersService;
use crate::validation::{require_id, require_text};

/// Folder requests, see [`ClickUpClient::folders`](crate::ClickUpClient::folders).
pub struct FoldersApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: FoldersService + ?Sized> FoldersApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    pub async fn get(&self, folder_id: &str) -> Result<Folder> {
        self.service.get_folder(folder_id).await
    }

    pub async fn list(&self, space_id: &str, archived: bool) -> Result<Vec<Folder>> {
        self.service.get_folders(space_id, archived).await
    }

    pub fn create(&self, space_id: impl Into<String>) -> FolderBuilder<'a, S> {
        FolderBuilder {
            service: self.service,
            target: FolderTarget::Create(space_id.into()),
            request: FolderRequest::default(),
        }
    }

    /// Rename a folder.
    pub fn update(&self, folder_id: impl Into<String>) -> FolderBuilder<'a, S> {
        FolderBuilder {
            service: self.service,
            target: FolderTarget::Update(folder_id.into()),
            request: FolderRequest::default(),
        }
    }

    pub async fn delete(&self, folder_id: &str) -> Result<()> {
        self.service.delete_folder(folder_id).await
    }

    /// Instantiate a folder template inside a space.
    pub fn from_template(
        &self,
        space_id: impl Into<String>,
        template_id: impl Into<String>,
    ) -> FolderFromTemplateBuilder<'a, S> {
        FolderFromTemplateBuilder {
            service: self.service,
            space_id: space_id.into(),
            template_id: template_id.into(),
            request: CreateFolderFromTemplateRequest::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FolderTarget {
    Create(String),
    Update(String),
}

/// Builder for creating or renaming a folder.
pub struct FolderBuilder<'a, S: ?Sized> {
    service: &'a S,
    target: FolderTarget,
    request: FolderRequest,
}

impl<'a, S: FoldersService + ?Sized> FolderBuilder<'a, S> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    pub fn request(&self) -> &FolderRequest {
        &self.request
    }

    pub fn validate(&self) -> Result<()> {
        match &self.target {
            FolderTarget::Create(space_id) => require_id("space_id", space_id)?,
            FolderTarget::Update(folder_id) => require_id("folder_id", folder_id)?,
        }
        require_text("name", Some(self.request.name.as_str()))
    }

    pub async fn send(self) -> Result<Folder> {
        self.validate()?;
        match &self.target {
            FolderTarget::Create(space_id) => {
                self.service.create_folder(space_id, &self.request).await
            }
            FolderTarget::Update(folder_id) => {
                self.service.update_folder(folder_id, &self.request).await
            }
        }
    }
}

/// Builder for `POST v2/space/{space_id}/folder_template/{template_id}`.
pub struct FolderFromTemplateBuilder<'a, S: ?Sized> {
    service: &'a S,
    space_id: String,
    template_id: String,
    request: CreateFolderFromTemplateRequest,
}

impl<'a, S: FoldersService + ?Sized> FolderFromTemplateBuilder<'a, S> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    pub fn options(mut self, options: TemplateOptions) -> Self {
        self.request.options = Some(options);
        self
    }

    pub fn request(&self) -> &CreateFolderFromTemplateRequest {
        &self.request
    }

    pub async fn send(self) -> Result<CreatedFromTemplate> {
        require_id("space_id", &self.space_id)?;
        require_id("template_id", &self.template_id)?;
        require_text("name", Some(self.request.name.as_str()))?;
        self.service
            .create_folder_from_template(&self.space_id, &self.template_id, &self.request)
            .await
    }
}
