//! Fluent list requests.

use chrono::{DateTime, Utc};

use crate::error::{ClickUpError, Result};
use crate::models::{CreateListRequest, List, Priority, UpdateListRequest};
use crate::services::ListsService;
use crate::validation::{require_exclusive, require_id, require_text};

/// List requests, see [`ClickUpClient::lists`](crate::ClickUpClient::lists).
pub struct ListsApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: ListsService + ?Sized> ListsApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    pub async fn get(&self, list_id: &str) -> Result<List> {
        self.service.get_list(list_id).await
    }

    /// Lists inside a folder.
    pub async fn in_folder(&self, folder_id: &str, archived: bool) -> Result<Vec<List>> {
        self.service.get_lists(folder_id, archived).await
    }

    /// Lists directly under a space.
    pub async fn folderless(&self, space_id: &str, archived: bool) -> Result<Vec<List>> {
        self.service.get_folderless_lists(space_id, archived).await
    }

    /// Start a new list; pick its parent with [`CreateListBuilder::in_folder`]
    /// or [`CreateListBuilder::in_space`].
    pub fn create(&self) -> CreateListBuilder<'a, S> {
        CreateListBuilder {
            service: self.service,
            parent: None,
            request: CreateListRequest::default(),
        }
    }

    pub fn update(&self, list_id: impl Into<String>) -> UpdateListBuilder<'a, S> {
        UpdateListBuilder {
            service: self.service,
            list_id: list_id.into(),
            request: UpdateListRequest::default(),
        }
    }

    pub async fn delete(&self, list_id: &str) -> Result<()> {
        self.service.delete_list(list_id).await
    }

    /// Add a task to an extra list (Tasks in Multiple Lists).
    pub async fn add_task(&self, list_id: &str, task_id: &str) -> Result<()> {
        self.service.add_task_to_list(list_id, task_id).await
    }

    pub async fn remove_task(&self, list_id: &str, task_id: &str) -> Result<()> {
        self.service.remove_task_from_list(list_id, task_id).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ListParent {
    Folder(String),
    Space(String),
}

/// Builder for `POST v2/folder/{id}/list` and `POST v2/space/{id}/list`.
pub struct CreateListBuilder<'a, S: ?Sized> {
    service: &'a S,
    parent: Option<ListParent>,
    request: CreateListRequest,
}

impl<'a, S: ListsService + ?Sized> CreateListBuilder<'a, S> {
    pub fn in_folder(mut self, folder_id: impl Into<String>) -> Self {
        self.parent = Some(ListParent::Folder(folder_id.into()));
        self
    }

    /// Create a folderless list.
    pub fn in_space(mut self, space_id: impl Into<String>) -> Self {
        self.parent = Some(ListParent::Space(space_id.into()));
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.request.content = Some(content.into());
        self
    }

    pub fn markdown_content(mut self, markdown: impl Into<String>) -> Self {
        self.request.markdown_content = Some(markdown.into());
        self
    }

    pub fn due_date(mut self, due: DateTime<Utc>) -> Self {
        self.request.due_date = Some(due);
        self
    }

    pub fn due_date_time(mut self, with_time: bool) -> Self {
        self.request.due_date_time = Some(with_time);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.request.priority = Some(priority);
        self
    }

    pub fn assignee(mut self, user_id: i64) -> Self {
        self.request.assignee = Some(user_id);
        self
    }

    /// List colour.
    pub fn status(mut self, color: impl Into<String>) -> Self {
        self.request.status = Some(color.into());
        self
    }

    pub fn request(&self) -> &CreateListRequest {
        &self.request
    }

    fn parent(&self) -> Result<&ListParent> {
        let parent = self.parent.as_ref().ok_or_else(|| {
            ClickUpError::validation("parent", "a folder or a space is required")
        })?;
        match parent {
            ListParent::Folder(id) => require_id("folder_id", id)?,
            ListParent::Space(id) => require_id("space_id", id)?,
        }
        Ok(parent)
    }

    pub fn validate(&self) -> Result<()> {
        self.parent()?;
        require_text("name", Some(self.request.name.as_str()))?;
        require_exclusive(
            "content",
            self.request.content.is_some(),
            "markdown_content",
            self.request.markdown_content.is_some(),
        )
    }

    pub async fn send(self) -> Result<List> {
        self.validate()?;
        match self.parent()? {
            ListParent::Folder(id) => self.service.create_list(id, &self.request).await,
            ListParent::Space(id) => self.service.create_folderless_list(id, &self.request).await,
        }
    }
}

/// Builder for `PUT v2/list/{list_id}`.
pub struct UpdateListBuilder<'a, S: ?Sized> {
    service: &'a S,
    list_id: String,
    request: UpdateListRequest,
}

impl<'a, S: ListsService + ?Sized> UpdateListBuilder<'a, S> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = Some(name.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.request.content = Some(content.into());
        self
    }

    pub fn markdown_content(mut self, markdown: impl Into<String>) -> Self {
        self.request.markdown_content = Some(markdown.into());
        self
    }

    pub fn due_date(mut self, due: DateTime<Utc>) -> Self {
        self.request.due_date = Some(due);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.request.priority = Some(priority);
        self
    }

    pub fn assignee(mut self, user_id: impl Into<String>) -> Self {
        self.request.assignee = Some(user_id.into());
        self
    }

    pub fn status(mut self, color: impl Into<String>) -> Self {
        self.request.status = Some(color.into());
        self
    }

    /// Remove the list colour.
    pub fn unset_status(mut self) -> Self {
        self.request.unset_status = Some(true);
        self
    }

    pub fn request(&self) -> &UpdateListRequest {
        &self.request
    }

    pub fn validate(&self) -> Result<()> {
        require_id("list_id", &self.list_id)?;
        if let Some(name) = &self.request.name {
            require_text("name", Some(name.as_str()))?;
        }
        require_exclusive(
            "content",
            self.request.content.is_some(),
            "markdown_content",
            self.request.markdown_content.is_some(),
        )?;
        require_exclusive(
            "status",
            self.request.status.is_some(),
            "unset_status",
            self.request.unset_status.is_some(),
        )
    }

    pub async fn send(self) -> Result<List> {
        self.validate()?;
        self.service.update_list(&self.list_id, &self.request).await
    }
}
