//! Fluent checklist requests.

use crate::error::{ClickUpError, Result};
use crate::models::{
    Checklist, CreateChecklistItemRequest, CreateChecklistRequest, EditChecklistItemRequest,
    EditChecklistRequest,
};
use crate::services::ChecklistsService;
use crate::validation::{require_id, require_text};

/// Checklist requests, see
/// [`ClickUpClient::checklists`](crate::ClickUpClient::checklists).
pub struct ChecklistsApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: ChecklistsService + ?Sized> ChecklistsApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    pub async fn create(&self, task_id: &str, name: &str) -> Result<Checklist> {
        require_text("name", Some(name))?;
        let request = CreateChecklistRequest {
            name: name.to_string(),
        };
        self.service.create_checklist(task_id, &request).await
    }

    pub fn edit(&self, checklist_id: impl Into<String>) -> EditChecklistBuilder<'a, S> {
        EditChecklistBuilder {
            service: self.service,
            checklist_id: checklist_id.into(),
            request: EditChecklistRequest::default(),
        }
    }

    pub async fn delete(&self, checklist_id: &str) -> Result<()> {
        self.service.delete_checklist(checklist_id).await
    }

    pub fn add_item(&self, checklist_id: impl Into<String>) -> CreateChecklistItemBuilder<'a, S> {
        CreateChecklistItemBuilder {
            service: self.service,
            checklist_id: checklist_id.into(),
            request: CreateChecklistItemRequest::default(),
        }
    }

    pub fn edit_item(
        &self,
        checklist_id: impl Into<String>,
        item_id: impl Into<String>,
    ) -> EditChecklistItemBuilder<'a, S> {
        EditChecklistItemBuilder {
            service: self.service,
            checklist_id: checklist_id.into(),
            item_id: item_id.into(),
            request: EditChecklistItemRequest::default(),
        }
    }

    pub async fn delete_item(&self, checklist_id: &str, item_id: &str) -> Result<()> {
        self.service.delete_checklist_item(checklist_id, item_id).await
    }
}

/// Builder for `PUT v2/checklist/{checklist_id}`.
pub struct EditChecklistBuilder<'a, S: ?Sized> {
    service: &'a S,
    checklist_id: String,
    request: EditChecklistRequest,
}

impl<'a, S: ChecklistsService + ?Sized> EditChecklistBuilder<'a, S> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = Some(name.into());
        self
    }

    /// 0 moves the checklist to the top.
    pub fn position(mut self, position: u32) -> Self {
        self.request.position = Some(position);
        self
    }

    pub async fn send(self) -> Result<()> {
        require_id("checklist_id", &self.checklist_id)?;
        if self.request.name.is_none() && self.request.position.is_none() {
            return Err(ClickUpError::validation(
                "request",
                "set a name or a position",
            ));
        }
        self.service
            .edit_checklist(&self.checklist_id, &self.request)
            .await
    }
}

/// Builder for `POST v2/checklist/{checklist_id}/checklist_item`.
pub struct CreateChecklistItemBuilder<'a, S: ?Sized> {
    service: &'a S,
    checklist_id: String,
    request: CreateChecklistItemRequest,
}

impl<'a, S: ChecklistsService + ?Sized> CreateChecklistItemBuilder<'a, S> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = name.into();
        self
    }

    pub fn assignee(mut self, user_id: i64) -> Self {
        self.request.assignee = Some(user_id);
        self
    }

    pub async fn send(self) -> Result<Checklist> {
        require_id("checklist_id", &self.checklist_id)?;
        require_text("name", Some(self.request.name.as_str()))?;
        self.service
            .create_checklist_item(&self.checklist_id, &self.request)
            .await
    }
}

/// Builder for `PUT v2/checklist/{checklist_id}/checklist_item/{item_id}`.
pub struct EditChecklistItemBuilder<'a, S: ?Sized> {
    service: &'a S,
    checklist_id: String,
    item_id: String,
    request: EditChecklistItemRequest,
}

impl<'a, S: ChecklistsService + ?Sized> EditChecklistItemBuilder<'a, S> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.request.name = Some(name.into());
        self
    }

    pub fn assignee(mut self, user_id: i64) -> Self {
        self.request.assignee = Some(Some(user_id));
        self
    }

    pub fn unassign(mut self) -> Self {
        self.request.assignee = Some(None);
        self
    }

    pub fn resolved(mut self, resolved: bool) -> Self {
        self.request.resolved = Some(resolved);
        self
    }

    /// Nest the item under another item.
    pub fn parent(mut self, item_id: impl Into<String>) -> Self {
        self.request.parent = Some(Some(item_id.into()));
        self
    }

    /// Move a nested item back to the top level.
    pub fn unnest(mut self) -> Self {
        self.request.parent = Some(None);
        self
    }

    pub fn request(&self) -> &EditChecklistItemRequest {
        &self.request
    }

    pub async fn send(self) -> Result<Checklist> {
        require_id("checklist_id", &self.checklist_id)?;
        require_id("item_id", &self.item_id)?;
        if self.request.parent.as_ref().and_then(Option::as_ref) == Some(&self.item_id) {
            return Err(ClickUpError::validation(
                "parent",
                "an item cannot be its own parent",
            ));
        }
        self.service
            .edit_checklist_item(&self.checklist_id, &self.item_id, &self.request)
            .await
    }
}
