//! Task attachments.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::client::{segment, ClickUpClient};
use crate::error::{ClickUpError, Result};
use crate::models::{Attachment, AttachmentUpload};
use crate::validation::{require_id, require_non_empty_slice, require_text};

/// Attachment endpoints.
#[async_trait]
pub trait AttachmentsService: Send + Sync {
    /// Upload a file as multipart form data. `POST v2/task/{task_id}/attachment`
    async fn create_task_attachment(
        &self,
        task_id: &str,
        upload: &AttachmentUpload,
    ) -> Result<Attachment>;
}

#[async_trait]
impl AttachmentsService for ClickUpClient {
    #[tracing::instrument(skip(self, upload), fields(file_name = %upload.file_name, size = upload.content.len()))]
    async fn create_task_attachment(
        &self,
        task_id: &str,
        upload: &AttachmentUpload,
    ) -> Result<Attachment> {
        require_id("task_id", task_id)?;
        require_text("file_name", Some(upload.file_name.as_str()))?;
        require_non_empty_slice("content", &upload.content)?;

        let mut part = Part::bytes(upload.content.clone()).file_name(upload.file_name.clone());
        if let Some(mime) = upload.mime_type.as_deref() {
            part = part.mime_str(mime).map_err(ClickUpError::HttpError)?;
        }
        let form = Form::new().part("attachment", part);

        let path = format!("v2/task/{}/attachment", segment(task_id));
        ClickUpClient::decode(self.post_multipart(&path, form).await?).await
    }
}
