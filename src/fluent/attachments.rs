//! Fluent attachment uploads.

use crate::error::{ClickUpError, Result};
use crate::models::{Attachment, AttachmentUpload};
use crate::services::AttachmentsService;
use crate::validation::{require_id, require_text};

/// Attachment requests, see
/// [`ClickUpClient::attachments`](crate::ClickUpClient::attachments).
pub struct AttachmentsApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: AttachmentsService + ?Sized> AttachmentsApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Upload a file to a task.
    pub fn upload(&self, task_id: impl Into<String>) -> UploadAttachmentBuilder<'a, S> {
        UploadAttachmentBuilder {
            service: self.service,
            task_id: task_id.into(),
            upload: AttachmentUpload::default(),
        }
    }
}

/// Builder for `POST v2/task/{task_id}/attachment`.
pub struct UploadAttachmentBuilder<'a, S: ?Sized> {
    service: &'a S,
    task_id: String,
    upload: AttachmentUpload,
}

impl<'a, S: AttachmentsService + ?Sized> UploadAttachmentBuilder<'a, S> {
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.upload.file_name = name.into();
        self
    }

    pub fn content(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.upload.content = bytes.into();
        self
    }

    pub fn mime_type(mut self, mime: impl Into<String>) -> Self {
        self.upload.mime_type = Some(mime.into());
        self
    }

    pub fn upload(&self) -> &AttachmentUpload {
        &self.upload
    }

    pub fn validate(&self) -> Result<()> {
        require_id("task_id", &self.task_id)?;
        require_text("file_name", Some(self.upload.file_name.as_str()))?;
        if self.upload.content.is_empty() {
            return Err(ClickUpError::validation("content", "must not be empty"));
        }
        Ok(())
    }

    pub async fn send(self) -> Result<Attachment> {
        self.validate()?;
        self.service
            .create_task_attachment(&self.task_id, &self.upload)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluent::testing::{fixture, Recorder};
    use async_trait::async_trait;
    use serde_json::json;

    #[derive(Default)]
    struct FakeAttachments {
        calls: Recorder<(String, AttachmentUpload)>,
    }

    #[async_trait]
    impl AttachmentsService for FakeAttachments {
        async fn create_task_attachment(
            &self,
            task_id: &str,
            upload: &AttachmentUpload,
        ) -> Result<Attachment> {
            self.calls.record((task_id.into(), upload.clone()));
            Ok(fixture(json!({"id": "att-1", "title": upload.file_name})))
        }
    }

    #[tokio::test]
    async fn test_upload_sends_file() {
        let fake = FakeAttachments::default();
        let attachment = AttachmentsApi::new(&fake)
            .upload("t1")
            .file_name("notes.txt")
            .content(b"hello".to_vec())
            .mime_type("text/plain")
            .send()
            .await
            .unwrap();
        assert_eq!(attachment.title.as_deref(), Some("notes.txt"));

        let calls = fake.calls.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "t1");
        assert_eq!(calls[0].1.content, b"hello");
        assert_eq!(calls[0].1.mime_type.as_deref(), Some("text/plain"));
    }

    #[tokio::test]
    async fn test_upload_requires_name_and_content() {
        let fake = FakeAttachments::default();
        let api = AttachmentsApi::new(&fake);
        let err = api.upload("t1").content(vec![1]).send().await.unwrap_err();
        assert!(matches!(err, ClickUpError::Validation { field: "file_name", .. }));
        let err = api.upload("t1").file_name("a.bin").send().await.unwrap_err();
        assert!(matches!(err, ClickUpError::Validation { field: "content", .. }));
        assert!(fake.calls.calls().is_empty());
    }
}
