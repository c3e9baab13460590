//! Attachment models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{formats::Flexible, serde_as, TimestampMilliSeconds};

/// A file attached to a task.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment id.
    pub id: String,

    /// Version counter.
    #[serde(default)]
    pub version: Option<String>,

    /// Upload time.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date: Option<DateTime<Utc>>,

    /// File name.
    #[serde(default)]
    pub title: Option<String>,

    /// File extension.
    #[serde(default)]
    pub extension: Option<String>,

    #[serde(default)]
    pub thumbnail_small: Option<String>,

    #[serde(default)]
    pub thumbnail_large: Option<String>,

    /// Download URL.
    #[serde(default)]
    pub url: Option<String>,
}

/// A file to upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentUpload {
    /// File name sent in the multipart part.
    pub file_name: String,
    /// File contents.
    pub content: Vec<u8>,
    /// MIME type; the server sniffs it when absent.
    pub mime_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_deserialize() {
        let json = r#"{
            "id": "ac434d4e-8b1c-4571-951b-866b6d9f2ee6.png",
            "version": "0",
            "date": 1569988578766,
            "title": "image.png",
            "extension": "png",
            "thumbnail_small": "https://attachments.clickup.com/small.png",
            "thumbnail_large": "https://attachments.clickup.com/large.png",
            "url": "https://attachments.clickup.com/image.png"
        }"#;
        let attachment: Attachment = serde_json::from_str(json).unwrap();
        assert_eq!(attachment.extension.as_deref(), Some("png"));
        assert_eq!(attachment.date.unwrap().timestamp_millis(), 1_569_988_578_766);
    }
}
