//! Chat models (API v3).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{formats::Flexible, serde_as, TimestampMilliSeconds};

use crate::query::{QueryPairs, ToQuery};

/// A chat channel, DM or group DM.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChannel {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    /// `CHANNEL`, `DM` or `GROUP_DM`.
    #[serde(default, rename = "type")]
    pub channel_type: Option<String>,
    /// `PUBLIC` or `PRIVATE`.
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub workspace_id: Option<String>,
    /// Location the channel is attached to, if any.
    #[serde(default)]
    pub parent: Option<ChatLocation>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub archived: bool,
}

/// A hierarchy location (space, folder or list) referenced by chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatLocation {
    pub id: String,
    #[serde(rename = "type")]
    pub location_type: serde_json::Value,
}

/// Cursor-paged list envelope used by v3 chat endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ChatListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Single-object envelope (`{"data": {...}}`) used by v3 chat endpoints.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ChatEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ChatEnvelope<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            ChatEnvelope::Wrapped { data } => data,
            ChatEnvelope::Bare(value) => value,
        }
    }
}

/// Filters for `GET v3/workspaces/{workspace_id}/chat/channels`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatChannelsQuery {
    /// Page size (the API allows 1-100, default 50).
    pub limit: Option<u32>,
    pub description_format: Option<ContentFormat>,
    pub is_follower: Option<bool>,
    pub include_hidden: Option<bool>,
    /// Only channels with activity after this unix-millisecond timestamp.
    pub with_comment_since: Option<i64>,
    /// `CHANNEL`, `DM`, `GROUP_DM`.
    pub room_types: Vec<String>,
}

impl ChatChannelsQuery {
    /// Query pairs for a given cursor.
    pub fn to_query_with_cursor(&self, cursor: Option<&str>) -> QueryPairs {
        let mut q = self.to_query();
        q.push_opt("cursor", cursor);
        q
    }
}

impl ToQuery for ChatChannelsQuery {
    fn to_query(&self) -> QueryPairs {
        let mut q = QueryPairs::new();
        q.push_opt("limit", self.limit)
            .push_opt("description_format", self.description_format.map(ContentFormat::as_str))
            .push_opt("is_follower", self.is_follower)
            .push_opt("include_hidden", self.include_hidden)
            .push_opt("with_comment_since", self.with_comment_since)
            .push_array("room_types", &self.room_types);
        q
    }
}

/// Content format for chat and doc bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContentFormat {
    #[default]
    #[serde(rename = "text/md")]
    Markdown,
    #[serde(rename = "text/plain")]
    PlainText,
}

impl ContentFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentFormat::Markdown => "text/md",
            ContentFormat::PlainText => "text/plain",
        }
    }
}

/// Visibility of a new channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChannelVisibility {
    Public,
    Private,
}

/// Request body for creating a channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateChatChannelRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<ChannelVisibility>,
}

/// A chat message.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    /// `message` or `post`.
    #[serde(default, rename = "type")]
    pub message_type: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub content_format: Option<ContentFormat>,
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub parent_channel: Option<String>,
    #[serde(default)]
    pub parent_message: Option<String>,
    #[serde(default)]
    pub resolved: Option<bool>,
    #[serde(default)]
    pub replies_count: Option<u32>,
}

/// Filters for listing channel messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatMessagesQuery {
    pub limit: Option<u32>,
    pub content_format: Option<ContentFormat>,
}

impl ChatMessagesQuery {
    pub fn to_query_with_cursor(&self, cursor: Option<&str>) -> QueryPairs {
        let mut q = self.to_query();
        q.push_opt("cursor", cursor);
        q
    }
}

impl ToQuery for ChatMessagesQuery {
    fn to_query(&self) -> QueryPairs {
        let mut q = QueryPairs::new();
        q.push_opt("limit", self.limit)
            .push_opt("content_format", self.content_format.map(ContentFormat::as_str));
        q
    }
}

/// Kind of message to post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMessageType {
    #[default]
    Message,
    Post,
}

/// Request body for posting a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateChatMessageRequest {
    #[serde(rename = "type")]
    pub message_type: ChatMessageType,
    pub content: String,
    pub content_format: ContentFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_assignee: Option<String>,
}

/// Request body for editing a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateChatMessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_format: Option<ContentFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_list_response() {
        let json = r#"{
            "data": [{"id": "8cdu", "name": "general", "type": "CHANNEL", "visibility": "PUBLIC",
                      "workspace_id": "9001", "created_at": 1704067200000, "archived": false}],
            "next_cursor": "abc"
        }"#;
        let parsed: ChatListResponse<ChatChannel> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data[0].channel_type.as_deref(), Some("CHANNEL"));
        assert_eq!(parsed.next_cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn test_envelope_accepts_wrapped_and_bare() {
        let wrapped: ChatEnvelope<ChatChannel> =
            serde_json::from_str(r#"{"data": {"id": "c1"}}"#).unwrap();
        assert_eq!(wrapped.into_inner().id, "c1");
        let bare: ChatEnvelope<ChatChannel> = serde_json::from_str(r#"{"id": "c2"}"#).unwrap();
        assert_eq!(bare.into_inner().id, "c2");
    }

    #[test]
    fn test_create_message_body() {
        let request = CreateChatMessageRequest {
            content: "Hello".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "message", "content": "Hello", "content_format": "text/md"})
        );
    }

    #[test]
    fn test_channels_query_with_cursor() {
        let query = ChatChannelsQuery {
            limit: Some(10),
            room_types: vec!["CHANNEL".to_string()],
            ..Default::default()
        };
        let q = query.to_query_with_cursor(Some("next"));
        assert_eq!(q.get("limit"), Some("10"));
        assert_eq!(q.get_all("room_types[]"), vec!["CHANNEL"]);
        assert_eq!(q.get("cursor"), Some("next"));
    }
}
