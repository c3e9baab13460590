//! Fluent chat requests (API v3).

use chrono::{DateTime, Utc};
use futures::stream::BoxStream;

use super::failed_stream;
use crate::error::{ClickUpError, Result};
use crate::models::{
    ChannelVisibility, ChatChannel, ChatChannelsQuery, ChatMessage, ChatMessageType,
    ChatMessagesQuery, ContentFormat, CreateChatChannelRequest, CreateChatMessageRequest,
    UpdateChatMessageRequest,
};
use crate::pagination::{paginate_cursor, CursorPage};
use crate::services::ChatService;
use crate::validation::{require_id, require_text};

/// Page sizes the chat endpoints accept.
const CHAT_LIMIT: std::ops::RangeInclusive<u32> = 1..=100;

/// Chat requests, see [`ClickUpClient::chat`](crate::ClickUpClient::chat).
pub struct ChatApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: ChatService + ?Sized> ChatApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Channels in a workspace.
    pub fn channels(&self, workspace_id: impl Into<String>) -> ChannelsBuilder<'a, S> {
        ChannelsBuilder {
            service: self.service,
            workspace_id: workspace_id.into(),
            query: ChatChannelsQuery::default(),
        }
    }

    pub async fn channel(&self, workspace_id: &str, channel_id: &str) -> Result<ChatChannel> {
        self.service.get_chat_channel(workspace_id, channel_id).await
    }

    pub fn create_channel(
        &self,
        workspace_id: impl Into<String>,
        name: impl Into<String>,
    ) -> CreateChannelBuilder<'a, S> {
        CreateChannelBuilder {
            service: self.service,
            workspace_id: workspace_id.into(),
            request: CreateChatChannelRequest {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    pub async fn delete_channel(&self, workspace_id: &str, channel_id: &str) -> Result<()> {
        self.service.delete_chat_channel(workspace_id, channel_id).await
    }

    /// Messages of a channel, newest first.
    pub fn messages(
        &self,
        workspace_id: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> MessagesBuilder<'a, S> {
        MessagesBuilder {
            service: self.service,
            workspace_id: workspace_id.into(),
            channel_id: channel_id.into(),
            query: ChatMessagesQuery::default(),
        }
    }

    /// Post `content` (markdown by default) to a channel.
    pub fn send_message(
        &self,
        workspace_id: impl Into<String>,
        channel_id: impl Into<String>,
        content: impl Into<String>,
    ) -> PostMessageBuilder<'a, S> {
        PostMessageBuilder {
            service: self.service,
            workspace_id: workspace_id.into(),
            channel_id: channel_id.into(),
            request: CreateChatMessageRequest {
                content: content.into(),
                ..Default::default()
            },
        }
    }

    pub fn edit_message(
        &self,
        workspace_id: impl Into<String>,
        message_id: impl Into<String>,
    ) -> EditMessageBuilder<'a, S> {
        EditMessageBuilder {
            service: self.service,
            workspace_id: workspace_id.into(),
            message_id: message_id.into(),
            request: UpdateChatMessageRequest::default(),
        }
    }

    pub async fn delete_message(&self, workspace_id: &str, message_id: &str) -> Result<()> {
        self.service.delete_chat_message(workspace_id, message_id).await
    }
}

fn check_limit(limit: Option<u32>) -> Result<()> {
    match limit {
        Some(n) if !CHAT_LIMIT.contains(&n) => Err(ClickUpError::validation(
            "limit",
            format!("must be between {} and {}", CHAT_LIMIT.start(), CHAT_LIMIT.end()),
        )),
        _ => Ok(()),
    }
}

/// Builder for `GET v3/workspaces/{workspace_id}/chat/channels`.
pub struct ChannelsBuilder<'a, S: ?Sized> {
    service: &'a S,
    workspace_id: String,
    query: ChatChannelsQuery,
}

impl<'a, S: ChatService + ?Sized> ChannelsBuilder<'a, S> {
    /// Channels per page (1-100).
    pub fn limit(mut self, limit: u32) -> Self {
        self.query.limit = Some(limit);
        self
    }

    pub fn description_format(mut self, format: ContentFormat) -> Self {
        self.query.description_format = Some(format);
        self
    }

    /// Only channels the user follows.
    pub fn following(mut self) -> Self {
        self.query.is_follower = Some(true);
        self
    }

    pub fn include_hidden(mut self) -> Self {
        self.query.include_hidden = Some(true);
        self
    }

    /// Only channels with messages since `since`.
    pub fn active_since(mut self, since: DateTime<Utc>) -> Self {
        self.query.with_comment_since = Some(since.timestamp_millis());
        self
    }

    /// Restrict to a room type: `CHANNEL`, `DM` or `GROUP_DM`.
    pub fn room_type(mut self, room_type: impl Into<String>) -> Self {
        self.query.room_types.push(room_type.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_id("workspace_id", &self.workspace_id)?;
        check_limit(self.query.limit)
    }

    /// One page; pass the previous page's `next_cursor` to continue.
    pub async fn page(&self, cursor: Option<&str>) -> Result<CursorPage<ChatChannel>> {
        self.validate()?;
        self.service
            .get_chat_channels(&self.workspace_id, &self.query, cursor)
            .await
    }

    pub fn stream(self) -> BoxStream<'a, Result<ChatChannel>> {
        if let Err(err) = self.validate() {
            return failed_stream(err);
        }
        let Self {
            service,
            workspace_id,
            query,
        } = self;
        paginate_cursor(move |cursor: Option<String>| {
            let workspace_id = workspace_id.clone();
            let query = query.clone();
            async move {
                service
                    .get_chat_channels(&workspace_id, &query, cursor.as_deref())
                    .await
            }
        })
    }
}

/// Builder for creating a channel.
pub struct CreateChannelBuilder<'a, S: ?Sized> {
    service: &'a S,
    workspace_id: String,
    request: CreateChatChannelRequest,
}

impl<'a, S: ChatService + ?Sized> CreateChannelBuilder<'a, S> {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.request.description = Some(description.into());
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.request.topic = Some(topic.into());
        self
    }

    pub fn member(mut self, user_id: impl Into<String>) -> Self {
        self.request.user_ids.push(user_id.into());
        self
    }

    pub fn visibility(mut self, visibility: ChannelVisibility) -> Self {
        self.request.visibility = Some(visibility);
        self
    }

    pub async fn send(self) -> Result<ChatChannel> {
        require_id("workspace_id", &self.workspace_id)?;
        require_text("name", Some(self.request.name.as_str()))?;
        self.service
            .create_chat_channel(&self.workspace_id, &self.request)
            .await
    }
}

/// Builder for listing channel messages.
pub struct MessagesBuilder<'a, S: ?Sized> {
    service: &'a S,
    workspace_id: String,
    channel_id: String,
    query: ChatMessagesQuery,
}

impl<'a, S: ChatService + ?Sized> MessagesBuilder<'a, S> {
    pub fn limit(mut self, limit: u32) -> Self {
        self.query.limit = Some(limit);
        self
    }

    pub fn content_format(mut self, format: ContentFormat) -> Self {
        self.query.content_format = Some(format);
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_id("workspace_id", &self.workspace_id)?;
        require_id("channel_id", &self.channel_id)?;
        check_limit(self.query.limit)
    }

    pub async fn page(&self, cursor: Option<&str>) -> Result<CursorPage<ChatMessage>> {
        self.validate()?;
        self.service
            .get_chat_messages(&self.workspace_id, &self.channel_id, &self.query, cursor)
            .await
    }

    pub fn stream(self) -> BoxStream<'a, Result<ChatMessage>> {
        if let Err(err) = self.validate() {
            return failed_stream(err);
        }
        let Self {
            service,
            workspace_id,
            channel_id,
            query,
        } = self;
        paginate_cursor(move |cursor: Option<String>| {
            let workspace_id = workspace_id.clone();
            let channel_id = channel_id.clone();
            let query = query.clone();
            async move {
                service
                    .get_chat_messages(&workspace_id, &channel_id, &query, cursor.as_deref())
                    .await
            }
        })
    }
}

/// Builder for posting a message.
pub struct PostMessageBuilder<'a, S: ?Sized> {
    service: &'a S,
    workspace_id: String,
    channel_id: String,
    request: CreateChatMessageRequest,
}

impl<'a, S: ChatService + ?Sized> PostMessageBuilder<'a, S> {
    /// Send as a post instead of a plain message.
    pub fn as_post(mut self) -> Self {
        self.request.message_type = ChatMessageType::Post;
        self
    }

    pub fn plain_text(mut self) -> Self {
        self.request.content_format = ContentFormat::PlainText;
        self
    }

    pub fn assignee(mut self, user_id: impl Into<String>) -> Self {
        self.request.assignee = Some(user_id.into());
        self
    }

    pub fn group_assignee(mut self, group_id: impl Into<String>) -> Self {
        self.request.group_assignee = Some(group_id.into());
        self
    }

    pub fn request(&self) -> &CreateChatMessageRequest {
        &self.request
    }

    pub async fn send(self) -> Result<ChatMessage> {
        require_id("workspace_id", &self.workspace_id)?;
        require_id("channel_id", &self.channel_id)?;
        require_text("content", Some(self.request.content.as_str()))?;
        self.service
            .create_chat_message(&self.workspace_id, &self.channel_id, &self.request)
            .await
    }
}

/// Builder for editing a message.
pub struct EditMessageBuilder<'a, S: ?Sized> {
    service: &'a S,
    workspace_id: String,
    message_id: String,
    request: UpdateChatMessageRequest,
}

impl<'a, S: ChatService + ?Sized> EditMessageBuilder<'a, S> {
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.request.content = Some(content.into());
        self
    }

    pub fn content_format(mut self, format: ContentFormat) -> Self {
        self.request.content_format = Some(format);
        self
    }

    pub fn resolved(mut self, resolved: bool) -> Self {
        self.request.resolved = Some(resolved);
        self
    }

    pub fn assignee(mut self, user_id: impl Into<String>) -> Self {
        self.request.assignee = Some(user_id.into());
        self
    }

    pub async fn send(self) -> Result<ChatMessage> {
        require_id("workspace_id", &self.workspace_id)?;
        require_id("message_id", &self.message_id)?;
        if self.request == UpdateChatMessageRequest::default() {
            return Err(ClickUpError::validation("message", "no changes set"));
        }
        if let Some(content) = &self.request.content {
            require_text("content", Some(content.as_str()))?;
        }
        self.service
            .update_chat_message(&self.workspace_id, &self.message_id, &self.request)
            .await
    }
}
