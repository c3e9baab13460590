//! Chat channels and messages (API v3).

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{
    ChatChannel, ChatChannelsQuery, ChatEnvelope, ChatListResponse, ChatMessage,
    ChatMessagesQuery, CreateChatChannelRequest, CreateChatMessageRequest,
    UpdateChatMessageRequest,
};
use crate::pagination::CursorPage;
use crate::validation::{require_id, require_text};

/// Chat endpoints.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// One page of channels. `GET v3/workspaces/{workspace_id}/chat/channels`
    async fn get_chat_channels(
        &self,
        workspace_id: &str,
        query: &ChatChannelsQuery,
        cursor: Option<&str>,
    ) -> Result<CursorPage<ChatChannel>>;

    /// `GET v3/workspaces/{workspace_id}/chat/channels/{channel_id}`
    async fn get_chat_channel(&self, workspace_id: &str, channel_id: &str)
        -> Result<ChatChannel>;

    /// `POST v3/workspaces/{workspace_id}/chat/channels`
    async fn create_chat_channel(
        &self,
        workspace_id: &str,
        request: &CreateChatChannelRequest,
    ) -> Result<ChatChannel>;

    /// `DELETE v3/workspaces/{workspace_id}/chat/channels/{channel_id}`
    async fn delete_chat_channel(&self, workspace_id: &str, channel_id: &str) -> Result<()>;

    /// One page of messages, newest first.
    /// `GET v3/workspaces/{workspace_id}/chat/channels/{channel_id}/messages`
    async fn get_chat_messages(
        &self,
        workspace_id: &str,
        channel_id: &str,
        query: &ChatMessagesQuery,
        cursor: Option<&str>,
    ) -> Result<CursorPage<ChatMessage>>;

    /// `POST v3/workspaces/{workspace_id}/chat/channels/{channel_id}/messages`
    async fn create_chat_message(
        &self,
        workspace_id: &str,
        channel_id: &str,
        request: &CreateChatMessageRequest,
    ) -> Result<ChatMessage>;

    /// `PATCH v3/workspaces/{workspace_id}/chat/messages/{message_id}`
    async fn update_chat_message(
        &self,
        workspace_id: &str,
        message_id: &str,
        request: &UpdateChatMessageRequest,
    ) -> Result<ChatMessage>;

    /// `DELETE v3/workspaces/{workspace_id}/chat/messages/{message_id}`
    async fn delete_chat_message(&self, workspace_id: &str, message_id: &str) -> Result<()>;
}

fn chat_path(workspace_id: &str, rest: &str) -> Result<String> {
    require_id("workspace_id", workspace_id)?;
    Ok(format!("v3/workspaces/{}/chat/{rest}", segment(workspace_id)))
}

#[async_trait]
impl ChatService for ClickUpClient {
    #[tracing::instrument(skip(self, query))]
    async fn get_chat_channels(
        &self,
        workspace_id: &str,
        query: &ChatChannelsQuery,
        cursor: Option<&str>,
    ) -> Result<CursorPage<ChatChannel>> {
        let path = chat_path(workspace_id, "channels")?;
        let response: ChatListResponse<ChatChannel> = self
            .get_json_with_query(&path, &query.to_query_with_cursor(cursor))
            .await?;
        let next = response.next_cursor.filter(|c| !c.is_empty());
        Ok(CursorPage::new(response.data, next))
    }

    #[tracing::instrument(skip(self))]
    async fn get_chat_channel(
        &self,
        workspace_id: &str,
        channel_id: &str,
    ) -> Result<ChatChannel> {
        require_id("channel_id", channel_id)?;
        let path = chat_path(workspace_id, &format!("channels/{}", segment(channel_id)))?;
        let response: ChatEnvelope<ChatChannel> = self.get_json(&path).await?;
        Ok(response.into_inner())
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_chat_channel(
        &self,
        workspace_id: &str,
        request: &CreateChatChannelRequest,
    ) -> Result<ChatChannel> {
        require_text("name", Some(request.name.as_str()))?;
        let path = chat_path(workspace_id, "channels")?;
        let response: ChatEnvelope<ChatChannel> = self.post_json(&path, request).await?;
        Ok(response.into_inner())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_chat_channel(&self, workspace_id: &str, channel_id: &str) -> Result<()> {
        require_id("channel_id", channel_id)?;
        let path = chat_path(workspace_id, &format!("channels/{}", segment(channel_id)))?;
        self.delete(&path).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, query))]
    async fn get_chat_messages(
        &self,
        workspace_id: &str,
        channel_id: &str,
        query: &ChatMessagesQuery,
        cursor: Option<&str>,
    ) -> Result<CursorPage<ChatMessage>> {
        require_id("channel_id", channel_id)?;
        let path = chat_path(
            workspace_id,
            &format!("channels/{}/messages", segment(channel_id)),
        )?;
        let response: ChatListResponse<ChatMessage> = self
            .get_json_with_query(&path, &query.to_query_with_cursor(cursor))
            .await?;
        let next = response.next_cursor.filter(|c| !c.is_empty());
        Ok(CursorPage::new(response.data, next))
    }

    #[tracing::instrument(skip(self, request))]
    async fn create_chat_message(
        &self,
        workspace_id: &str,
        channel_id: &str,
        request: &CreateChatMessageRequest,
    ) -> Result<ChatMessage> {
        require_id("channel_id", channel_id)?;
        require_text("content", Some(request.content.as_str()))?;
        let path = chat_path(
            workspace_id,
            &format!("channels/{}/messages", segment(channel_id)),
        )?;
        let response: ChatEnvelope<ChatMessage> = self.post_json(&path, request).await?;
        Ok(response.into_inner())
    }

    #[tracing::instrument(skip(self, request))]
    async fn update_chat_message(
        &self,
        workspace_id: &str,
        message_id: &str,
        request: &UpdateChatMessageRequest,
    ) -> Result<ChatMessage> {
        require_id("message_id", message_id)?;
        let path = chat_path(workspace_id, &format!("messages/{}", segment(message_id)))?;
        let response: ChatEnvelope<ChatMessage> = self.patch_json(&path, request).await?;
        Ok(response.into_inner())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_chat_message(&self, workspace_id: &str, message_id: &str) -> Result<()> {
        require_id("message_id", message_id)?;
        let path = chat_path(workspace_id, &format!("messages/{}", segment(message_id)))?;
        self.delete(&path).await?;
        Ok(())
    }
}
