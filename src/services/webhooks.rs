//! Webhook subscriptions.

use async_trait::async_trait;

use crate::client::{segment, ClickUpClient};
use crate::error::Result;
use crate::models::{
    CreateWebhookRequest, UpdateWebhookRequest, Webhook, WebhookEnvelope, WebhooksResponse,
};
use crate::validation::require_id;

/// Webhook endpoints.
#[async_trait]
pub trait WebhooksService: Send + Sync {
    /// Webhooks created by the token's user. `GET v2/team/{team_id}/webhook`
    async fn get_webhooks(&self, team_id: &str) -> Result<Vec<Webhook>>;

    /// `POST v2/team/{team_id}/webhook`
    async fn create_webhook(&self, team_id: &str, request: &CreateWebhookRequest)
        -> Result<Webhook>;

    /// `PUT v2/webhook/{webhook_id}`
    async fn update_webhook(
        &self,
        webhook_id: &str,
        request: &UpdateWebhookRequest,
    ) -> Result<Webhook>;

    /// `DELETE v2/webhook/{webhook_id}`
    async fn delete_webhook(&self, webhook_id: &str) -> Result<()>;
}

#[async_trait]
impl WebhooksService for ClickUpClient {
    #[tracing::instrument(skip(self))]
    async fn get_webhooks(&self, team_id: &str) -> Result<Vec<Webhook>> {
        require_id("team_id", team_id)?;
        let response: WebhooksResponse = self
            .get_json(&format!("v2/team/{}/webhook", segment(team_id)))
            .await?;
        Ok(response.webhooks)
    }

    #[tracing::instrument(skip(self, request), fields(endpoint = %request.endpoint))]
    async fn create_webhook(
        &self,
        team_id: &str,
        request: &CreateWebhookRequest,
    ) -> Result<Webhook> {
        require_id("team_id", team_id)?;
        request.validate()?;
        let response: WebhookEnvelope = self
            .post_json(&format!("v2/team/{}/webhook", segment(team_id)), request)
            .await?;
        Ok(response.webhook)
    }

    #[tracing::instrument(skip(self, request))]
    async fn update_webhook(
        &self,
        webhook_id: &str,
        request: &UpdateWebhookRequest,
    ) -> Result<Webhook> {
        require_id("webhook_id", webhook_id)?;
        let response: WebhookEnvelope = self
            .put_json(&format!("v2/webhook/{}", segment(webhook_id)), request)
            .await?;
        Ok(response.webhook)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_webhook(&self, webhook_id: &str) -> Result<()> {
        require_id("webhook_id", webhook_id)?;
        self.delete(&format!("v2/webhook/{}", segment(webhook_id)))
            .await?;
        Ok(())
    }
}
