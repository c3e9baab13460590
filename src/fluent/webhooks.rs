//! Fluent webhook requests.

use crate::error::{ClickUpError, Result};
use crate::models::{CreateWebhookRequest, UpdateWebhookRequest, Webhook, ALL_EVENTS};
use crate::services::WebhooksService;
use crate::validation::require_id;

/// Webhook requests, see [`ClickUpClient::webhooks`](crate::ClickUpClient::webhooks).
pub struct WebhooksApi<'a, S: ?Sized> {
    service: &'a S,
}

impl<'a, S: WebhooksService + ?Sized> WebhooksApi<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Webhooks created by the authenticated user.
    pub async fn list(&self, team_id: &str) -> Result<Vec<Webhook>> {
        self.service.get_webhooks(team_id).await
    }

    pub fn create(
        &self,
        team_id: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> CreateWebhookBuilder<'a, S> {
        CreateWebhookBuilder {
            service: self.service,
            team_id: team_id.into(),
            request: CreateWebhookRequest {
                endpoint: endpoint.into(),
                ..Default::default()
            },
        }
    }

    pub fn update(&self, webhook_id: impl Into<String>) -> UpdateWebhookBuilder<'a, S> {
        UpdateWebhookBuilder {
            service: self.service,
            webhook_id: webhook_id.into(),
            request: UpdateWebhookRequest::default(),
        }
    }

    pub async fn delete(&self, webhook_id: &str) -> Result<()> {
        self.service.delete_webhook(webhook_id).await
    }
}

/// Builder for `POST v2/team/{team_id}/webhook`.
pub struct CreateWebhookBuilder<'a, S: ?Sized> {
    service: &'a S,
    team_id: String,
    request: CreateWebhookRequest,
}

impl<'a, S: WebhooksService + ?Sized> CreateWebhookBuilder<'a, S> {
    /// Subscribe to an event such as `taskCreated`.
    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.request.events.push(event.into());
        self
    }

    /// Subscribe to every event.
    pub fn all_events(mut self) -> Self {
        self.request.events = vec![ALL_EVENTS.to_string()];
        self
    }

    pub fn space(mut self, space_id: impl Into<String>) -> Self {
        self.request.space_id = Some(space_id.into());
        self
    }

    pub fn folder(mut self, folder_id: impl Into<String>) -> Self {
        self.request.folder_id = Some(folder_id.into());
        self
    }

    pub fn list(mut self, list_id: impl Into<String>) -> Self {
        self.request.list_id = Some(list_id.into());
        self
    }

    pub fn task(mut self, task_id: impl Into<String>) -> Self {
        self.request.task_id = Some(task_id.into());
        self
    }

    pub fn request(&self) -> &CreateWebhookRequest {
        &self.request
    }

    pub fn validate(&self) -> Result<()> {
        require_id("team_id", &self.team_id)?;
        self.request.validate()
    }

    pub async fn send(self) -> Result<Webhook> {
        self.validate()?;
        self.service
            .create_webhook(&self.team_id, &self.request)
            .await
    }
}

/// Builder for `PUT v2/webhook/{webhook_id}`.
pub struct UpdateWebhookBuilder<'a, S: ?Sized> {
    service: &'a S,
    webhook_id: String,
    request: UpdateWebhookRequest,
}

impl<'a, S: WebhooksService + ?Sized> UpdateWebhookBuilder<'a, S> {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.request.endpoint = Some(endpoint.into());
        self
    }

    /// Replace the subscribed events.
    pub fn events<I, T>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.request.events = events.into_iter().map(Into::into).collect();
        self
    }

    /// Reactivate a suspended webhook.
    pub fn activate(mut self) -> Self {
        self.request.status = Some("active".to_string());
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_id("webhook_id", &self.webhook_id)?;
        if self.request == UpdateWebhookRequest::default() {
            return Err(ClickUpError::validation("webhook", "no changes set"));
        }
        if let Some(endpoint) = &self.request.endpoint {
            crate::validation::require_text("endpoint", Some(endpoint.as_str()))?;
        }
        Ok(())
    }

    pub async fn send(self) -> Result<Webhook> {
        self.validate()?;
        self.service
            .update_webhook(&self.webhook_id, &self.request)
            .await
    }
}
