//! Webhook handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use super::{api_error, not_found};
use crate::mock_server::fixtures::Fixtures;
use crate::mock_server::state::SharedState;

/// Body of a webhook registration.
#[derive(Debug, Deserialize)]
pub struct NewWebhook {
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub events: Vec<String>,
    pub space_id: Option<String>,
    pub folder_id: Option<String>,
    pub list_id: Option<String>,
    pub task_id: Option<String>,
}

/// GET /v2/team/{team_id}/webhook
pub async fn list_webhooks(
    State(state): State<SharedState>,
    Path(team_id): Path<String>,
) -> Response {
    let state = state.read().await;
    let webhooks = state.webhooks.get(&team_id).cloned().unwrap_or_default();
    Json(json!({ "webhooks": webhooks })).into_response()
}

/// POST /v2/team/{team_id}/webhook
pub async fn create_webhook(
    State(state): State<SharedState>,
    Path(team_id): Path<String>,
    Json(body): Json<NewWebhook>,
) -> Response {
    if !body.endpoint.starts_with("http") {
        return api_error(StatusCode::BAD_REQUEST, "Endpoint invalid", "WH_001");
    }

    let mut state = state.write().await;
    let id = state.next_id("wh-");
    let mut webhook = Fixtures::webhook(&id, &body.endpoint, &team_id);
    if !body.events.is_empty() {
        webhook.events = body.events;
    }
    webhook.space_id = body.space_id;
    webhook.folder_id = body.folder_id;
    webhook.list_id = body.list_id;
    webhook.task_id = body.task_id;
    webhook.secret = Some(format!("secret-{id}"));

    state
        .webhooks
        .entry(team_id)
        .or_default()
        .push(webhook.clone());
    Json(json!({ "id": id, "webhook": webhook })).into_response()
}

/// DELETE /v2/webhook/{webhook_id}
pub async fn delete_webhook(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut state = state.write().await;
    if state.delete_webhook(&id) {
        Json(json!({})).into_response()
    } else {
        not_found("Webhook", &id)
    }
}
