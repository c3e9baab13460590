//! Mock ClickUp API server.
//!
//! Provides an axum-based HTTP server that simulates the ClickUp v2 API.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Router,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers::{self, api_error};
use super::state::{MockState, SharedState};

/// A mock ClickUp API server for testing.
///
/// The server runs in the background and can be used to test the ClickUp
/// client against a stateful API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: SharedState,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL when creating a `ClickUpClient` for testing.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    pub fn state(&self) -> SharedState {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new().with_user(scenario.user);

        for workspace in scenario.workspaces {
            state = state.with_workspace(workspace);
        }
        for (team_id, space) in scenario.spaces {
            state = state.with_space(&team_id, space);
        }
        for (space_id, folder) in scenario.folders {
            state = state.with_folder(&space_id, folder);
        }
        for (folder_id, list) in scenario.lists {
            state = state.with_list(&folder_id, list);
        }
        for (list_id, task) in scenario.tasks {
            state = state.with_task(&list_id, task);
        }
        for (task_id, comment) in scenario.comments {
            state = state.with_comment(&task_id, comment);
        }
        for (team_id, webhook) in scenario.webhooks {
            state = state.with_webhook(&team_id, webhook);
        }
        for goal in scenario.goals {
            state = state.with_goal(goal);
        }

        state
    }

    fn create_router(state: SharedState) -> Router {
        Router::new()
            .route("/v2/user", get(handlers::get_user))
            .route("/v2/team", get(handlers::list_workspaces))
            // Hierarchy
            .route("/v2/team/:team_id/space", get(handlers::list_spaces))
            .route("/v2/space/:space_id", get(handlers::get_space))
            .route("/v2/space/:space_id/folder", get(handlers::list_folders))
            .route("/v2/folder/:folder_id", get(handlers::get_folder))
            .route("/v2/folder/:folder_id/list", get(handlers::list_lists))
            .route("/v2/list/:list_id", get(handlers::get_list))
            // Tasks
            .route(
                "/v2/list/:list_id/task",
                get(handlers::list_tasks).post(handlers::create_task),
            )
            .route(
                "/v2/task/:task_id",
                get(handlers::get_task)
                    .put(handlers::update_task)
                    .delete(handlers::delete_task),
            )
            .route(
                "/v2/task/:task_id/comment",
                get(handlers::list_task_comments).post(handlers::create_task_comment),
            )
            // Workspace resources
            .route(
                "/v2/team/:team_id/webhook",
                get(handlers::list_webhooks).post(handlers::create_webhook),
            )
            .route("/v2/webhook/:webhook_id", delete(handlers::delete_webhook))
            .route("/v2/goal/:goal_id", get(handlers::get_goal))
            .route_layer(middleware::from_fn_with_state(state.clone(), gatekeeper))
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Enforces the configured token and rate limit before any API route.
async fn gatekeeper(State(state): State<SharedState>, request: Request, next: Next) -> Response {
    let (required_token, rate_limit_reset) = {
        let state = state.read().await;
        (state.required_token.clone(), state.rate_limit_reset)
    };

    if let Some(reset_at) = rate_limit_reset {
        let mut response = api_error(
            StatusCode::TOO_MANY_REQUESTS,
            "Rate limit reached",
            "APP_002",
        );
        if let Ok(value) = HeaderValue::from_str(&reset_at.to_string()) {
            response.headers_mut().insert("x-ratelimit-reset", value);
        }
        return response;
    }

    if let Some(expected) = required_token {
        let provided = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.strip_prefix("Bearer ").unwrap_or(v));
        if provided != Some(expected.as_str()) {
            return api_error(StatusCode::UNAUTHORIZED, "Token invalid", "OAUTH_025");
        }
    }

    next.run(request).await.into_response()
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClickUpClient;

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_get_task_with_client() {
        let server = MockServer::start().await;
        let client = ClickUpClient::new("pk_test", server.url()).unwrap();

        let task = client.tasks().get("t1").send().await.expect("Failed to get task");
        assert_eq!(task.name, "Task 1");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server() {
        let server = MockServer::start_empty().await;
        let client = ClickUpClient::new("pk_test", server.url()).unwrap();

        let err = client.tasks().get("t1").send().await.unwrap_err();
        assert_eq!(err.status_code(), Some(404));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_required_token() {
        let state = MockState::new()
            .with_required_token("pk_right")
            .with_user(Fixtures::user(1, "Ada"));
        let server = MockServer::with_state(state).await;

        let wrong = ClickUpClient::new("pk_wrong", server.url()).unwrap();
        let err = wrong.authorization().user().await.unwrap_err();
        assert!(matches!(err, crate::ClickUpError::Unauthorized { .. }));

        let right = ClickUpClient::new("pk_right", server.url()).unwrap();
        let user = right.authorization().user().await.unwrap();
        assert_eq!(user.id, 1);

        server.shutdown().await;
    }
}
