//! E2E tests using the mock ClickUp server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use clickapi::mock_server::{
    Fixtures, MockServer, MockState, COMMENTED_TASK_ID, DEFAULT_COMMENTS, DEFAULT_OPEN_TASKS,
    LIST_ID, WORKSPACE_ID,
};
use clickapi::{ClickUpClient, ClickUpError, Priority};
use futures::TryStreamExt;

fn client_for(server: &MockServer) -> ClickUpClient {
    ClickUpClient::new("pk_test", server.url()).unwrap()
}

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    let client = reqwest::Client::new();
    let result = client.get(format!("{}/health", url)).send().await;

    assert!(result.is_err());
}

// =============================================================================
// Hierarchy Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_walk_workspace_hierarchy() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let workspaces = client.authorization().workspaces().await.unwrap();
    assert_eq!(workspaces[0].id, WORKSPACE_ID);

    let spaces = client.spaces().list(WORKSPACE_ID, false).await.unwrap();
    let space = &spaces[0];
    assert_eq!(space.name, "Engineering");

    let folders = client.folders().list(&space.id, false).await.unwrap();
    let folder = &folders[0];

    let lists = client.lists().in_folder(&folder.id, false).await.unwrap();
    assert!(lists.iter().any(|l| l.id == LIST_ID));

    server.shutdown().await;
}

// =============================================================================
// Task Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_stream_all_open_tasks_across_pages() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let first = client.tasks().list(LIST_ID).send().await.unwrap();
    assert_eq!(first.items.len(), 100);
    assert!(first.has_more);

    let tasks: Vec<_> = client.tasks().list(LIST_ID).stream().try_collect().await.unwrap();
    assert_eq!(tasks.len(), DEFAULT_OPEN_TASKS);
    assert!(tasks.iter().all(|t| t.id != "t-done"));

    let with_closed: Vec<_> = client
        .tasks()
        .list(LIST_ID)
        .include_closed(true)
        .stream()
        .try_collect()
        .await
        .unwrap();
    assert_eq!(with_closed.len(), DEFAULT_OPEN_TASKS + 1);

    server.shutdown().await;
}

#[tokio::test]
async fn test_create_then_get_task() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let created = client
        .tasks()
        .create(LIST_ID)
        .name("Write release notes")
        .priority(Priority::High)
        .send()
        .await
        .expect("Failed to create task");
    assert_eq!(created.priority_level(), Some(Priority::High));

    let fetched = client.tasks().get(created.id.clone()).send().await.unwrap();
    assert_eq!(fetched.name, "Write release notes");

    server.shutdown().await;
}

#[tokio::test]
async fn test_update_task_status_and_name() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let updated = client
        .tasks()
        .update("t2")
        .name("Renamed")
        .status("in progress")
        .send()
        .await
        .expect("Failed to update task");

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.status_name(), Some("in progress"));

    let state = server.state();
    let state = state.read().await;
    assert_eq!(state.get_task("t2").unwrap().name, "Renamed");
    drop(state);

    server.shutdown().await;
}

#[tokio::test]
async fn test_delete_task_then_get_is_not_found() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    client.tasks().delete("t3").send().await.unwrap();
    let err = client.tasks().get("t3").send().await.unwrap_err();

    assert!(matches!(err, ClickUpError::NotFound { .. }));

    server.shutdown().await;
}

#[tokio::test]
async fn test_create_task_rejected_by_server() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .tasks()
        .create("no-such-list")
        .name("Lost")
        .send()
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.error_code(), Some("ITEM_015"));

    server.shutdown().await;
}

// =============================================================================
// Comment Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_stream_comments_then_add_one() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let thread = client.comments().on_task(COMMENTED_TASK_ID);

    let comments: Vec<_> = thread.stream().try_collect().await.unwrap();
    assert_eq!(comments.len(), DEFAULT_COMMENTS);
    let dates: Vec<_> = comments.iter().map(|c| c.date).collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]), "newest first");

    thread.create().text("Ship it").send().await.unwrap();

    let newest = thread.page(None).await.unwrap();
    assert_eq!(newest.items[0].comment_text, "Ship it");

    server.shutdown().await;
}

// =============================================================================
// Webhook Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_webhook_lifecycle() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let seeded = client.webhooks().list(WORKSPACE_ID).await.unwrap();
    let before = seeded.len();

    let webhook = client
        .webhooks()
        .create(WORKSPACE_ID, "https://hooks.example.com/clickup")
        .event("taskCreated")
        .send()
        .await
        .unwrap();
    assert_eq!(webhook.events, vec!["taskCreated"]);
    assert!(webhook.secret.is_some());
    assert!(seeded.iter().all(|w| w.id != webhook.id));

    let listed = client.webhooks().list(WORKSPACE_ID).await.unwrap();
    assert_eq!(listed.len(), before + 1);

    client.webhooks().delete(&webhook.id).await.unwrap();
    let after = client.webhooks().list(WORKSPACE_ID).await.unwrap();
    assert_eq!(after, seeded);

    server.shutdown().await;
}

// =============================================================================
// Gatekeeping Tests
// =============================================================================

#[tokio::test]
async fn test_wrong_token_is_unauthorized() {
    let state = MockState::new()
        .with_user(Fixtures::user(1, "Grace"))
        .with_required_token("pk_right");
    let server = MockServer::with_state(state).await;

    let wrong = ClickUpClient::new("pk_wrong", server.url()).unwrap();
    let err = wrong.authorization().user().await.unwrap_err();
    assert!(matches!(err, ClickUpError::Unauthorized { .. }));

    let right = ClickUpClient::new("pk_right", server.url()).unwrap();
    let user = right.authorization().user().await.unwrap();
    assert_eq!(user.display_name(), "Grace");

    server.shutdown().await;
}

#[tokio::test]
async fn test_rate_limit_reports_reset_time() {
    let server = MockServer::with_state(MockState::new().with_rate_limit(1_704_067_260)).await;
    let client = client_for(&server);

    let err = client.spaces().get("790").await.unwrap_err();
    match err {
        ClickUpError::RateLimited { reset_at } => assert_eq!(reset_at, Some(1_704_067_260)),
        other => panic!("expected RateLimited, got {other:?}"),
    }

    server.shutdown().await;
}
