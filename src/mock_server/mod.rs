//! Mock ClickUp API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the ClickUp
//! v2 API for integration and end-to-end testing. Unlike wiremock which mocks
//! at the HTTP level per-test, this server maintains state across requests,
//! so created tasks and comments show up in later listings.
//!
//! # Example
//!
//! ```ignore
//! use clickapi::mock_server::MockServer;
//! use clickapi::ClickUpClient;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = ClickUpClient::new("pk_test", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let task = client.tasks().get("t1").send().await.unwrap();
//!     assert_eq!(task.name, "Task 1");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{
    DefaultScenario, Fixtures, COMMENTED_TASK_ID, DEFAULT_COMMENTS, DEFAULT_OPEN_TASKS, LIST_ID,
    WORKSPACE_ID,
};
pub use server::MockServer;
pub use state::{MockState, SharedState, TaskChanges};
