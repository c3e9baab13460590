//! ClickUp API client library.
//!
//! A Rust library for the ClickUp REST API. Each resource group
//! (tasks, lists, comments, goals, ...) is a service trait implemented by
//! [`ClickUpClient`], and a fluent layer on top builds, validates and sends
//! requests.
//!
//! # Quick Start
//!
//! ```no_run
//! use clickapi::{ClickUpClient, Priority};
//! use futures::TryStreamExt;
//!
//! #[tokio::main]
//! async fn main() -> clickapi::Result<()> {
//!     // Create client from environment variables
//!     let client = ClickUpClient::from_env()?;
//!
//!     // Create a task
//!     let task = client
//!         .tasks()
//!         .create("901")
//!         .name("Write release notes")
//!         .priority(Priority::High)
//!         .send()
//!         .await?;
//!     println!("Created {}", task.id);
//!
//!     // Stream every open task in the list, 100 per request
//!     let tasks: Vec<_> = client.tasks().list("901").stream().try_collect().await?;
//!     println!("Found {} tasks", tasks.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`services`] - one `async_trait` per resource group, mapping a call to
//!   exactly one HTTP request
//! - [`fluent`] - builders over the services with local validation and
//!   lazy [`paginate_pages`] / [`paginate_cursor`] streams
//! - [`models`] - request and response types
//!
//! Code that only needs a few endpoints can depend on the service traits
//! and substitute a fake implementation in tests.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `CLICKUP_API_TOKEN` (required) - a personal token (`pk_...`) or an
//!   OAuth access token
//! - `CLICKUP_API_URL` (optional) - Base URL (defaults to `https://api.clickup.com/api`)

mod client;
mod error;
mod pagination;
mod query;
mod validation;

pub mod cli;
pub mod fluent;
pub mod models;
pub mod output;
pub mod services;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{ClickUpClient, DEFAULT_API_URL};
pub use error::{ClickUpError, Result};
pub use pagination::{
    collect_all, paginate_cursor, paginate_pages, CursorPage, Page, MAX_PAGES, TASK_PAGE_SIZE,
};
pub use query::{QueryPairs, ToQuery};

// Re-export models and services
pub use models::*;
pub use services::*;

pub use output::PrettyPrint;
