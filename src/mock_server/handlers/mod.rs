//! HTTP request handlers for the mock server.

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};

pub mod comments;
pub mod hierarchy;
pub mod tasks;
pub mod webhooks;

pub use comments::*;
pub use hierarchy::*;
pub use tasks::*;
pub use webhooks::*;

/// An error body in the API's `{"err": ..., "ECODE": ...}` shape.
pub fn api_error(status: StatusCode, message: &str, code: &str) -> Response {
    (
        status,
        Json(serde_json::json!({"err": message, "ECODE": code})),
    )
        .into_response()
}

pub(crate) fn not_found(what: &str, id: &str) -> Response {
    api_error(
        StatusCode::NOT_FOUND,
        &format!("{what} not found: {id}"),
        "ITEM_015",
    )
}
