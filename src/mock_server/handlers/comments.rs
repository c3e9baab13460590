//! Task comment handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::{api_error, not_found};
use crate::mock_server::fixtures::Fixtures;
use crate::mock_server::state::SharedState;
use crate::models::{Comment, COMMENT_PAGE_SIZE};

/// Cursor for older comments: the oldest comment already seen.
#[derive(Debug, Default, Deserialize)]
pub struct CommentsQuery {
    pub start: Option<i64>,
    pub start_id: Option<String>,
}

/// Body of a comment creation.
#[derive(Debug, Deserialize)]
pub struct NewComment {
    #[serde(default)]
    pub comment_text: String,
}

/// GET /v2/task/{task_id}/comment
pub async fn list_task_comments(
    State(state): State<SharedState>,
    Path(task_id): Path<String>,
    Query(query): Query<CommentsQuery>,
) -> Response {
    let state = state.read().await;
    if state.get_task(&task_id).is_none() {
        return not_found("Task", &task_id);
    }

    let newest_first = state.task_comments(&task_id);
    let after_cursor: Vec<&Comment> = match (&query.start_id, query.start) {
        (Some(start_id), _) => match newest_first.iter().position(|c| &c.id == start_id) {
            Some(pos) => newest_first[pos + 1..].to_vec(),
            None => vec![],
        },
        (None, Some(start)) => newest_first
            .into_iter()
            .filter(|c| c.date.is_some_and(|d| d.timestamp_millis() < start))
            .collect(),
        (None, None) => newest_first,
    };

    let comments: Vec<Comment> = after_cursor
        .into_iter()
        .take(COMMENT_PAGE_SIZE)
        .cloned()
        .collect();
    Json(json!({ "comments": comments })).into_response()
}

/// POST /v2/task/{task_id}/comment
pub async fn create_task_comment(
    State(state): State<SharedState>,
    Path(task_id): Path<String>,
    Json(body): Json<NewComment>,
) -> Response {
    if body.comment_text.trim().is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "Comment text invalid", "INPUT_012");
    }

    let mut state = state.write().await;
    if state.get_task(&task_id).is_none() {
        return not_found("Task", &task_id);
    }

    let author = state
        .user
        .clone()
        .unwrap_or_else(|| Fixtures::user(0, "mock"));
    let id = state.next_id("9");
    let now = Utc::now();
    let mut comment = Fixtures::comment(&id, &body.comment_text, &author, 0);
    comment.date = Some(now);
    state
        .comments
        .entry(task_id)
        .or_default()
        .push(comment);

    Json(json!({
        "id": id,
        "hist_id": format!("hist-{id}"),
        "date": now.timestamp_millis(),
    }))
    .into_response()
}
