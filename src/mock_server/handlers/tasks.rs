//! Task endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{api_error, not_found};
use crate::mock_server::fixtures::Fixtures;
use crate::mock_server::state::{priority_info, SharedState, TaskChanges};
use crate::models::{Priority, Task};
use crate::pagination::TASK_PAGE_SIZE;

/// Query parameters for listing tasks.
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub include_closed: bool,
}

/// Response for listing tasks.
#[derive(Debug, Serialize)]
pub struct ListTasksResponse {
    pub tasks: Vec<Task>,
    pub last_page: bool,
}

/// Body of a task creation.
#[derive(Debug, Deserialize)]
pub struct NewTask {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub markdown_description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<u8>,
}

/// Body of a task update.
#[derive(Debug, Deserialize)]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<u8>,
}

fn parse_priority(value: Option<u8>) -> Result<Option<Priority>, Response> {
    match value {
        None => Ok(None),
        Some(n) => Priority::from_number(n).map(Some).ok_or_else(|| {
            api_error(StatusCode::BAD_REQUEST, "Priority invalid", "INPUT_007")
        }),
    }
}

/// GET /v2/list/{list_id}/task
pub async fn list_tasks(
    State(state): State<SharedState>,
    Path(list_id): Path<String>,
    Query(query): Query<ListTasksQuery>,
) -> Response {
    let state = state.read().await;
    if state.get_list(&list_id).is_none() {
        return not_found("List", &list_id);
    }

    let all = state.list_tasks(&list_id, query.include_closed);
    let start = (query.page as usize).saturating_mul(TASK_PAGE_SIZE);
    let end = (start + TASK_PAGE_SIZE).min(all.len());
    let tasks: Vec<Task> = if start < all.len() {
        all[start..end].iter().map(|t| (*t).clone()).collect()
    } else {
        vec![]
    };

    Json(ListTasksResponse {
        tasks,
        last_page: end >= all.len(),
    })
    .into_response()
}

/// POST /v2/list/{list_id}/task
pub async fn create_task(
    State(state): State<SharedState>,
    Path(list_id): Path<String>,
    Json(body): Json<NewTask>,
) -> Response {
    if body.name.trim().is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "Task name invalid", "INPUT_005");
    }
    let priority = match parse_priority(body.priority) {
        Ok(p) => p,
        Err(response) => return response,
    };

    let mut state = state.write().await;
    if state.get_list(&list_id).is_none() {
        return not_found("List", &list_id);
    }

    let id = state.next_id("new");
    let mut task = Fixtures::task(&id, &body.name, &list_id);
    task.date_created = Some(Utc::now());
    task.description = body.markdown_description.or(body.description);
    task.text_content = task.description.clone();
    if let Some(status) = body.status {
        task.status = Some(Fixtures::status(&status));
    }
    task.priority = priority.map(priority_info);

    state
        .tasks
        .entry(list_id)
        .or_default()
        .push(task.clone());
    (StatusCode::OK, Json(task)).into_response()
}

/// GET /v2/task/{task_id}
pub async fn get_task(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let state = state.read().await;
    match state.get_task(&id) {
        Some(task) => Json(task.clone()).into_response(),
        None => not_found("Task", &id),
    }
}

/// PUT /v2/task/{task_id}
pub async fn update_task(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(body): Json<TaskUpdate>,
) -> Response {
    let priority = match parse_priority(body.priority) {
        Ok(p) => p,
        Err(response) => return response,
    };
    if body.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return api_error(StatusCode::BAD_REQUEST, "Task name invalid", "INPUT_005");
    }

    let mut state = state.write().await;
    let changes = TaskChanges {
        name: body.name,
        description: body.description,
        status: body.status,
        priority,
    };
    match state.update_task(&id, changes) {
        Some(task) => Json(task.clone()).into_response(),
        None => not_found("Task", &id),
    }
}

/// DELETE /v2/task/{task_id}
pub async fn delete_task(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut state = state.write().await;
    if state.delete_task(&id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        not_found("Task", &id)
    }
}
