//! User, workspace, space, folder, list and goal handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use super::{api_error, not_found};
use crate::mock_server::state::SharedState;

/// `?archived=` filter shared by container listings.
#[derive(Debug, Default, Deserialize)]
pub struct ArchivedQuery {
    #[serde(default)]
    pub archived: bool,
}

/// GET /v2/user
pub async fn get_user(State(state): State<SharedState>) -> Response {
    let state = state.read().await;
    match &state.user {
        Some(user) => Json(json!({ "user": user })).into_response(),
        None => api_error(StatusCode::UNAUTHORIZED, "Token invalid", "OAUTH_025"),
    }
}

/// GET /v2/team
pub async fn list_workspaces(State(state): State<SharedState>) -> Response {
    let state = state.read().await;
    Json(json!({ "teams": state.workspaces })).into_response()
}

/// GET /v2/team/{team_id}/space
pub async fn list_spaces(
    State(state): State<SharedState>,
    Path(team_id): Path<String>,
    Query(query): Query<ArchivedQuery>,
) -> Response {
    let state = state.read().await;
    let spaces: Vec<_> = state
        .spaces
        .get(&team_id)
        .into_iter()
        .flatten()
        .filter(|s| query.archived || !s.archived)
        .collect();
    Json(json!({ "spaces": spaces })).into_response()
}

/// GET /v2/space/{space_id}
pub async fn get_space(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let state = state.read().await;
    match state.get_space(&id) {
        Some(space) => Json(space.clone()).into_response(),
        None => not_found("Space", &id),
    }
}

/// GET /v2/space/{space_id}/folder
pub async fn list_folders(
    State(state): State<SharedState>,
    Path(space_id): Path<String>,
    Query(query): Query<ArchivedQuery>,
) -> Response {
    let state = state.read().await;
    let folders: Vec<_> = state
        .folders
        .get(&space_id)
        .into_iter()
        .flatten()
        .filter(|f| query.archived || !f.archived)
        .collect();
    Json(json!({ "folders": folders })).into_response()
}

/// GET /v2/folder/{folder_id}
pub async fn get_folder(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let state = state.read().await;
    match state.get_folder(&id) {
        Some(folder) => Json(folder.clone()).into_response(),
        None => not_found("Folder", &id),
    }
}

/// GET /v2/folder/{folder_id}/list
pub async fn list_lists(
    State(state): State<SharedState>,
    Path(folder_id): Path<String>,
    Query(query): Query<ArchivedQuery>,
) -> Response {
    let state = state.read().await;
    let lists: Vec<_> = state
        .lists
        .get(&folder_id)
        .into_iter()
        .flatten()
        .filter(|l| query.archived || !l.archived)
        .collect();
    Json(json!({ "lists": lists })).into_response()
}

/// GET /v2/list/{list_id}
pub async fn get_list(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let state = state.read().await;
    match state.get_list(&id) {
        Some(list) => Json(list.clone()).into_response(),
        None => not_found("List", &id),
    }
}

/// GET /v2/goal/{goal_id}
pub async fn get_goal(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let state = state.read().await;
    match state.get_goal(&id) {
        Some(goal) => Json(json!({ "goal": goal })).into_response(),
        None => not_found("Goal", &id),
    }
}
