//! View models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{formats::Flexible, serde_as, TimestampMilliSeconds};

use super::task::Task;

/// Page size of `GET v2/view/{view_id}/task`.
pub const VIEW_TASK_PAGE_SIZE: usize = 30;

/// Where a view lives.
///
/// Workspace-level ("Everything") views hang off the team.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewParent {
    Team(String),
    Space(String),
    Folder(String),
    List(String),
}

impl ViewParent {
    /// The parent id.
    pub fn id(&self) -> &str {
        match self {
            ViewParent::Team(id)
            | ViewParent::Space(id)
            | ViewParent::Folder(id)
            | ViewParent::List(id) => id,
        }
    }

    /// Path segment naming the parent kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ViewParent::Team(_) => "team",
            ViewParent::Space(_) => "space",
            ViewParent::Folder(_) => "folder",
            ViewParent::List(_) => "list",
        }
    }

    /// Numeric parent type used in view payloads.
    pub fn type_code(&self) -> i32 {
        match self {
            ViewParent::Team(_) => 7,
            ViewParent::Space(_) => 4,
            ViewParent::Folder(_) => 5,
            ViewParent::List(_) => 6,
        }
    }
}

/// A saved view (list, board, calendar, ...).
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub id: String,
    pub name: String,
    /// View type (`list`, `board`, `calendar`, `gantt`, `doc`, `chat`, ...).
    #[serde(rename = "type")]
    pub view_type: String,
    #[serde(default)]
    pub parent: Option<ViewParentRef>,
    #[serde(default)]
    pub protected: Option<bool>,
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub creator: Option<i64>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub grouping: Option<serde_json::Value>,
    #[serde(default)]
    pub divide: Option<serde_json::Value>,
    #[serde(default)]
    pub sorting: Option<serde_json::Value>,
    #[serde(default)]
    pub filters: Option<serde_json::Value>,
    #[serde(default)]
    pub columns: Option<serde_json::Value>,
    #[serde(default)]
    pub settings: Option<serde_json::Value>,
}

/// Parent reference embedded in a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewParentRef {
    #[serde(deserialize_with = "super::common::string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub parent_type: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ViewsResponse {
    pub views: Vec<View>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ViewResponse {
    pub view: View,
}

/// Request body for creating a view.
///
/// The grouping, sorting, filter and column payloads follow the API's
/// nested formats and are passed through as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateViewRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub view_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divide: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_sidebar: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,
}

/// Request body for `PUT v2/view/{view_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateViewRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub view_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ViewParentRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divide: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ViewTasksResponse {
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub last_page: Option<bool>,
}
