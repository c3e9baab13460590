//! List models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{formats::Flexible, serde_as, TimestampMilliSeconds};

use super::common::{ContainerRef, Priority, PriorityInfo, Status, User};

/// A list: the container tasks live in.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// List id.
    #[serde(deserialize_with = "super::common::string_or_number")]
    pub id: String,

    /// List name.
    pub name: String,

    /// Position within the folder or space.
    #[serde(default)]
    pub orderindex: Option<i64>,

    /// Plain description.
    #[serde(default)]
    pub content: Option<String>,

    /// List colour/status.
    #[serde(default)]
    pub status: Option<ListStatus>,

    /// List priority.
    #[serde(default)]
    pub priority: Option<PriorityInfo>,

    /// List owner.
    #[serde(default)]
    pub assignee: Option<User>,

    /// Number of tasks.
    #[serde(default)]
    pub task_count: Option<i64>,

    /// Due date.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub due_date: Option<DateTime<Utc>>,

    /// Start date.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub start_date: Option<DateTime<Utc>>,

    /// Parent folder; folderless lists report a hidden folder.
    #[serde(default)]
    pub folder: Option<ContainerRef>,

    /// Parent space.
    #[serde(default)]
    pub space: Option<ContainerRef>,

    /// Whether the list is archived.
    #[serde(default)]
    pub archived: bool,

    /// Whether the list overrides the parent's statuses.
    #[serde(default)]
    pub override_statuses: Option<bool>,

    /// Task statuses available in the list.
    #[serde(default)]
    pub statuses: Vec<Status>,

    /// Permission level of the token's user.
    #[serde(default)]
    pub permission_level: Option<String>,
}

/// The colour-coded status of a list itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListStatus {
    pub status: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub hide_label: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListsResponse {
    pub lists: Vec<List>,
}

/// Request body for creating a list in a folder or space.
///
/// `content` and `markdown_content` are alternatives; set at most one.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateListRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_content: Option<String>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Owner user id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
    /// List colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Request body for `PUT v2/list/{list_id}`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_content: Option<String>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// New owner; use `unset_status` to clear the colour instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unset_status: Option<bool>,
}
