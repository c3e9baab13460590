//! Task models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{formats::Flexible, serde_as, TimestampMilliSeconds};

use super::checklist::Checklist;
use super::common::{ContainerRef, Priority, PriorityInfo, Status, Tag, User};
use super::custom_field::CustomField;
use crate::query::{QueryPairs, ToQuery};

/// A ClickUp task.
///
/// Tasks live in exactly one home list and may appear in others. Most fields
/// are optional because the API omits them depending on the endpoint and
/// the workspace's enabled features.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task id (e.g., "86a1b2c3d").
    pub id: String,

    /// Custom task id, when the workspace has them enabled.
    #[serde(default)]
    pub custom_id: Option<String>,

    /// Custom task type id (0 = regular task).
    #[serde(default)]
    pub custom_item_id: Option<i64>,

    /// Task name.
    pub name: String,

    /// Plain-text rendering of the description.
    #[serde(default)]
    pub text_content: Option<String>,

    /// Description.
    #[serde(default)]
    pub description: Option<String>,

    /// Markdown description (only when requested).
    #[serde(default)]
    pub markdown_description: Option<String>,

    /// Current status.
    #[serde(default)]
    pub status: Option<Status>,

    /// Ordering key within the list.
    #[serde(default)]
    pub orderindex: Option<String>,

    /// When the task was created.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date_created: Option<DateTime<Utc>>,

    /// When the task was last updated.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date_updated: Option<DateTime<Utc>>,

    /// When the task was closed.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date_closed: Option<DateTime<Utc>>,

    /// When the task was marked done.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub date_done: Option<DateTime<Utc>>,

    /// Whether the task is archived.
    #[serde(default)]
    pub archived: bool,

    /// Task creator.
    #[serde(default)]
    pub creator: Option<User>,

    /// Assigned users.
    #[serde(default)]
    pub assignees: Vec<User>,

    /// Watchers.
    #[serde(default)]
    pub watchers: Vec<User>,

    /// Checklists on the task.
    #[serde(default)]
    pub checklists: Vec<Checklist>,

    /// Tags.
    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Parent task id for subtasks.
    #[serde(default)]
    pub parent: Option<String>,

    /// Top-level ancestor for nested subtasks.
    #[serde(default)]
    pub top_level_parent: Option<String>,

    /// Priority.
    #[serde(default)]
    pub priority: Option<PriorityInfo>,

    /// Due date.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub due_date: Option<DateTime<Utc>>,

    /// Start date.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub start_date: Option<DateTime<Utc>>,

    /// Sprint points.
    #[serde(default)]
    pub points: Option<f64>,

    /// Time estimate in milliseconds.
    #[serde(default)]
    pub time_estimate: Option<i64>,

    /// Tracked time in milliseconds.
    #[serde(default)]
    pub time_spent: Option<i64>,

    /// Custom field values.
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,

    /// Dependencies on or from other tasks.
    #[serde(default)]
    pub dependencies: Vec<TaskDependency>,

    /// Linked tasks.
    #[serde(default)]
    pub linked_tasks: Vec<TaskLink>,

    /// Workspace id.
    #[serde(default)]
    pub team_id: Option<String>,

    /// URL of the task in the ClickUp app.
    #[serde(default)]
    pub url: Option<String>,

    /// Permission level of the token's user on this task.
    #[serde(default)]
    pub permission_level: Option<String>,

    /// Home list.
    #[serde(default)]
    pub list: Option<ContainerRef>,

    /// Folder (called `project` by the API).
    #[serde(default, rename = "project")]
    pub folder: Option<ContainerRef>,

    /// Space.
    #[serde(default)]
    pub space: Option<ContainerRef>,

    /// Subtasks (only when requested).
    #[serde(default)]
    pub subtasks: Option<Vec<Task>>,
}

impl Task {
    /// Current status name, if any.
    pub fn status_name(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.status.as_str())
    }

    /// Whether the task's status is a closed/done status.
    pub fn is_closed(&self) -> bool {
        self.status.as_ref().is_some_and(Status::is_closed)
    }

    /// Parsed priority level, if set.
    pub fn priority_level(&self) -> Option<Priority> {
        self.priority
            .as_ref()
            .and_then(|p| p.id.as_deref())
            .and_then(|id| id.parse::<u8>().ok())
            .and_then(Priority::from_number)
    }

    /// Whether the task is a subtask.
    pub fn is_subtask(&self) -> bool {
        self.parent.is_some()
    }

    /// Whether the due date has passed at `now` and the task is still open.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.is_closed() && self.due_date.is_some_and(|due| due < now)
    }

    /// Home list id, if returned.
    pub fn list_id(&self) -> Option<&str> {
        self.list.as_ref().map(|l| l.id.as_str())
    }
}

/// A dependency edge between two tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDependency {
    /// The task holding the dependency.
    pub task_id: String,

    /// The task it waits on.
    pub depends_on: String,

    /// Dependency type (0 = waiting on, 1 = blocking).
    #[serde(default, rename = "type")]
    pub dependency_type: Option<i32>,

    /// User id of the creator.
    #[serde(default, deserialize_with = "super::common::opt_string_or_number")]
    pub userid: Option<String>,
}

/// A link between two tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskLink {
    /// Source task.
    pub task_id: String,

    /// Linked task.
    pub link_id: String,

    /// User id of the creator.
    #[serde(default, deserialize_with = "super::common::opt_string_or_number")]
    pub userid: Option<String>,
}

/// A custom field value set while creating a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskCustomFieldInput {
    /// Custom field id.
    pub id: String,
    /// Field value; its JSON shape depends on the field type.
    pub value: serde_json::Value,
}

/// Request body for `POST v2/list/{list_id}/task`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTaskRequest {
    /// Task name (required).
    pub name: String,

    /// Plain description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Markdown description; takes precedence over `description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_description: Option<String>,

    /// Assignee user ids.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<i64>,

    /// Assigned user group ids.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_assignees: Vec<String>,

    /// Tag names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Initial status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Due date.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,

    /// Whether the due date carries a time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,

    /// Time estimate in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<i64>,

    /// Start date.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    /// Whether the start date carries a time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<bool>,

    /// Sprint points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,

    /// Notify every assignee and watcher, including the creator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_all: Option<bool>,

    /// Parent task id, to create a subtask.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Task id to link the new task to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links_to: Option<String>,

    /// Reject the request when required custom fields are missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_required_custom_fields: Option<bool>,

    /// Custom field values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<TaskCustomFieldInput>,

    /// Custom task type id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_item_id: Option<i64>,
}

/// Add/remove delta used for assignees, group assignees and watchers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemberDelta<T> {
    /// Members to add.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add: Vec<T>,
    /// Members to remove.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rem: Vec<T>,
}

impl<T> MemberDelta<T> {
    /// Whether the delta changes nothing.
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.rem.is_empty()
    }
}

/// Request body for `PUT v2/task/{task_id}`.
///
/// Date fields are tri-state: `None` leaves the value alone, `Some(None)`
/// clears it, `Some(Some(d))` sets it.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTaskRequest {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New plain description. An empty string clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New markdown description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_content: Option<String>,

    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// New priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// New due date.
    #[serde_as(as = "Option<Option<TimestampMilliSeconds<i64>>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<DateTime<Utc>>>,

    /// Whether the due date carries a time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,

    /// New start date.
    #[serde_as(as = "Option<Option<TimestampMilliSeconds<i64>>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Option<DateTime<Utc>>>,

    /// Whether the start date carries a time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<bool>,

    /// New parent task (moves a subtask).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// New time estimate in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<i64>,

    /// New sprint points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,

    /// Archive or unarchive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,

    /// Assignee changes.
    #[serde(skip_serializing_if = "MemberDelta::is_empty")]
    pub assignees: MemberDelta<i64>,

    /// Group assignee changes.
    #[serde(skip_serializing_if = "MemberDelta::is_empty")]
    pub group_assignees: MemberDelta<String>,

    /// Watcher changes.
    #[serde(skip_serializing_if = "MemberDelta::is_empty")]
    pub watchers: MemberDelta<i64>,

    /// Custom task type id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_item_id: Option<i64>,
}

impl UpdateTaskRequest {
    /// Whether the request would change anything.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Options for addressing a task by its custom id.
///
/// When `custom_task_ids` is set, `team_id` must be provided too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskIdOptions {
    /// Interpret the task id as a custom task id.
    pub custom_task_ids: bool,
    /// Workspace id, required with custom task ids.
    pub team_id: Option<String>,
}

impl TaskIdOptions {
    /// Address tasks by custom id within a workspace.
    pub fn custom(team_id: impl Into<String>) -> Self {
        Self {
            custom_task_ids: true,
            team_id: Some(team_id.into()),
        }
    }

    pub(crate) fn append(&self, q: &mut QueryPairs) {
        if self.custom_task_ids {
            q.push("custom_task_ids", true);
            q.push_opt("team_id", self.team_id.as_deref());
        }
    }

    /// Check the custom id pairing.
    pub fn validate(&self) -> crate::Result<()> {
        if self.custom_task_ids {
            crate::validation::require_text("team_id", self.team_id.as_deref())?;
        }
        Ok(())
    }
}

impl ToQuery for TaskIdOptions {
    fn to_query(&self) -> QueryPairs {
        let mut q = QueryPairs::new();
        self.append(&mut q);
        q
    }
}

/// Query for `GET v2/task/{task_id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTaskQuery {
    /// Custom id addressing.
    pub id_options: TaskIdOptions,
    /// Include subtasks in the response.
    pub include_subtasks: Option<bool>,
    /// Include `markdown_description`.
    pub include_markdown_description: Option<bool>,
}

impl ToQuery for GetTaskQuery {
    fn to_query(&self) -> QueryPairs {
        let mut q = QueryPairs::new();
        self.id_options.append(&mut q);
        q.push_opt("include_subtasks", self.include_subtasks)
            .push_opt(
                "include_markdown_description",
                self.include_markdown_description,
            );
        q
    }
}

/// Sort keys accepted by task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOrderBy {
    Id,
    Created,
    Updated,
    DueDate,
}

impl TaskOrderBy {
    fn as_str(self) -> &'static str {
        match self {
            TaskOrderBy::Id => "id",
            TaskOrderBy::Created => "created",
            TaskOrderBy::Updated => "updated",
            TaskOrderBy::DueDate => "due_date",
        }
    }
}

/// Filters for list and workspace task listings.
///
/// The location filters (`space_ids`, `folder_ids`, `list_ids`) only apply
/// to the workspace-wide listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskQuery {
    pub archived: Option<bool>,
    pub include_markdown_description: Option<bool>,
    pub order_by: Option<TaskOrderBy>,
    pub reverse: Option<bool>,
    pub subtasks: Option<bool>,
    pub statuses: Vec<String>,
    pub include_closed: Option<bool>,
    pub assignees: Vec<i64>,
    pub watchers: Vec<i64>,
    pub tags: Vec<String>,
    pub due_date_gt: Option<DateTime<Utc>>,
    pub due_date_lt: Option<DateTime<Utc>>,
    pub date_created_gt: Option<DateTime<Utc>>,
    pub date_created_lt: Option<DateTime<Utc>>,
    pub date_updated_gt: Option<DateTime<Utc>>,
    pub date_updated_lt: Option<DateTime<Utc>>,
    pub date_done_gt: Option<DateTime<Utc>>,
    pub date_done_lt: Option<DateTime<Utc>>,
    pub custom_fields: Vec<CustomFieldFilter>,
    pub custom_items: Vec<i64>,
    pub space_ids: Vec<String>,
    pub folder_ids: Vec<String>,
    pub list_ids: Vec<String>,
    pub parent: Option<String>,
}

impl TaskQuery {
    /// Query pairs for a given page.
    pub fn to_query_for_page(&self, page: u32) -> QueryPairs {
        let mut q = self.to_query();
        q.push("page", page);
        q
    }
}

impl ToQuery for TaskQuery {
    fn to_query(&self) -> QueryPairs {
        let mut q = QueryPairs::new();
        q.push_opt("archived", self.archived)
            .push_opt(
                "include_markdown_description",
                self.include_markdown_description,
            )
            .push_opt("order_by", self.order_by.map(TaskOrderBy::as_str))
            .push_opt("reverse", self.reverse)
            .push_opt("subtasks", self.subtasks)
            .push_array("statuses", &self.statuses)
            .push_opt("include_closed", self.include_closed)
            .push_array("assignees", &self.assignees)
            .push_array("watchers", &self.watchers)
            .push_array("tags", &self.tags)
            .push_millis("due_date_gt", self.due_date_gt)
            .push_millis("due_date_lt", self.due_date_lt)
            .push_millis("date_created_gt", self.date_created_gt)
            .push_millis("date_created_lt", self.date_created_lt)
            .push_millis("date_updated_gt", self.date_updated_gt)
            .push_millis("date_updated_lt", self.date_updated_lt)
            .push_millis("date_done_gt", self.date_done_gt)
            .push_millis("date_done_lt", self.date_done_lt)
            .push_array("custom_items", &self.custom_items)
            .push_array("space_ids", &self.space_ids)
            .push_array("project_ids", &self.folder_ids)
            .push_array("list_ids", &self.list_ids)
            .push_opt("parent", self.parent.as_deref());
        if !self.custom_fields.is_empty() {
            // The API takes the filter list as one JSON-encoded parameter.
            if let Ok(encoded) = serde_json::to_string(&self.custom_fields) {
                q.push("custom_fields", encoded);
            }
        }
        q
    }
}

/// A custom field filter for task listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomFieldFilter {
    /// Custom field id.
    pub field_id: String,
    /// Comparison operator (`=`, `<`, `>`, `!=`, `IS NULL`, `RANGE`, ...).
    pub operator: String,
    /// Value to compare against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

/// API response wrapper for task listings.
#[derive(Debug, Deserialize)]
pub(crate) struct TaskListResponse {
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub last_page: Option<bool>,
}

/// Time spent in a single status.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusTime {
    /// Status name.
    pub status: String,

    /// Status colour.
    #[serde(default)]
    pub color: Option<String>,

    /// Status type.
    #[serde(default, rename = "type")]
    pub status_type: Option<String>,

    /// Time accumulated in the status.
    pub total_time: TotalTime,

    /// Position in the history.
    #[serde(default)]
    pub orderindex: Option<i64>,
}

/// Accumulated time in a status.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalTime {
    /// Minutes spent.
    pub by_minute: i64,

    /// When the task entered the status.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub since: Option<DateTime<Utc>>,
}

/// Response of `GET v2/task/{task_id}/time_in_status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskTimeInStatus {
    /// The status the task is in now.
    #[serde(default)]
    pub current_status: Option<StatusTime>,

    /// Previous statuses, oldest first.
    #[serde(default)]
    pub status_history: Vec<StatusTime>,
}

/// Response of the bulk time-in-status endpoint, keyed by task id.
pub type BulkTimeInStatus = HashMap<String, TaskTimeInStatus>;

/// Request body for `POST v2/task/{task_id}/merge`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeTasksRequest {
    /// Tasks merged into the target; they are deleted afterwards.
    pub source_task_ids: Vec<String>,
}
