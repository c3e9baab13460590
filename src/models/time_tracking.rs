//! Time tracking models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{formats::Flexible, serde_as, DisplayFromStr, PickFirst, TimestampMilliSeconds};

use super::common::{Tag, User};
use super::task::TaskIdOptions;
use crate::query::{QueryPairs, ToQuery};

/// A time entry.
///
/// A running timer has no `end` and a negative `duration`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Entry id.
    #[serde(deserialize_with = "super::common::string_or_number")]
    pub id: String,

    /// The task the time was tracked against.
    #[serde(default)]
    pub task: Option<TimeEntryTask>,

    /// Workspace id.
    #[serde(default)]
    pub wid: Option<String>,

    /// Who tracked the time.
    pub user: User,

    #[serde(default)]
    pub billable: bool,

    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub start: Option<DateTime<Utc>>,

    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub end: Option<DateTime<Utc>>,

    /// Duration in milliseconds.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub duration: Option<i64>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Where the entry was created (`clickup`, `chrome`, ...).
    #[serde(default)]
    pub source: Option<String>,

    /// Last modification time.
    #[serde_as(as = "Option<TimestampMilliSeconds<String, Flexible>>")]
    pub at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub task_url: Option<String>,
}

impl TimeEntry {
    /// Whether this entry is a running timer.
    pub fn is_running(&self) -> bool {
        self.end.is_none() || self.duration.is_some_and(|d| d < 0)
    }
}

/// Task summary embedded in a time entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryTask {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub custom_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TimeEntriesResponse {
    pub data: Vec<TimeEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TimeEntryResponse {
    #[serde(default)]
    pub data: Option<TimeEntry>,
}

/// Filters for `GET v2/team/{team_id}/time_entries`.
///
/// Only one of the location filters (space, folder, list, task) may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeEntriesQuery {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// User ids; only workspace owners and admins may ask for others.
    pub assignees: Vec<i64>,
    pub include_task_tags: Option<bool>,
    pub include_location_names: Option<bool>,
    pub space_id: Option<String>,
    pub folder_id: Option<String>,
    pub list_id: Option<String>,
    pub task_id: Option<String>,
    pub id_options: TaskIdOptions,
    pub is_billable: Option<bool>,
}

impl TimeEntriesQuery {
    /// Check the date range and the location filter.
    pub fn validate(&self) -> crate::Result<()> {
        crate::validation::require_ordered("end_date", self.start_date, self.end_date)?;
        crate::validation::require_at_most_one(&[
            ("space_id", self.space_id.is_some()),
            ("folder_id", self.folder_id.is_some()),
            ("list_id", self.list_id.is_some()),
            ("task_id", self.task_id.is_some()),
        ])?;
        self.id_options.validate()
    }
}

impl ToQuery for TimeEntriesQuery {
    fn to_query(&self) -> QueryPairs {
        let mut q = QueryPairs::new();
        q.push_millis("start_date", self.start_date)
            .push_millis("end_date", self.end_date);
        if !self.assignees.is_empty() {
            let joined: Vec<String> = self.assignees.iter().map(i64::to_string).collect();
            q.push("assignee", joined.join(","));
        }
        q.push_opt("include_task_tags", self.include_task_tags)
            .push_opt("include_location_names", self.include_location_names)
            .push_opt("space_id", self.space_id.as_deref())
            .push_opt("folder_id", self.folder_id.as_deref())
            .push_opt("list_id", self.list_id.as_deref())
            .push_opt("task_id", self.task_id.as_deref())
            .push_opt("is_billable", self.is_billable);
        self.id_options.append(&mut q);
        q
    }
}

/// Tag reference in time entry requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagName {
    pub name: String,
}

/// Request body for `POST v2/team/{team_id}/time_entries`.
///
/// Exactly one of `duration` and `stop` should be given.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTimeEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagName>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub start: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<DateTime<Utc>>,
    /// Duration in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    /// User to track the time for (admins only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
    /// Task id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,
}

impl CreateTimeEntryRequest {
    /// Check the start/duration/stop combination.
    pub fn validate(&self) -> crate::Result<()> {
        crate::validation::require_some("start", self.start.as_ref())?;
        crate::validation::require_exactly_one(&[
            ("duration", self.duration.is_some()),
            ("stop", self.stop.is_some()),
        ])?;
        if let Some(duration) = self.duration {
            crate::validation::require_positive("duration", duration)?;
        }
        if self.stop.is_some() {
            crate::validation::require_ordered("stop", self.start, self.stop)?;
        }
        Ok(())
    }
}

/// Whether tags in an update are added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagAction {
    Add,
    Remove,
}

/// Request body for `PUT v2/team/{team_id}/time_entries/{timer_id}`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTimeEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_action: Option<TagAction>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

/// Request body for `POST v2/team/{team_id}/time_entries/start`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StartTimerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}
