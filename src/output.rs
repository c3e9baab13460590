//! Output formatting for CLI display.
//!
//! [`PrettyPrint`] renders a single resource as aligned key/value lines;
//! the `*Row` types render collections as `tabled` tables. Both are
//! alternatives to the `--json` output.

use chrono::{DateTime, Utc};
use tabled::Tabled;

use crate::models::{Comment, Folder, Goal, List, Space, Task, Webhook};

/// Trait for human-readable key-value output.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

fn timestamp(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}

fn header(kind: &str, title: &str) -> Vec<String> {
    let header = format!("{kind}: {title}");
    let divider = "─".repeat(header.chars().count().max(30));
    vec![header, divider]
}

fn field(lines: &mut Vec<String>, label: &str, value: impl std::fmt::Display) {
    lines.push(format!("{:<15} {}", format!("{label}:"), value));
}

impl PrettyPrint for Task {
    fn pretty_print(&self) -> String {
        let mut lines = header("Task", &self.name);
        field(&mut lines, "ID", &self.id);
        if let Some(custom_id) = &self.custom_id {
            field(&mut lines, "Custom ID", custom_id);
        }
        if let Some(status) = self.status_name() {
            field(&mut lines, "Status", status);
        }
        if let Some(priority) = self.priority_level() {
            field(&mut lines, "Priority", priority);
        }
        if !self.assignees.is_empty() {
            let names: Vec<String> = self.assignees.iter().map(|u| u.display_name()).collect();
            field(&mut lines, "Assignees", names.join(", "));
        }
        if let Some(due) = &self.due_date {
            field(&mut lines, "Due", timestamp(due));
        }
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(|t| t.name.as_str()).collect();
            field(&mut lines, "Tags", tags.join(", "));
        }
        if let Some(list) = &self.list {
            field(&mut lines, "List", list.name.as_deref().unwrap_or(&list.id));
        }
        if let Some(parent) = &self.parent {
            field(&mut lines, "Parent", parent);
        }
        if let Some(url) = &self.url {
            field(&mut lines, "URL", url);
        }
        lines.join("\n")
    }
}

impl PrettyPrint for List {
    fn pretty_print(&self) -> String {
        let mut lines = header("List", &self.name);
        field(&mut lines, "ID", &self.id);
        if let Some(folder) = &self.folder {
            field(&mut lines, "Folder", folder.name.as_deref().unwrap_or(&folder.id));
        }
        if let Some(space) = &self.space {
            field(&mut lines, "Space", space.name.as_deref().unwrap_or(&space.id));
        }
        if let Some(count) = self.task_count {
            field(&mut lines, "Tasks", count);
        }
        if let Some(due) = &self.due_date {
            field(&mut lines, "Due", timestamp(due));
        }
        if self.archived {
            field(&mut lines, "Archived", "yes");
        }
        lines.join("\n")
    }
}

impl PrettyPrint for Space {
    fn pretty_print(&self) -> String {
        let mut lines = header("Space", &self.name);
        field(&mut lines, "ID", &self.id);
        field(&mut lines, "Private", if self.private { "yes" } else { "no" });
        if !self.statuses.is_empty() {
            let statuses: Vec<&str> = self.statuses.iter().map(|s| s.status.as_str()).collect();
            field(&mut lines, "Statuses", statuses.join(" → "));
        }
        if self.archived {
            field(&mut lines, "Archived", "yes");
        }
        lines.join("\n")
    }
}

impl PrettyPrint for Folder {
    fn pretty_print(&self) -> String {
        let mut lines = header("Folder", &self.name);
        field(&mut lines, "ID", &self.id);
        if let Some(space) = &self.space {
            field(&mut lines, "Space", space.name.as_deref().unwrap_or(&space.id));
        }
        field(&mut lines, "Lists", self.lists.len());
        if let Some(count) = &self.task_count {
            field(&mut lines, "Tasks", count);
        }
        lines.join("\n")
    }
}

impl PrettyPrint for Goal {
    fn pretty_print(&self) -> String {
        let mut lines = header("Goal", &self.name);
        field(&mut lines, "ID", &self.id);
        if let Some(percent) = self.percent_completed {
            field(&mut lines, "Progress", format!("{percent:.0}%"));
        }
        if let Some(due) = &self.due_date {
            field(&mut lines, "Due", timestamp(due));
        }
        for result in &self.key_results {
            let progress = match (result.steps_current, result.steps_end) {
                (Some(current), Some(end)) => format!("{current}/{end}"),
                _ => "-".to_string(),
            };
            field(&mut lines, "Key result", format!("{} ({progress})", result.name));
        }
        lines.join("\n")
    }
}

impl PrettyPrint for Comment {
    fn pretty_print(&self) -> String {
        let mut lines = header("Comment", &self.id);
        field(&mut lines, "Author", self.user.display_name());
        if let Some(date) = &self.date {
            field(&mut lines, "Date", timestamp(date));
        }
        if self.resolved {
            field(&mut lines, "Resolved", "yes");
        }
        lines.push(String::new());
        lines.push(self.comment_text.clone());
        lines.join("\n")
    }
}

/// Table row for task listings.
#[derive(Tabled)]
pub struct TaskRow {
    pub id: String,
    pub name: String,
    pub status: String,
    pub priority: String,
    pub due: String,
}

impl From<&Task> for TaskRow {
    fn from(t: &Task) -> Self {
        Self {
            id: t.id.clone(),
            name: t.name.clone(),
            status: t.status_name().unwrap_or_default().to_string(),
            priority: t.priority_level().map(|p| p.to_string()).unwrap_or_default(),
            due: t.due_date.as_ref().map(timestamp).unwrap_or_default(),
        }
    }
}

/// Table row for spaces, folders and lists.
#[derive(Tabled)]
pub struct ContainerRow {
    pub id: String,
    pub name: String,
    pub archived: bool,
}

impl From<&Space> for ContainerRow {
    fn from(s: &Space) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            archived: s.archived,
        }
    }
}

impl From<&Folder> for ContainerRow {
    fn from(f: &Folder) -> Self {
        Self {
            id: f.id.clone(),
            name: f.name.clone(),
            archived: f.archived,
        }
    }
}

impl From<&List> for ContainerRow {
    fn from(l: &List) -> Self {
        Self {
            id: l.id.clone(),
            name: l.name.clone(),
            archived: l.archived,
        }
    }
}

/// Table row for comments; long text is cut to one line.
#[derive(Tabled)]
pub struct CommentRow {
    pub id: String,
    pub author: String,
    pub date: String,
    pub text: String,
}

const COMMENT_PREVIEW: usize = 60;

impl From<&Comment> for CommentRow {
    fn from(c: &Comment) -> Self {
        let first_line = c.comment_text.lines().next().unwrap_or_default();
        let text = if first_line.chars().count() > COMMENT_PREVIEW {
            let cut: String = first_line.chars().take(COMMENT_PREVIEW).collect();
            format!("{cut}…")
        } else {
            first_line.to_string()
        };
        Self {
            id: c.id.clone(),
            author: c.user.display_name(),
            date: c.date.as_ref().map(timestamp).unwrap_or_default(),
            text,
        }
    }
}

#[derive(Tabled)]
pub struct WebhookRow {
    pub id: String,
    pub endpoint: String,
    pub events: String,
    pub health: String,
}

impl From<&Webhook> for WebhookRow {
    fn from(w: &Webhook) -> Self {
        Self {
            id: w.id.clone(),
            endpoint: w.endpoint.clone(),
            events: w.events.join(", "),
            health: w
                .health
                .as_ref()
                .map(|h| h.status.clone())
                .unwrap_or_default(),
        }
    }
}
