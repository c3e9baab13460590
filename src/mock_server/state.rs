//! Mock server state management.
//!
//! Provides the in-memory data store for the mock ClickUp API server.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use super::fixtures::Fixtures;
use crate::models::{
    Comment, Folder, Goal, List, Priority, PriorityInfo, Space, Task, User, Webhook, Workspace,
};

/// State handle shared by the server's handlers.
pub type SharedState = Arc<RwLock<MockState>>;

/// Shared state for the mock server.
///
/// Collections are keyed by parent id (workspace, space, folder, list or
/// task) and keep insertion order. It's wrapped in `Arc<RwLock<_>>` for
/// concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// The user the token belongs to.
    pub user: Option<User>,

    pub workspaces: Vec<Workspace>,

    /// Spaces by workspace id.
    pub spaces: HashMap<String, Vec<Space>>,

    /// Folders by space id.
    pub folders: HashMap<String, Vec<Folder>>,

    /// Lists by folder id.
    pub lists: HashMap<String, Vec<List>>,

    /// Tasks by list id.
    pub tasks: HashMap<String, Vec<Task>>,

    /// Comments by task id, oldest first.
    pub comments: HashMap<String, Vec<Comment>>,

    /// Webhooks by workspace id.
    pub webhooks: HashMap<String, Vec<Webhook>>,

    pub goals: Vec<Goal>,

    /// Optional authentication token. If set, requests must send it in
    /// the `Authorization` header.
    pub required_token: Option<String>,

    /// When set, every request is rejected with 429 and this value in
    /// `X-RateLimit-Reset`.
    pub rate_limit_reset: Option<i64>,

    next_id: u64,
}

/// Field changes accepted by task updates.
#[derive(Debug, Default)]
pub struct TaskChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<Priority>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_workspace(mut self, workspace: Workspace) -> Self {
        self.workspaces.push(workspace);
        self
    }

    pub fn with_space(mut self, team_id: &str, space: Space) -> Self {
        self.spaces.entry(team_id.to_string()).or_default().push(space);
        self
    }

    pub fn with_folder(mut self, space_id: &str, folder: Folder) -> Self {
        self.folders.entry(space_id.to_string()).or_default().push(folder);
        self
    }

    pub fn with_list(mut self, folder_id: &str, list: List) -> Self {
        self.lists.entry(folder_id.to_string()).or_default().push(list);
        self
    }

    pub fn with_task(mut self, list_id: &str, task: Task) -> Self {
        self.tasks.entry(list_id.to_string()).or_default().push(task);
        self
    }

    pub fn with_comment(mut self, task_id: &str, comment: Comment) -> Self {
        self.comments.entry(task_id.to_string()).or_default().push(comment);
        self
    }

    pub fn with_webhook(mut self, team_id: &str, webhook: Webhook) -> Self {
        self.webhooks.entry(team_id.to_string()).or_default().push(webhook);
        self
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goals.push(goal);
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Reject every request as rate limited until `reset_at`.
    pub fn with_rate_limit(mut self, reset_at: i64) -> Self {
        self.rate_limit_reset = Some(reset_at);
        self
    }

    /// Allocate an id for a created resource. Ids already held by seeded
    /// or created resources are skipped.
    pub fn next_id(&mut self, prefix: &str) -> String {
        loop {
            self.next_id += 1;
            let id = format!("{prefix}{}", self.next_id);
            if !self.id_in_use(&id) {
                return id;
            }
        }
    }

    fn id_in_use(&self, id: &str) -> bool {
        self.workspaces.iter().any(|w| w.id == id)
            || self.goals.iter().any(|g| g.id == id)
            || self.get_space(id).is_some()
            || self.get_folder(id).is_some()
            || self.get_list(id).is_some()
            || self.get_task(id).is_some()
            || self.comments.values().flatten().any(|c| c.id == id)
            || self.webhooks.values().flatten().any(|w| w.id == id)
    }

    pub fn get_space(&self, id: &str) -> Option<&Space> {
        self.spaces.values().flatten().find(|s| s.id == id)
    }

    pub fn get_folder(&self, id: &str) -> Option<&Folder> {
        self.folders.values().flatten().find(|f| f.id == id)
    }

    pub fn get_list(&self, id: &str) -> Option<&List> {
        self.lists.values().flatten().find(|l| l.id == id)
    }

    pub fn get_task(&self, id: &str) -> Option<&Task> {
        self.tasks.values().flatten().find(|t| t.id == id)
    }

    pub fn get_goal(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Tasks of a list; closed tasks only when `include_closed` is set.
    pub fn list_tasks(&self, list_id: &str, include_closed: bool) -> Vec<&Task> {
        self.tasks
            .get(list_id)
            .map(|tasks| {
                tasks
                    .iter()
                    .filter(|t| include_closed || !t.is_closed())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Comments on a task, newest first.
    pub fn task_comments(&self, task_id: &str) -> Vec<&Comment> {
        let mut comments: Vec<&Comment> = self
            .comments
            .get(task_id)
            .map(|c| c.iter().collect())
            .unwrap_or_default();
        comments.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        comments
    }

    /// Apply changes to a task and return the updated version.
    pub fn update_task(&mut self, id: &str, changes: TaskChanges) -> Option<&Task> {
        let task = self.tasks.values_mut().flatten().find(|t| t.id == id)?;
        if let Some(name) = changes.name {
            task.name = name;
        }
        if let Some(description) = changes.description {
            task.text_content = Some(description.clone());
            task.description = Some(description);
        }
        if let Some(status) = changes.status {
            task.status = Some(Fixtures::status(&status));
        }
        if let Some(priority) = changes.priority {
            task.priority = Some(priority_info(priority));
        }
        task.date_updated = Some(Utc::now());
        Some(task)
    }

    /// Remove a task, returning whether it existed.
    pub fn delete_task(&mut self, id: &str) -> bool {
        let mut removed = false;
        for tasks in self.tasks.values_mut() {
            let before = tasks.len();
            tasks.retain(|t| t.id != id);
            removed |= tasks.len() != before;
        }
        if removed {
            self.comments.remove(id);
        }
        removed
    }

    /// Remove a webhook, returning whether it existed.
    pub fn delete_webhook(&mut self, id: &str) -> bool {
        let mut removed = false;
        for hooks in self.webhooks.values_mut() {
            let before = hooks.len();
            hooks.retain(|w| w.id != id);
            removed |= hooks.len() != before;
        }
        removed
    }
}

/// The priority object the API returns for a priority level.
pub fn priority_info(priority: Priority) -> PriorityInfo {
    PriorityInfo {
        id: Some(priority.as_number().to_string()),
        priority: priority.to_string(),
        color: None,
    }
}
