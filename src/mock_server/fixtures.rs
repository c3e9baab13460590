//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::models::{Comment, Folder, Goal, List, Space, Task, User, Webhook, Workspace};

/// Workspace id used by the default scenario.
pub const WORKSPACE_ID: &str = "9001";
/// List id holding the default scenario's tasks.
pub const LIST_ID: &str = "901";
/// Task that carries the default scenario's comments.
pub const COMMENTED_TASK_ID: &str = "t1";

const CREATED_AT: i64 = 1_704_067_200_000;

fn from_json<T: DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("fixture JSON matches the model")
}

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // People
    // =========================================================================

    pub fn user(id: i64, username: &str) -> User {
        from_json(json!({
            "id": id,
            "username": username,
            "email": format!("{}@example.com", username.to_lowercase().replace(' ', ".")),
        }))
    }

    pub fn workspace(id: &str, name: &str) -> Workspace {
        from_json(json!({"id": id, "name": name}))
    }

    // =========================================================================
    // Hierarchy
    // =========================================================================

    pub fn space(id: &str, name: &str) -> Space {
        from_json(json!({
            "id": id,
            "name": name,
            "statuses": [
                {"status": "to do", "type": "open"},
                {"status": "in progress", "type": "custom"},
                {"status": "complete", "type": "closed"}
            ]
        }))
    }

    pub fn folder(id: &str, name: &str, space_id: &str) -> Folder {
        from_json(json!({"id": id, "name": name, "space": {"id": space_id}}))
    }

    pub fn list(id: &str, name: &str, folder_id: &str) -> List {
        from_json(json!({"id": id, "name": name, "folder": {"id": folder_id}}))
    }

    // =========================================================================
    // Tasks
    // =========================================================================

    /// An open task with no priority.
    pub fn task(id: &str, name: &str, list_id: &str) -> Task {
        from_json(json!({
            "id": id,
            "name": name,
            "status": {"status": "to do", "type": "open"},
            "date_created": CREATED_AT.to_string(),
            "list": {"id": list_id},
            "url": format!("https://app.clickup.com/t/{id}"),
        }))
    }

    /// A task in a closed status.
    pub fn closed_task(id: &str, name: &str, list_id: &str) -> Task {
        let mut task = Self::task(id, name, list_id);
        task.status = Some(Self::status("complete"));
        task
    }

    /// A status value; `complete` and `closed` are closed statuses.
    pub fn status(name: &str) -> crate::models::Status {
        let status_type = match name {
            "complete" | "closed" => "closed",
            "to do" => "open",
            _ => "custom",
        };
        from_json(json!({"status": name, "type": status_type}))
    }

    /// A comment posted `minutes` after the scenario's creation time.
    pub fn comment(id: &str, text: &str, author: &User, minutes: i64) -> Comment {
        from_json(json!({
            "id": id,
            "comment_text": text,
            "user": author,
            "date": (CREATED_AT + minutes * 60_000).to_string(),
        }))
    }

    // =========================================================================
    // Workspace-level resources
    // =========================================================================

    pub fn webhook(id: &str, endpoint: &str, team_id: &str) -> Webhook {
        from_json(json!({
            "id": id,
            "team_id": team_id,
            "endpoint": endpoint,
            "events": ["taskCreated", "taskUpdated"],
            "health": {"status": "active", "fail_count": 0},
            "secret": "whsec-test",
        }))
    }

    pub fn goal(id: &str, name: &str, team_id: &str) -> Goal {
        from_json(json!({
            "id": id,
            "name": name,
            "team_id": team_id,
            "percent_completed": 40,
            "key_results": [{
                "id": format!("{id}-kr"),
                "name": "Ship the beta",
                "type": "number",
                "steps_start": 0,
                "steps_end": 10,
                "steps_current": 4
            }]
        }))
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related entities.
///
/// Parent-keyed collections pair each parent id with its children.
pub struct DefaultScenario {
    pub user: User,
    pub workspaces: Vec<Workspace>,
    pub spaces: Vec<(String, Space)>,
    pub folders: Vec<(String, Folder)>,
    pub lists: Vec<(String, List)>,
    pub tasks: Vec<(String, Task)>,
    pub comments: Vec<(String, Comment)>,
    pub webhooks: Vec<(String, Webhook)>,
    pub goals: Vec<Goal>,
}

/// Open tasks in the default list; enough for two pages.
pub const DEFAULT_OPEN_TASKS: usize = 150;
/// Comments on the commented task; enough for two pages.
pub const DEFAULT_COMMENTS: usize = 30;

impl DefaultScenario {
    fn new() -> Self {
        let user = Fixtures::user(183, "Ada Lovelace");
        let space_id = "790";
        let folder_id = "457";

        let mut tasks: Vec<(String, Task)> = (1..=DEFAULT_OPEN_TASKS)
            .map(|n| {
                let task = Fixtures::task(&format!("t{n}"), &format!("Task {n}"), LIST_ID);
                (LIST_ID.to_string(), task)
            })
            .collect();
        tasks.push((
            LIST_ID.to_string(),
            Fixtures::closed_task("t-done", "Finished task", LIST_ID),
        ));

        let comments = (1..=DEFAULT_COMMENTS)
            .map(|n| {
                let comment =
                    Fixtures::comment(&format!("c{n}"), &format!("Comment {n}"), &user, n as i64);
                (COMMENTED_TASK_ID.to_string(), comment)
            })
            .collect();

        Self {
            workspaces: vec![Fixtures::workspace(WORKSPACE_ID, "Acme")],
            spaces: vec![(
                WORKSPACE_ID.to_string(),
                Fixtures::space(space_id, "Engineering"),
            )],
            folders: vec![(
                space_id.to_string(),
                Fixtures::folder(folder_id, "Sprints", space_id),
            )],
            lists: vec![(
                folder_id.to_string(),
                Fixtures::list(LIST_ID, "Backlog", folder_id),
            )],
            tasks,
            comments,
            webhooks: vec![(
                WORKSPACE_ID.to_string(),
                Fixtures::webhook("wh-1", "https://hooks.example.com/clickup", WORKSPACE_ID),
            )],
            goals: vec![Fixtures::goal("goal-1", "Launch v2", WORKSPACE_ID)],
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_fixture() {
        let task = Fixtures::task("t9", "Write docs", "901");
        assert_eq!(task.status_name(), Some("to do"));
        assert_eq!(task.list_id(), Some("901"));
        assert!(!task.is_closed());
    }

    #[test]
    fn test_closed_task_fixture() {
        let task = Fixtures::closed_task("t9", "Done", "901");
        assert!(task.is_closed());
    }

    #[test]
    fn test_goal_fixture() {
        let goal = Fixtures::goal("g1", "Launch", "9001");
        assert_eq!(goal.key_results.len(), 1);
        assert_eq!(goal.percent_completed, Some(40.0));
    }

    #[test]
    fn test_default_scenario() {
        let scenario = Fixtures::default_scenario();
        assert_eq!(scenario.tasks.len(), DEFAULT_OPEN_TASKS + 1);
        assert_eq!(scenario.comments.len(), DEFAULT_COMMENTS);
        assert!(!scenario.webhooks.is_empty());
    }
}
