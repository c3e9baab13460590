//! CLI output formatting tests: JSON with `--json`, key/value text and
//! tables otherwise.

use clickapi::output::{CommentRow, ContainerRow, TaskRow, WebhookRow};
use clickapi::{Comment, PrettyPrint, Space, Task, Webhook};
use tabled::Table;

#[test]
fn test_json_output_is_valid_json() {
    let task = make_test_task();
    let json_output = serde_json::to_string_pretty(&task).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json_output).unwrap();
    assert!(parsed.is_object());
    assert_eq!(parsed["name"], "Write release notes");
}

#[test]
fn test_json_output_for_list_is_array() {
    let tasks = vec![make_test_task(), make_test_task()];
    let json_output = serde_json::to_string_pretty(&tasks).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json_output).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[test]
fn test_pretty_output_is_not_json() {
    let output = make_test_task().pretty_print();
    assert!(serde_json::from_str::<serde_json::Value>(&output).is_err());
}

#[test]
fn test_task_pretty_print_shows_key_fields() {
    let output = make_test_task().pretty_print();

    assert!(output.starts_with("Task: Write release notes"));
    assert!(output.contains("86a1b2c3d"));
    assert!(output.contains("in progress"));
    assert!(output.contains("high"));
    assert!(output.contains("Ada Lovelace"));
    assert!(output.contains("2024-01-01 00:00 UTC"));
}

#[test]
fn test_space_pretty_print_lists_statuses_in_order() {
    let space: Space = serde_json::from_value(serde_json::json!({
        "id": "790",
        "name": "Engineering",
        "private": true,
        "statuses": [
            {"status": "to do", "type": "open"},
            {"status": "in progress", "type": "custom"},
            {"status": "done", "type": "closed"}
        ]
    }))
    .unwrap();

    let output = space.pretty_print();
    assert!(output.contains("to do → in progress → done"));
    assert!(output.contains("yes"));
}

#[test]
fn test_task_table_has_columns() {
    let rows: Vec<TaskRow> = [make_test_task()].iter().map(TaskRow::from).collect();
    let table = Table::new(rows).to_string();

    for column in ["id", "name", "status", "priority", "due"] {
        assert!(table.contains(column), "missing column {column}");
    }
    assert!(table.contains("Write release notes"));
}

fn table_of<T, R, F>(items: &[T], to_row: F) -> String
where
    R: tabled::Tabled,
    F: Fn(&T) -> R,
{
    Table::new(items.iter().map(to_row)).to_string()
}

#[test]
fn test_rows_built_through_borrowing_converter() {
    let space: Space = serde_json::from_value(serde_json::json!({"id": 790, "name": "Engineering"}))
        .unwrap();

    let tasks = table_of(&[make_test_task()], |item| TaskRow::from(item));
    let spaces = table_of(&[space], |item| ContainerRow::from(item));
    assert!(tasks.contains("Write release notes"));
    assert!(spaces.contains("Engineering"));
}

#[test]
fn test_container_row_from_space() {
    let space: Space = serde_json::from_value(serde_json::json!({
        "id": 791, "name": "Design", "archived": true
    }))
    .unwrap();

    let row = ContainerRow::from(&space);
    assert_eq!(row.id, "791");
    assert!(row.archived);
}

#[test]
fn test_comment_row_uses_author_name() {
    let comment: Comment = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "comment_text": "Ship it",
        "user": {"id": 183, "username": "Ada Lovelace"},
        "date": "1704067200000"
    }))
    .unwrap();

    let row = CommentRow::from(&comment);
    assert_eq!(row.author, "Ada Lovelace");
    assert_eq!(row.text, "Ship it");
}

#[test]
fn test_webhook_row_joins_events() {
    let webhook: Webhook = serde_json::from_value(serde_json::json!({
        "id": "wh-1",
        "endpoint": "https://hooks.example.com/clickup",
        "events": ["taskCreated", "taskUpdated"],
        "health": {"status": "failing", "fail_count": 3}
    }))
    .unwrap();

    let row = WebhookRow::from(&webhook);
    assert!(row.events.contains("taskCreated"));
    assert!(row.events.contains("taskUpdated"));
    assert!(row.health.contains("failing"));
}

fn make_test_task() -> Task {
    serde_json::from_value(serde_json::json!({
        "id": "86a1b2c3d",
        "name": "Write release notes",
        "status": {"status": "in progress", "type": "custom"},
        "priority": {"id": "2", "priority": "high", "color": "#ffcc00"},
        "assignees": [{"id": 183, "username": "Ada Lovelace"}],
        "due_date": "1704067200000",
        "url": "https://app.clickup.com/t/86a1b2c3d"
    }))
    .unwrap()
}
