//! Task endpoint tests against a wiremock ClickUp API.

use clickapi::{ClickUpClient, ClickUpError, Priority, TasksService};
use futures::TryStreamExt;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn task_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Task {id}"),
        "status": {"status": "to do", "type": "open"},
        "priority": {"id": "2", "priority": "high"},
        "date_created": "1704067200000",
        "list": {"id": "901", "name": "Backlog"}
    })
}

fn tasks_page(range: std::ops::Range<usize>, last_page: bool) -> Value {
    let tasks: Vec<Value> = range.map(|n| task_json(&format!("t{n}"))).collect();
    json!({"tasks": tasks, "last_page": last_page})
}

fn client(server: &MockServer) -> ClickUpClient {
    ClickUpClient::new("pk_test", &server.uri()).unwrap()
}

#[tokio::test]
async fn test_get_task_sends_personal_token_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/task/abc"))
        .and(header("authorization", "pk_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("abc")))
        .expect(1)
        .mount(&server)
        .await;

    let task = client(&server).tasks().get("abc").send().await.unwrap();

    assert_eq!(task.id, "abc");
    assert_eq!(task.status_name(), Some("to do"));
    assert_eq!(task.priority_level(), Some(Priority::High));
    assert_eq!(task.list_id(), Some("901"));
}

#[tokio::test]
async fn test_oauth_token_sent_as_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/task/abc"))
        .and(header("authorization", "Bearer oauth-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("abc")))
        .expect(1)
        .mount(&server)
        .await;

    let client = ClickUpClient::new("oauth-token", &server.uri()).unwrap();
    client.tasks().get("abc").send().await.unwrap();
}

#[tokio::test]
async fn test_get_task_by_custom_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/task/DEV-42"))
        .and(query_param("custom_task_ids", "true"))
        .and(query_param("team_id", "9001"))
        .and(query_param("include_subtasks", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("abc")))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .tasks()
        .get("DEV-42")
        .custom_task_ids(true)
        .team_id("9001")
        .include_subtasks(true)
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_task_posts_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/list/901/task"))
        .and(body_partial_json(json!({
            "name": "Write docs",
            "description": "For the release",
            "priority": 1,
            "tags": ["docs"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("new1")))
        .expect(1)
        .mount(&server)
        .await;

    let task = client(&server)
        .tasks()
        .create("901")
        .name("Write docs")
        .description("For the release")
        .priority(Priority::Urgent)
        .tag("docs")
        .send()
        .await
        .unwrap();

    assert_eq!(task.id, "new1");
}

#[tokio::test]
async fn test_create_task_without_name_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("x")))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server).tasks().create("901").send().await.unwrap_err();
    assert!(err.is_validation());

    let err = client(&server)
        .tasks()
        .create("  ")
        .name("Named")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_update_task_puts_changes() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v2/task/abc"))
        .and(body_partial_json(json!({
            "status": "in progress",
            "assignees": {"add": [7]}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("abc")))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .tasks()
        .update("abc")
        .status("in progress")
        .add_assignee(7)
        .send()
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_task_requires_a_change() {
    let server = MockServer::start().await;

    let err = client(&server).tasks().update("abc").send().await.unwrap_err();
    assert!(matches!(err, ClickUpError::Validation { field: "request", .. }));
}

#[tokio::test]
async fn test_delete_task_accepts_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/task/abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).tasks().delete("abc").send().await.unwrap();
}

#[tokio::test]
async fn test_get_tasks_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/list/901/task"))
        .and(query_param("page", "2"))
        .and(query_param("statuses[]", "open"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tasks_page(0..3, true)))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .tasks()
        .list("901")
        .status("open")
        .page(2)
        .send()
        .await
        .unwrap();

    assert_eq!(page.page, 2);
    assert_eq!(page.len(), 3);
    assert!(!page.has_more);
}

#[tokio::test]
async fn test_task_stream_fetches_until_last_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/list/901/task"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tasks_page(0..100, false)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/list/901/task"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tasks_page(100..103, true)))
        .expect(1)
        .mount(&server)
        .await;

    let tasks: Vec<_> = client(&server)
        .tasks()
        .list("901")
        .stream()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(tasks.len(), 103);
    assert_eq!(tasks[0].id, "t0");
    assert_eq!(tasks[102].id, "t102");
}

#[tokio::test]
async fn test_task_stream_infers_end_from_short_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/team/9001/task"))
        .and(query_param("page", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"tasks": [task_json("only")]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let tasks: Vec<_> = client(&server)
        .tasks()
        .search("9001")
        .stream()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(tasks.len(), 1);
}

#[tokio::test]
async fn test_stream_is_lazy() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tasks_page(0..1, true)))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    let stream = client.tasks().list("901").stream();
    drop(stream);
}

#[tokio::test]
async fn test_task_stream_surfaces_validation_error_first() {
    let server = MockServer::start().await;

    let client = client(&server);
    let mut stream = client.tasks().list("").stream();
    let first = stream.try_next().await;
    assert!(matches!(first, Err(ClickUpError::Validation { .. })));
}

#[tokio::test]
async fn test_bulk_time_in_status_limit() {
    let server = MockServer::start().await;
    let ids: Vec<String> = (0..101).map(|n| format!("t{n}")).collect();

    let err = client(&server)
        .get_bulk_time_in_status(&ids, &Default::default())
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_merge_rejects_self_merge() {
    let server = MockServer::start().await;

    let err = client(&server)
        .tasks()
        .merge("t1")
        .source("t1")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_validation());
}
