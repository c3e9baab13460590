//! Workspace hierarchy tests: workspaces, spaces, folders and lists.

use clickapi::{ClickUpClient, ClickUpError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ClickUpClient {
    ClickUpClient::new("pk_test", &server.uri()).unwrap()
}

#[tokio::test]
async fn test_authorized_user_and_workspaces() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {"id": 183, "username": "Ada Lovelace", "email": "ada@example.com"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/team"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "teams": [{"id": "9001", "name": "Acme", "members": []}]
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let user = client.authorization().user().await.unwrap();
    let workspaces = client.authorization().workspaces().await.unwrap();

    assert_eq!(user.display_name(), "Ada Lovelace");
    assert_eq!(workspaces.len(), 1);
    assert_eq!(workspaces[0].name, "Acme");
}

#[tokio::test]
async fn test_list_spaces_sends_archived_flag() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/team/9001/space"))
        .and(query_param("archived", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "spaces": [
                {"id": "790", "name": "Engineering", "private": false,
                 "statuses": [{"status": "to do", "type": "open"}]},
                {"id": 791, "name": "Design"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let spaces = client(&server).spaces().list("9001", false).await.unwrap();

    assert_eq!(spaces.len(), 2);
    assert_eq!(spaces[1].id, "791");
    assert_eq!(spaces[0].statuses[0].status, "to do");
}

#[tokio::test]
async fn test_create_space_requires_name() {
    let server = MockServer::start().await;

    let err = client(&server).spaces().create("9001").send().await.unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_folders_and_lists() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/space/790/folder"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "folders": [{"id": "457", "name": "Sprints", "task_count": "12",
                         "lists": [{"id": "901", "name": "Backlog"}]}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/folder/457/list"))
        .and(query_param("archived", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lists": [{"id": "901", "name": "Backlog", "task_count": 12,
                       "folder": {"id": "457", "name": "Sprints"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/space/790/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"lists": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let folders = client.folders().list("790", false).await.unwrap();
    assert_eq!(folders[0].lists[0].id, "901");

    let lists = client.lists().in_folder("457", true).await.unwrap();
    assert_eq!(lists[0].task_count, Some(12));

    let folderless = client.lists().folderless("790", false).await.unwrap();
    assert!(folderless.is_empty());
}

#[tokio::test]
async fn test_create_list_in_folder() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/folder/457/list"))
        .and(body_partial_json(json!({"name": "Sprint 12"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "902", "name": "Sprint 12"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let list = client(&server)
        .lists()
        .create()
        .in_folder("457")
        .name("Sprint 12")
        .send()
        .await
        .unwrap();
    assert_eq!(list.id, "902");
}

#[tokio::test]
async fn test_create_list_needs_a_parent() {
    let server = MockServer::start().await;

    let err = client(&server)
        .lists()
        .create()
        .name("Orphan")
        .send()
        .await
        .unwrap_err();
    assert!(matches!(err, ClickUpError::Validation { .. }));
}

#[tokio::test]
async fn test_dot_segment_ids_never_reach_the_server() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    for id in ["..", "."] {
        let err = client.lists().delete(id).await.unwrap_err();
        match err {
            ClickUpError::Validation { field, .. } => assert_eq!(field, "list_id"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_ids_are_percent_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/list/a%2Fb"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "a/b", "name": "Odd"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let list = client(&server).lists().get("a/b").await.unwrap();
    assert_eq!(list.name, "Odd");
}
