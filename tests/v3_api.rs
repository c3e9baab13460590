//! Chat and docs endpoints (API v3), which page with opaque cursors.

use clickapi::ClickUpClient;
use futures::{StreamExt, TryStreamExt};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ClickUpClient {
    ClickUpClient::new("pk_test", &server.uri()).unwrap()
}

#[tokio::test]
async fn test_channel_stream_follows_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/workspaces/9001/chat/channels"))
        .and(query_param("limit", "2"))
        .and(query_param("room_types[]", "CHANNEL"))
        .and(query_param_is_missing("cursor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "ch-1", "name": "general"}, {"id": "ch-2", "name": "random"}],
            "next_cursor": "page-2"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/workspaces/9001/chat/channels"))
        .and(query_param("cursor", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "ch-3", "name": "releases"}],
            "next_cursor": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let channels: Vec<_> = client(&server)
        .chat()
        .channels("9001")
        .limit(2)
        .room_type("CHANNEL")
        .stream()
        .try_collect()
        .await
        .unwrap();

    let ids: Vec<_> = channels.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["ch-1", "ch-2", "ch-3"]);
}

#[tokio::test]
async fn test_channel_limit_out_of_range() {
    let server = MockServer::start().await;

    let client = client(&server);
    let mut stream = client.chat().channels("9001").limit(500).stream();
    let first = stream.next().await.unwrap();

    assert!(first.unwrap_err().is_validation());
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn test_send_message_accepts_wrapped_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/workspaces/9001/chat/channels/ch-1/messages"))
        .and(body_json(json!({
            "type": "message",
            "content": "Deploy finished",
            "content_format": "text/md"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {"id": "m-1", "content": "Deploy finished", "date": 1704067200000i64}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let message = client(&server)
        .chat()
        .send_message("9001", "ch-1", "Deploy finished")
        .send()
        .await
        .unwrap();
    assert_eq!(message.id, "m-1");
}

#[tokio::test]
async fn test_docs_search_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/workspaces/9001/docs"))
        .and(query_param("archived", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "docs": [{"id": "8cdu-1", "name": "Handbook", "parent": {"id": 9001, "type": 12}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let docs: Vec<_> = client(&server)
        .docs()
        .search("9001")
        .archived(false)
        .stream()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].parent.as_ref().unwrap().parent_type, 12);
}

#[tokio::test]
async fn test_doc_page_tree() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/workspaces/9001/docs/8cdu-1/page_listing"))
        .and(query_param("max_page_depth", "-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "p1", "name": "Intro", "pages": [{"id": "p2", "name": "Setup"}]}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let pages = client(&server)
        .docs()
        .pages("9001", "8cdu-1", Some(-1))
        .await
        .unwrap();
    assert_eq!(pages[0].total_pages(), 2);
}
