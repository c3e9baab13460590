//! HTTP failure mapping tests.

use clickapi::{ClickUpClient, ClickUpError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn failing_server(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/space/790"))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

async fn fetch(server: &MockServer) -> ClickUpError {
    let client = ClickUpClient::new("pk_test", &server.uri()).unwrap();
    client.spaces().get("790").await.unwrap_err()
}

#[tokio::test]
async fn test_unauthorized() {
    let server = failing_server(
        ResponseTemplate::new(401)
            .set_body_json(json!({"err": "Token invalid", "ECODE": "OAUTH_025"})),
    )
    .await;

    match fetch(&server).await {
        ClickUpError::Unauthorized { message } => assert_eq!(message, "Token invalid"),
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_keeps_error_code() {
    let server = failing_server(
        ResponseTemplate::new(404)
            .set_body_json(json!({"err": "Space not found", "ECODE": "PROJ_007"})),
    )
    .await;

    let err = fetch(&server).await;
    assert!(matches!(err, ClickUpError::NotFound { .. }));
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.error_code(), Some("PROJ_007"));
}

#[tokio::test]
async fn test_rate_limited_reads_reset_header() {
    let server = failing_server(
        ResponseTemplate::new(429).insert_header("X-RateLimit-Reset", "1704067260"),
    )
    .await;

    match fetch(&server).await {
        ClickUpError::RateLimited { reset_at } => assert_eq!(reset_at, Some(1_704_067_260)),
        other => panic!("expected RateLimited, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_with_plain_body() {
    let server = failing_server(ResponseTemplate::new(500).set_body_string("upstream broke")).await;

    match fetch(&server).await {
        ClickUpError::ApiError {
            message,
            status_code,
            error_code,
        } => {
            assert_eq!(message, "upstream broke");
            assert_eq!(status_code, 500);
            assert!(error_code.is_none());
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_parse_error() {
    let server =
        failing_server(ResponseTemplate::new(200).set_body_string("{\"id\": ")).await;

    assert!(matches!(fetch(&server).await, ClickUpError::ParseError(_)));
}

#[test]
fn test_missing_token_is_config_error() {
    let err = ClickUpClient::new("", "https://api.clickup.com/api").unwrap_err();
    assert!(matches!(err, ClickUpError::ConfigMissing(_)));
}

#[tokio::test]
async fn test_slow_response_hits_timeout() {
    let server = failing_server(
        ResponseTemplate::new(200)
            .set_body_json(json!({"id": "790", "name": "Engineering"}))
            .set_delay(std::time::Duration::from_millis(500)),
    )
    .await;

    let client = ClickUpClient::new("pk_test", &server.uri())
        .unwrap()
        .with_timeout(std::time::Duration::from_millis(50))
        .unwrap();
    let err = client.spaces().get("790").await.unwrap_err();

    match err {
        ClickUpError::HttpError(e) => assert!(e.is_timeout()),
        other => panic!("expected a timeout, got {other:?}"),
    }
}
