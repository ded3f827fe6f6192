//! HTTP behavior of `TaskClient` against a mock backend

#![cfg(not(target_arch = "wasm32"))]

use serde_json::json;
use task_board_api::{ApiError, NewTask, TaskApi, TaskClient, TaskId};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, TaskClient) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let server = MockServer::start().await;
    let client = TaskClient::from_origin(&server.uri(), "/api/data/").unwrap();
    (server, client)
}

#[tokio::test]
async fn test_create_posts_json_and_decodes_echo() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/data/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"title": "Buy milk", "description": ""})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "title": "Buy milk",
            "description": "",
            "completed": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let task = NewTask::from_input("  Buy milk  ", "").unwrap();
    let created = client.create_task(&task).await.unwrap();

    assert_eq!(created.id, TaskId::Number(1));
    assert_eq!(created.title, "Buy milk");
    assert_eq!(created.description(), None);
}

#[tokio::test]
async fn test_list_unwraps_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/data/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tasks": [
                {"id": 1, "title": "Buy milk", "description": "", "completed": false},
                {"id": 2, "title": "Ship release", "description": "v0.1", "completed": true}
            ]
        })))
        .mount(&server)
        .await;

    let tasks = client.list_tasks().await.unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1].description(), Some("v0.1"));
    assert!(tasks[1].completed);
}

#[tokio::test]
async fn test_empty_collection() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/data/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tasks": []})))
        .mount(&server)
        .await;

    assert!(client.list_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_error_status_is_a_failure() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/data/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let task = NewTask::from_input("Buy milk", "").unwrap();
    let err = client.create_task(&task).await.unwrap_err();

    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_a_failure() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/data/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let err = client.list_tasks().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
