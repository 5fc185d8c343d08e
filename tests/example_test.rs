//! Integration tests for the template endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn get_example_returns_payload() {
    let app = TestApp::unconfigured();
    let (status, body) = app.get("/example").await;

    assert_eq!(status, StatusCode::OK);
    assert_success!(body);
    assert_eq!(body["data"]["message"], "This is an example API endpoint");
    assert!(body["data"]["timestamp"].is_i64());
}

#[tokio::test]
async fn post_example_returns_201() {
    let app = TestApp::unconfigured();
    let (status, body) = app.post("/example", json!({ "message": "hello" })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_success!(body);
    assert_eq!(body["data"]["message"], "hello");
    assert_eq!(body["data"]["id"].as_str().unwrap().len(), 9);
}

#[tokio::test]
async fn post_example_without_message_is_400() {
    let app = TestApp::unconfigured();
    let (status, body) = app.post("/example", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error!(body);
    assert_eq!(body["error"], "Message is required");
}

#[tokio::test]
async fn post_example_oversized_body_keeps_envelope() {
    let app = TestApp::unconfigured();
    let message = "x".repeat(70 * 1024);

    let (status, body) = app.post("/example", json!({ "message": message })).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_error!(body);
}
