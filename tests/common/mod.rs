//! Shared helpers for integration tests.
//!
//! This module provides:
//! - `TestApp` – the real gateway router driven in-process via `oneshot`
//! - `FakeSlack` – an in-memory `SlackApi` that records every call
//! - JSON assertion helpers

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use slack_gateway::{
    build_router,
    config::Config,
    error::SlackError,
    models::SlackRequest,
    services::{SlackApi, SlackService},
    AppState,
};

/// Configuration without a Slack credential.
#[allow(dead_code)]
pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        slack_bot_token: None,
        slack_api_url: "http://127.0.0.1:1".to_string(),
        max_body_bytes: 64 * 1024,
    }
}

/// Scripted Slack double: answers every call with the same outcome.
#[allow(dead_code)]
pub struct FakeSlack {
    response: Result<Value, (String, Value)>,
    calls: Mutex<Vec<SlackRequest>>,
}

#[allow(dead_code)]
impl FakeSlack {
    pub fn ok(response: Value) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(response),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn api_error(code: &str, data: Value) -> Arc<Self> {
        Arc::new(Self {
            response: Err((code.to_string(), data)),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<SlackRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> SlackRequest {
        self.calls().pop().expect("no Slack call recorded")
    }
}

#[async_trait]
impl SlackApi for FakeSlack {
    async fn call(&self, request: SlackRequest) -> Result<Value, SlackError> {
        self.calls.lock().unwrap().push(request);
        match &self.response {
            Ok(value) => Ok(value.clone()),
            Err((code, data)) => Err(SlackError::Api {
                code: code.clone(),
                data: data.clone(),
            }),
        }
    }
}

/// Minimal test application wrapper.
///
/// Wraps an Axum `Router` so tests can issue HTTP requests without
/// spinning up a real TCP listener.
#[allow(dead_code)]
pub struct TestApp {
    router: Router,
}

#[allow(dead_code)]
impl TestApp {
    /// Create a `TestApp` from any `Router`.
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Gateway backed by the given Slack double.
    pub fn with_slack(slack: Arc<FakeSlack>) -> Self {
        let state = AppState::new(test_config(), SlackService::with_client(slack));
        Self::new(build_router(state))
    }

    /// Gateway with no Slack credential configured.
    pub fn unconfigured() -> Self {
        let state = AppState::new(test_config(), SlackService::unconfigured());
        Self::new(build_router(state))
    }

    async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    /// Send a GET request and return (status, body).
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .uri(path)
            .method("GET")
            .body(Body::empty())
            .unwrap();
        self.send(req).await
    }

    /// Send a POST request with a JSON body and return (status, body).
    pub async fn post(&self, path: &str, payload: Value) -> (StatusCode, Value) {
        let body = serde_json::to_vec(&payload).unwrap();
        self.post_raw(path, body).await
    }

    /// Send a POST request with raw bytes as body.
    pub async fn post_raw(&self, path: &str, body: Vec<u8>) -> (StatusCode, Value) {
        let req = Request::builder()
            .uri(path)
            .method("POST")
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap();
        self.send(req).await
    }
}

/// Assert that a JSON object has `"success": true`.
#[macro_export]
macro_rules! assert_success {
    ($body:expr) => {
        assert_eq!(
            $body["success"],
            serde_json::Value::Bool(true),
            "Expected success=true, got: {}",
            $body
        );
        assert!($body.get("data").is_some(), "Expected data, got: {}", $body);
    };
}

/// Assert that a JSON object has `"success": false`.
#[macro_export]
macro_rules! assert_error {
    ($body:expr) => {
        assert_eq!(
            $body["success"],
            serde_json::Value::Bool(false),
            "Expected success=false, got: {}",
            $body
        );
        assert!($body["error"].is_string(), "Expected error, got: {}", $body);
    };
}
