use serde::Serialize;
use serde_json::{Map, Value};

/// One outbound Slack Web API call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlackRequest {
    /// Web API method name, e.g. `chat.postMessage`.
    pub method: &'static str,
    /// Parameters actually forwarded. Omitted fields are absent, never null.
    pub params: Map<String, Value>,
    /// Decoded file body for uploads.
    pub file: Option<Vec<u8>>,
}

impl SlackRequest {
    pub fn new(method: &'static str) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: Value) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }
}

/// Outcome of a credential check against `auth.test`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthCheck {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthCheck {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}
