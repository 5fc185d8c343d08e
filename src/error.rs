use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Failures reported by the Slack Web API client.
///
/// Display strings are passed through to callers verbatim as the envelope's
/// `error` field.
#[derive(Error, Debug)]
pub enum SlackError {
    /// Slack answered with `ok: false`.
    #[error("An API error occurred: {code}")]
    Api { code: String, data: Value },

    #[error("A rate limit was exceeded (retry after {retry_after} seconds)")]
    RateLimited { retry_after: u64 },

    #[error("An HTTP protocol error occurred: statusCode = {status}")]
    Http { status: u16 },

    #[error("A request error occurred: {0}")]
    Request(#[from] reqwest::Error),
}

impl SlackError {
    /// Structured detail attached to the error, `{}` when there is none.
    pub fn details(&self) -> Value {
        match self {
            SlackError::Api { data, .. } => data.clone(),
            SlackError::RateLimited { retry_after } => json!({ "retry_after": retry_after }),
            SlackError::Http { status } => json!({ "status": status }),
            SlackError::Request(_) => json!({}),
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    ParameterParse(String),

    /// The request body could not be read, usually because it exceeds the
    /// configured size limit.
    #[error("{message}")]
    Body { status: StatusCode, message: String },

    #[error(transparent)]
    Slack(#[from] SlackError),
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        let status = rejection.status();
        let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
            "Request body is too large".to_string()
        } else {
            rejection.body_text()
        };
        AppError::Body { status, message }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Body { status, .. } => *status,
            AppError::Configuration(_) | AppError::ParameterParse(_) | AppError::Slack(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Error detail for the envelope. Client errors carry none.
    pub fn details(&self) -> Option<Value> {
        match self {
            AppError::Validation(_) | AppError::Body { .. } => None,
            AppError::Slack(e) => Some(e.details()),
            _ => Some(json!({})),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Validation(msg) => tracing::debug!("Rejected request: {}", msg),
            AppError::Configuration(msg) => tracing::error!("Configuration error: {}", msg),
            AppError::Slack(e) => tracing::error!("Slack API error: {}", e),
            AppError::ParameterParse(msg) => tracing::error!("Parameter error: {}", msg),
            AppError::Body { message, .. } => tracing::debug!("Unreadable body: {}", message),
        }

        let mut body = json!({
            "success": false,
            "error": self.to_string()
        });
        if let Some(details) = self.details() {
            body["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}

/// Type alias for Results with AppError
pub type AppResult<T> = std::result::Result<T, AppError>;
