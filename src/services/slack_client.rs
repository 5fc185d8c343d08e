//! Slack Web API client.
//!
//! `SlackApi` is the seam handlers talk to; `SlackClient` is the reqwest
//! implementation bound to a bot token. Every call is a single `POST
//! {base_url}/{method}` with no retries and no timeout override.

use std::fmt;

use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client, StatusCode,
};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};

use crate::{error::SlackError, models::SlackRequest};

/// Anything able to execute a Slack Web API call.
#[async_trait]
pub trait SlackApi: Send + Sync {
    /// Invoke `request.method` and return the full response body.
    async fn call(&self, request: SlackRequest) -> Result<Value, SlackError>;
}

/// Token-bound HTTP client for the Slack Web API.
#[derive(Clone)]
pub struct SlackClient {
    http: Client,
    token: SecretString,
    base_url: String,
}

impl fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackClient")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl SlackClient {
    pub fn new(token: SecretString, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            token,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }
}

#[async_trait]
impl SlackApi for SlackClient {
    async fn call(&self, request: SlackRequest) -> Result<Value, SlackError> {
        let builder = self
            .http
            .post(self.method_url(request.method))
            .bearer_auth(self.token.expose_secret());

        let builder = match request.file {
            Some(file) => builder.multipart(multipart_form(&request.params, file)?),
            None => builder.form(&encode_params(&request.params)),
        };

        let response = builder.send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(0);
            return Err(SlackError::RateLimited { retry_after });
        }

        if !status.is_success() {
            return Err(SlackError::Http {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;

        if body.get("ok").and_then(Value::as_bool) != Some(true) {
            let code = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown_error")
                .to_string();
            return Err(SlackError::Api { code, data: body });
        }

        Ok(body)
    }
}

/// Flatten parameters into form fields.
///
/// Strings are sent as-is, scalars as their text form, arrays and objects as
/// JSON. Nulls are dropped.
pub fn encode_params(params: &Map<String, Value>) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(name, value)| {
            let encoded = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((name.clone(), encoded))
        })
        .collect()
}

fn multipart_form(params: &Map<String, Value>, file: Vec<u8>) -> Result<Form, SlackError> {
    let mut form = Form::new();
    for (name, value) in encode_params(params) {
        form = form.text(name, value);
    }

    let filename = params
        .get("filename")
        .and_then(Value::as_str)
        .unwrap_or("file")
        .to_string();
    let mime = mime_guess::from_path(&filename).first_or_octet_stream();
    let part = Part::bytes(file)
        .file_name(filename)
        .mime_str(mime.as_ref())?;

    Ok(form.part("file", part))
}
