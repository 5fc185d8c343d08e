use std::sync::Arc;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{AuthCheck, SlackRequest},
    services::{SlackApi, SlackClient},
};

const MISSING_TOKEN: &str =
    "SLACK_BOT_TOKEN environment variable is not set. Please configure your .env file.";

/// Owner of the process-wide Slack client.
///
/// Built once at startup and shared through `AppState`. When no credential
/// is configured the service still exists, but every `client()` call fails
/// with a configuration error.
#[derive(Clone)]
pub struct SlackService {
    client: Option<Arc<dyn SlackApi>>,
}

impl SlackService {
    /// Build the client from the configured bot token, if any.
    pub fn from_config(config: &Config) -> Self {
        let client = config.bot_token().map(|token| {
            Arc::new(SlackClient::new(token.clone(), config.slack_api_url.clone()))
                as Arc<dyn SlackApi>
        });

        if client.is_none() {
            tracing::warn!("SLACK_BOT_TOKEN is not set; Slack endpoints will fail until it is configured");
        }

        Self { client }
    }

    /// Wrap an existing client, e.g. a test double.
    pub fn with_client(client: Arc<dyn SlackApi>) -> Self {
        Self {
            client: Some(client),
        }
    }

    pub fn unconfigured() -> Self {
        Self { client: None }
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// The shared client handle. Every caller observes the same instance.
    pub fn client(&self) -> AppResult<Arc<dyn SlackApi>> {
        self.client
            .clone()
            .ok_or_else(|| AppError::Configuration(MISSING_TOKEN.to_string()))
    }

    /// Check the credential with `auth.test` without propagating failures.
    pub async fn verify_auth(&self) -> AuthCheck {
        let client = match self.client() {
            Ok(client) => client,
            Err(e) => return AuthCheck::failed(e.to_string()),
        };

        match client.call(SlackRequest::new("auth.test")).await {
            Ok(data) => AuthCheck::ok(data),
            Err(e) => AuthCheck::failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SlackError;
    use async_trait::async_trait;
    use secrecy::SecretString;
    use serde_json::{json, Value};

    struct StaticSlack(Result<Value, &'static str>);

    #[async_trait]
    impl SlackApi for StaticSlack {
        async fn call(&self, _request: SlackRequest) -> Result<Value, SlackError> {
            self.0.clone().map_err(|code| SlackError::Api {
                code: code.to_string(),
                data: json!({ "ok": false, "error": code }),
            })
        }
    }

    fn config_with_token(token: Option<&str>) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8000,
            slack_bot_token: token.map(SecretString::from),
            slack_api_url: "https://slack.com/api".to_string(),
            max_body_bytes: 1024,
        }
    }

    #[test]
    fn test_client_returns_same_handle() {
        let service = SlackService::from_config(&config_with_token(Some("xoxb-1")));
        let a = service.client().unwrap();
        let b = service.client().unwrap();
        assert_eq!(Arc::as_ptr(&a) as *const (), Arc::as_ptr(&b) as *const ());
    }

    #[test]
    fn test_clones_share_handle() {
        let service = SlackService::from_config(&config_with_token(Some("xoxb-1")));
        let cloned = service.clone();
        let a = service.client().unwrap();
        let b = cloned.client().unwrap();
        assert_eq!(Arc::as_ptr(&a) as *const (), Arc::as_ptr(&b) as *const ());
    }

    #[test]
    fn test_missing_token_fails_every_time() {
        let service = SlackService::from_config(&config_with_token(None));
        assert!(!service.is_configured());
        for _ in 0..2 {
            let err = service.client().err().unwrap();
            assert!(matches!(err, AppError::Configuration(_)));
            assert!(err.to_string().contains("SLACK_BOT_TOKEN"));
        }
    }

    #[tokio::test]
    async fn test_verify_auth_success() {
        let service = SlackService::with_client(Arc::new(StaticSlack(Ok(json!({
            "ok": true,
            "team": "Acme"
        })))));
        let check = service.verify_auth().await;
        assert!(check.success);
        assert_eq!(check.data.unwrap()["team"], "Acme");
    }

    #[tokio::test]
    async fn test_verify_auth_reports_api_error() {
        let service = SlackService::with_client(Arc::new(StaticSlack(Err("invalid_auth"))));
        let check = service.verify_auth().await;
        assert!(!check.success);
        assert_eq!(check.error.as_deref(), Some("An API error occurred: invalid_auth"));
    }

    #[tokio::test]
    async fn test_verify_auth_without_token_does_not_fail() {
        let check = SlackService::unconfigured().verify_auth().await;
        assert!(!check.success);
        assert!(check.error.unwrap().contains("SLACK_BOT_TOKEN"));
    }
}
