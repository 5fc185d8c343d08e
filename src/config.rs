use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Bot token (`SLACK_BOT_TOKEN`). Absence is not fatal at startup.
    pub slack_bot_token: Option<SecretString>,

    #[serde(default = "default_slack_api_url")]
    pub slack_api_url: String,

    /// Largest accepted request body; uploads arrive base64-encoded.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_slack_api_url() -> String {
    "https://slack.com/api".to_string()
}

fn default_max_body_bytes() -> usize {
    25 * 1024 * 1024
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let config: Self = config.try_deserialize()?;

        url::Url::parse(&config.slack_api_url)
            .with_context(|| format!("SLACK_API_URL is not a valid URL: {}", config.slack_api_url))?;

        Ok(config)
    }

    /// The configured bot token, treating an empty value as unset.
    pub fn bot_token(&self) -> Option<&SecretString> {
        self.slack_bot_token
            .as_ref()
            .filter(|token| !token.expose_secret().trim().is_empty())
    }
}
