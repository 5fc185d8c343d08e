use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slack_gateway::{build_router, config::Config, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slack_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting Slack gateway on {}:{}", config.host, config.port);

    let state = AppState::from_config(config.clone());

    // Credential check; a failure is logged, not fatal
    if state.slack.is_configured() {
        let check = state.slack.verify_auth().await;
        if check.success {
            let team = check
                .data
                .as_ref()
                .and_then(|d| d["team"].as_str())
                .unwrap_or("unknown");
            tracing::info!(team, "Slack credential verified");
        } else {
            tracing::warn!(
                error = check.error.as_deref().unwrap_or("unknown"),
                "Slack credential check failed"
            );
        }
    }

    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Slack gateway running at http://{}:{}", config.host, config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
