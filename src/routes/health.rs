use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    // Check the Slack credential
    let slack_status = if !state.slack.is_configured() {
        "unconfigured"
    } else if state.slack.verify_auth().await.success {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "slack": slack_status
    }))
}
