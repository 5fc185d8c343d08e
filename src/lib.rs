pub mod config;
pub mod error;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod services;
pub mod utils;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, services::SlackService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub slack: SlackService,
}

impl AppState {
    pub fn new(config: Config, slack: SlackService) -> Self {
        Self { config, slack }
    }

    /// Build state with the Slack client created from configuration.
    pub fn from_config(config: Config) -> Self {
        let slack = SlackService::from_config(&config);
        Self::new(config, slack)
    }
}

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .merge(routes::app_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Create the application from configuration
pub fn create_app(config: Config) -> Router {
    build_router(AppState::from_config(config))
}
