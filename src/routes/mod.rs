pub mod common;
pub mod example;
pub mod health;
pub mod slack;

use axum::Router;

use crate::AppState;

/// Combine all routes
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(example::routes())
        .merge(slack::router())
        .merge(crate::openapi::router())
}
