//! Common types and utilities shared across route handlers.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Query, State},
    routing::{get, post, MethodRouter},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    error::{AppError, AppResult},
    models::{Endpoint, ParamSource},
    services::dispatch_service,
    AppState,
};

/// Standard API response wrapper for successful responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response with the given data.
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// Query string values as request input. Every value stays a string.
pub fn query_input(query: HashMap<String, String>) -> Map<String, Value> {
    query
        .into_iter()
        .map(|(name, value)| (name, Value::String(value)))
        .collect()
}

/// Parse a JSON request body into request input.
///
/// An empty body is an empty object. Anything other than a JSON object is
/// rejected with a validation error so the response keeps its envelope.
pub fn body_input(body: &[u8]) -> AppResult<Map<String, Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AppError::Validation(
            "Request body must be a JSON object".to_string(),
        )),
        Err(e) => Err(AppError::Validation(format!("Invalid JSON body: {e}"))),
    }
}

async fn respond(
    endpoint: &'static Endpoint,
    state: AppState,
    input: Map<String, Value>,
) -> AppResult<Json<ApiResponse<Value>>> {
    let data = dispatch_service::execute(endpoint, &state.slack, &input).await?;
    Ok(ApiResponse::ok(data))
}

async fn respond_to_body(
    endpoint: &'static Endpoint,
    state: AppState,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<ApiResponse<Value>>> {
    let input = body_input(&body?)?;
    respond(endpoint, state, input).await
}

/// Handler for an endpoint, GET for query endpoints and POST for body ones.
pub fn endpoint_route(endpoint: &'static Endpoint) -> MethodRouter<AppState> {
    match endpoint.source {
        ParamSource::Query => get(
            move |State(state): State<AppState>, Query(query): Query<HashMap<String, String>>| {
                respond(endpoint, state, query_input(query))
            },
        ),
        ParamSource::Body => post(
            move |State(state): State<AppState>, body: Result<Bytes, BytesRejection>| {
                respond_to_body(endpoint, state, body)
            },
        ),
    }
}
