//! Example endpoints kept from the project scaffold.
//!
//!   GET  /example – static sample payload
//!   POST /example – echo a message back with a generated id (201)

use axum::{
    body::Bytes, extract::rejection::BytesRejection, http::StatusCode, routing::get, Json, Router,
};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    routes::common::{body_input, ApiResponse},
    utils::has_value,
    AppState,
};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

#[derive(Debug, Serialize)]
pub struct ExampleData {
    pub message: String,
    pub timestamp: i64,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedExample {
    pub message: Value,
    pub timestamp: i64,
    pub id: String,
}

/// Random base-36 identifier.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// GET /example
async fn get_example() -> Json<ApiResponse<ExampleData>> {
    ApiResponse::ok(ExampleData {
        message: "This is an example API endpoint".to_string(),
        timestamp: chrono::Utc::now().timestamp_millis(),
        description: "This endpoint ships with the gateway as a template for new routes".to_string(),
    })
}

/// POST /example
async fn create_example(
    body: Result<Bytes, BytesRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<CreatedExample>>)> {
    let input = body_input(&body?)?;

    if !has_value(&input, "message") {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let created = CreatedExample {
        message: input["message"].clone(),
        timestamp: chrono::Utc::now().timestamp_millis(),
        id: generate_id(),
    };

    Ok((StatusCode::CREATED, ApiResponse::ok(created)))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/example", get(get_example).post(create_example))
}
