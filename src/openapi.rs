//! OpenAPI 3.0 document and API index.
//!
//! Serves `GET /openapi.json` and `GET /api-info`. Slack paths are generated
//! from the same `Endpoint` records that drive request handling, so the
//! document cannot drift from the routes; the fixed system and example
//! routes are described by hand.

use axum::{routing::get, Json, Router};
use serde_json::{json, Map, Value};

use crate::{
    models::{Endpoint, Field, FieldKind, ParamSource, Projection},
    routes::slack::ENDPOINTS,
    AppState,
};

const API_TITLE: &str = "Slack REST Gateway";

/// `chat.postMessage` -> `chatPostMessage`
fn operation_id(slack_method: &str) -> String {
    slack_method
        .split('.')
        .enumerate()
        .map(|(i, part)| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) if i > 0 => first.to_uppercase().chain(chars).collect(),
                _ => part.to_string(),
            }
        })
        .collect()
}

fn field_schema(field: &Field) -> Value {
    match field.kind {
        FieldKind::Binary => json!({ "type": "string", "format": "byte", "description": field.description }),
        _ => json!({ "type": field.schema_type, "description": field.description }),
    }
}

fn success_schema(endpoint: &Endpoint) -> Value {
    let data = match endpoint.projection {
        Projection::Fields(names) => {
            let properties: Map<String, Value> = names
                .iter()
                .map(|name| (name.to_string(), json!({})))
                .collect();
            json!({ "type": "object", "properties": properties })
        }
        Projection::Confirmation(message) => json!({
            "type": "object",
            "properties": { "message": { "type": "string", "example": message } }
        }),
    };

    json!({
        "type": "object",
        "properties": {
            "success": { "type": "boolean", "example": true },
            "data": data
        }
    })
}

fn endpoint_operation(endpoint: &Endpoint) -> Value {
    let mut operation = json!({
        "tags": [endpoint.tag],
        "summary": endpoint.summary,
        "description": format!("Calls Slack `{}`.", endpoint.slack_method),
        "operationId": operation_id(endpoint.slack_method),
        "responses": {
            "200": {
                "description": "Success",
                "content": { "application/json": { "schema": success_schema(endpoint) } }
            },
            "400": {
                "description": "Missing required input",
                "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } } }
            },
            "500": {
                "description": "Slack or configuration error",
                "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } } }
            }
        }
    });

    match endpoint.source {
        ParamSource::Query => {
            let parameters: Vec<Value> = endpoint
                .fields
                .iter()
                .map(|field| {
                    json!({
                        "name": field.name,
                        "in": "query",
                        "required": field.kind == FieldKind::Required,
                        "schema": field_schema(field)
                    })
                })
                .collect();
            operation["parameters"] = Value::Array(parameters);
        }
        ParamSource::Body => {
            let properties: Map<String, Value> = endpoint
                .fields
                .iter()
                .map(|field| (field.name.to_string(), field_schema(field)))
                .collect();
            let required: Vec<&str> = endpoint.required_fields().map(|f| f.name).collect();

            let mut schema = json!({ "type": "object", "properties": properties });
            if !required.is_empty() {
                schema["required"] = json!(required);
            }
            if let Some(group) = &endpoint.alternatives {
                schema["description"] = json!(group.message);
            }

            operation["requestBody"] = json!({
                "required": true,
                "content": { "application/json": { "schema": schema } }
            });
        }
    }

    operation
}

fn static_paths() -> Map<String, Value> {
    let paths = json!({
        "/health": {
            "get": {
                "tags": ["system"],
                "summary": "Health check",
                "operationId": "getHealth",
                "responses": {
                    "200": {
                        "description": "Server is up",
                        "content": {
                            "application/json": {
                                "example": { "status": "ok", "version": env!("CARGO_PKG_VERSION"), "slack": "healthy" }
                            }
                        }
                    }
                }
            }
        },
        "/example": {
            "get": {
                "tags": ["example"],
                "summary": "Get example data",
                "operationId": "getExample",
                "responses": { "200": { "description": "Example payload" } }
            },
            "post": {
                "tags": ["example"],
                "summary": "Create example data",
                "operationId": "createExample",
                "requestBody": {
                    "required": true,
                    "content": {
                        "application/json": {
                            "schema": {
                                "type": "object",
                                "required": ["message"],
                                "properties": { "message": { "type": "string" } }
                            }
                        }
                    }
                },
                "responses": {
                    "201": { "description": "Created" },
                    "400": { "description": "Message is required" }
                }
            }
        }
    });

    match paths {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Build the full OpenAPI 3.0 spec as a JSON value.
pub fn openapi_spec() -> Value {
    let mut paths = static_paths();

    for endpoint in ENDPOINTS {
        let entry = paths
            .entry(endpoint.path.to_string())
            .or_insert_with(|| json!({}));
        entry[endpoint.source.http_method()] = endpoint_operation(endpoint);
    }

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": API_TITLE,
            "version": env!("CARGO_PKG_VERSION"),
            "description": "REST endpoints over the Slack Web API. Every response carries a `success` flag; failures add `error` and, for server-side failures, `details`."
        },
        "servers": [
            { "url": "/", "description": "Local development server" }
        ],
        "tags": [
            { "name": "system",        "description": "Health and API metadata" },
            { "name": "example",       "description": "Template endpoints" },
            { "name": "auth",          "description": "Slack credential check" },
            { "name": "messages",      "description": "Post, update and delete messages" },
            { "name": "reactions",     "description": "Emoji reactions" },
            { "name": "conversations", "description": "Channels and history" },
            { "name": "users",         "description": "Members and profiles" },
            { "name": "files",         "description": "Files" }
        ],
        "paths": paths,
        "components": {
            "schemas": {
                "ErrorResponse": {
                    "type": "object",
                    "required": ["success", "error"],
                    "properties": {
                        "success": { "type": "boolean", "example": false },
                        "error":   { "type": "string" },
                        "details": { "type": "object" }
                    }
                }
            }
        }
    })
}

/// Route index for `GET /api-info`.
pub fn api_info() -> Value {
    let mut endpoints = vec![
        json!({ "method": "GET",  "path": "/health",       "summary": "Health check" }),
        json!({ "method": "GET",  "path": "/api-info",     "summary": "API information" }),
        json!({ "method": "GET",  "path": "/openapi.json", "summary": "OpenAPI document" }),
        json!({ "method": "GET",  "path": "/example",      "summary": "Get example data" }),
        json!({ "method": "POST", "path": "/example",      "summary": "Create example data" }),
    ];
    endpoints.extend(ENDPOINTS.iter().map(|endpoint| {
        json!({
            "method": endpoint.source.http_method().to_uppercase(),
            "path": endpoint.path,
            "summary": endpoint.summary
        })
    }));

    json!({
        "message": API_TITLE,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": endpoints
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /openapi.json
async fn serve_openapi_json() -> Json<Value> {
    Json(openapi_spec())
}

/// GET /api-info
async fn serve_api_info() -> Json<Value> {
    Json(api_info())
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/openapi.json", get(serve_openapi_json))
        .route("/api-info", get(serve_api_info))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
