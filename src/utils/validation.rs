use serde_json::{Map, Value};

use crate::{
    error::{AppError, AppResult},
    models::Endpoint,
};

/// Whether a request value counts as "present" for required and optional
/// fields: non-empty strings, non-zero numbers, `true`, any array or object.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Truthiness of a named input, absent keys being falsy.
pub fn has_value(input: &Map<String, Value>, name: &str) -> bool {
    input.get(name).map(is_truthy).unwrap_or(false)
}

/// Check required fields, then the alternative group, before any Slack call.
pub fn validate_request(endpoint: &Endpoint, input: &Map<String, Value>) -> AppResult<()> {
    if endpoint
        .required_fields()
        .any(|field| !has_value(input, field.name))
    {
        return Err(AppError::Validation(endpoint.missing_message.to_string()));
    }

    if let Some(group) = &endpoint.alternatives {
        if !group.fields.iter().any(|name| has_value(input, name)) {
            return Err(AppError::Validation(group.message.to_string()));
        }
    }

    Ok(())
}
