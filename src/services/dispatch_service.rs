//! The validate → map → call → project pipeline shared by every Slack route.
//!
//! Pure helpers (`build_request`, `project`) are unit-tested here; `execute`
//! adds the single network call.

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use serde_json::{Map, Value};

use crate::{
    error::{AppError, AppResult},
    models::{Endpoint, FieldKind, ParamSource, Projection, SlackRequest},
    services::SlackService,
    utils::{is_truthy, validate_request},
};

/// Standard alphabet that tolerates missing padding and stray trailing bits.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Map request input onto Slack parameter names.
///
/// Only fields that are present survive: optional values are dropped when
/// falsy, flags are kept whenever given, integers are parsed and binary
/// payloads are decoded into `SlackRequest::file`.
pub fn build_request(endpoint: &Endpoint, input: &Map<String, Value>) -> AppResult<SlackRequest> {
    let mut request = SlackRequest::new(endpoint.slack_method);

    for field in endpoint.fields {
        let Some(value) = input.get(field.name) else {
            continue;
        };

        match field.kind {
            FieldKind::Required | FieldKind::Optional => {
                if is_truthy(value) {
                    request.params.insert(field.name.to_string(), value.clone());
                }
            }
            FieldKind::Flag => {
                let forwarded = match (endpoint.source, value) {
                    (ParamSource::Query, Value::String(s)) => Value::Bool(s == "true"),
                    (_, Value::Null) => continue,
                    (_, other) => other.clone(),
                };
                request.params.insert(field.name.to_string(), forwarded);
            }
            FieldKind::Integer => {
                if is_truthy(value) {
                    let parsed = parse_integer(field.name, value)?;
                    request.params.insert(field.name.to_string(), Value::from(parsed));
                }
            }
            FieldKind::Binary => {
                if is_truthy(value) {
                    request.file = Some(decode_base64(field.name, value)?);
                }
            }
        }
    }

    Ok(request)
}

/// Integer parameters follow leading-digit semantics: `"20.0"` is 20 and
/// `"50abc"` is 50. Input with no leading digits is rejected.
fn parse_integer(name: &str, value: &Value) -> AppResult<i64> {
    let invalid = || AppError::ParameterParse(format!("Invalid integer for '{name}': {value}"));

    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .ok_or_else(invalid),
        Value::String(s) => leading_integer(s).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Decode a base64 payload, ignoring whitespace and accepting the URL-safe
/// alphabet as well as the standard one.
fn decode_base64(name: &str, value: &Value) -> AppResult<Vec<u8>> {
    let encoded = value
        .as_str()
        .ok_or_else(|| AppError::ParameterParse(format!("'{name}' must be a base64 string")))?;

    let normalized: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    LENIENT_BASE64
        .decode(normalized)
        .map_err(|e| AppError::ParameterParse(format!("Invalid base64 in '{name}': {e}")))
}

/// Select the response `data` for an endpoint from the Slack result.
pub fn project(projection: &Projection, result: &Value) -> Value {
    match projection {
        Projection::Fields(names) => {
            let data: Map<String, Value> = names
                .iter()
                .filter_map(|name| result.get(*name).map(|v| (name.to_string(), v.clone())))
                .collect();
            Value::Object(data)
        }
        Projection::Confirmation(message) => serde_json::json!({ "message": message }),
    }
}

/// Run one endpoint end to end and return its success `data`.
pub async fn execute(
    endpoint: &Endpoint,
    slack: &SlackService,
    input: &Map<String, Value>,
) -> AppResult<Value> {
    validate_request(endpoint, input)?;

    let client = slack.client()?;
    let request = build_request(endpoint, input)?;

    tracing::debug!(
        method = endpoint.slack_method,
        params = ?request.params.keys().collect::<Vec<_>>(),
        has_file = request.file.is_some(),
        "Calling Slack API"
    );

    let result = client.call(request).await?;

    Ok(project(&endpoint.projection, &result))
}
