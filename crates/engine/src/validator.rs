//! Response validator: shape checks for the raw Practicum payload.
//!
//! Checks happen in a fixed order so that the first failing rule names the
//! problem: empty payload, not an object, missing `homeworks`, empty
//! `homeworks`, `homeworks` not an array. Record contents are left to the
//! formatter.

use serde_json::Value;

use herald_common::types::PollResponse;
use herald_common::{HeraldError, Result};

/// Validate a decoded poll payload and return its submissions in server order.
pub fn validate_response(payload: &Value) -> Result<PollResponse> {
    let map = match payload {
        Value::Null => return Err(schema("API response is empty")),
        Value::Object(map) if map.is_empty() => return Err(schema("API response is empty")),
        Value::Object(map) => map,
        other => {
            return Err(schema(format!(
                "API response is not an object (got {})",
                json_type(other)
            )));
        }
    };

    let raw = map
        .get("homeworks")
        .ok_or_else(|| schema("API response has no 'homeworks' key"))?;

    let homeworks = match raw {
        Value::Null => return Err(schema("'homeworks' in API response is empty")),
        Value::Array(items) if items.is_empty() => {
            return Err(schema("'homeworks' in API response is empty"));
        }
        Value::Array(items) => items.clone(),
        other => {
            return Err(schema(format!(
                "'homeworks' in API response is not a list (got {})",
                json_type(other)
            )));
        }
    };

    let current_date = map.get("current_date").and_then(Value::as_i64);

    tracing::debug!(
        records = homeworks.len(),
        current_date = ?current_date,
        "API response passed validation"
    );

    Ok(PollResponse {
        homeworks,
        current_date,
    })
}

fn schema(message: impl Into<String>) -> HeraldError {
    let message = message.into();
    tracing::error!(error = %message, "Invalid API response");
    HeraldError::Schema(message)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
