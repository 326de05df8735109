//! Typed coercion of JSON request values.
//!
//! Request bodies arrive as untyped JSON objects. Parameter builders read each
//! whitelisted field through these helpers so a wrong JSON type becomes a
//! `ValidationError` naming the field instead of a deserialization failure.

use serde_json::Value;

use crate::server::error::validation::ValidationError;

/// Reads a non-null JSON string.
pub fn required_string(key: &str, value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::Null => Err(ValidationError::MissingField(key.to_string())),
        Value::String(s) => Ok(s.clone()),
        _ => Err(ValidationError::InvalidType {
            field: key.to_string(),
            expected: "a string",
        }),
    }
}

/// Reads a non-null JSON integer.
///
/// Floats are rejected even when they have no fractional part.
pub fn required_integer(key: &str, value: &Value) -> Result<i64, ValidationError> {
    match value {
        Value::Null => Err(ValidationError::MissingField(key.to_string())),
        Value::Number(n) => n.as_i64().ok_or_else(|| ValidationError::InvalidType {
            field: key.to_string(),
            expected: "an integer",
        }),
        _ => Err(ValidationError::InvalidType {
            field: key.to_string(),
            expected: "an integer",
        }),
    }
}

/// Reads a row id referenced by a foreign key.
pub fn required_id(key: &str, value: &Value) -> Result<i32, ValidationError> {
    let id = required_integer(key, value)?;

    i32::try_from(id).map_err(|_| ValidationError::InvalidType {
        field: key.to_string(),
        expected: "a valid id",
    })
}
