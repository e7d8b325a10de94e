//! Sanitization of raw API records
//!
//! Control characters (Unicode category Cc) are replaced with a space, runs of
//! whitespace are collapsed to one space, and the result is trimmed. Applied
//! recursively to every string value; object keys are left alone.

use serde_json::Value;

/// Sanitize every string inside `value`.
pub fn sanitize_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(sanitize_str(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_value).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, sanitize_value(v)))
                .collect(),
        ),
        other => other,
    }
}

pub fn sanitize_str(s: &str) -> String {
    let replaced: String = s
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
