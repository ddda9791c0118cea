//! Turn arbitrary error values into display strings.

use serde_json::Value;
use std::fmt::{self, Write};

/// Fallback when an error value has nothing usable to say.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Message for an error value received over the subprocess/IPC boundary.
///
/// Strings are used as-is, objects contribute a non-blank `message` field,
/// `null` becomes [`UNKNOWN_ERROR`], and anything else is rendered as JSON.
pub fn error_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => UNKNOWN_ERROR.to_string(),
        Value::Object(map) => match map.get("message") {
            Some(Value::String(msg)) if !msg.trim().is_empty() => msg.clone(),
            _ => value.to_string(),
        },
        other => other.to_string(),
    }
}

/// Message for any displayable error. Never panics, even if `Display` fails.
pub fn describe_error<E: fmt::Display + ?Sized>(err: &E) -> String {
    let mut out = String::new();
    match write!(out, "{err}") {
        Ok(()) => out,
        Err(_) => UNKNOWN_ERROR.to_string(),
    }
}
