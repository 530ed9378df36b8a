use serde::de::DeserializeOwned;
use serde_json::Value;

use linkscan_core::SecurityReport;

use crate::engine::ARRAY_WRAPPER_KEY;
use crate::AiError;

/// Some providers wrap JSON output in a markdown fence even when a schema
/// was requested.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = body.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string, which may share a line with the payload.
    let body = body.trim();
    body.strip_prefix("json")
        .or_else(|| body.strip_prefix("JSON"))
        .unwrap_or(body)
        .trim()
}

fn parse_value(raw: &str) -> Result<Value, AiError> {
    serde_json::from_str(strip_code_fence(raw)).map_err(AiError::MalformedResponse)
}

/// Two-stage parse so callers can tell "not JSON" apart from "JSON of the
/// wrong shape".
fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, AiError> {
    serde_json::from_value(parse_value(raw)?).map_err(AiError::InvalidShape)
}

pub fn parse_report(raw: &str) -> Result<SecurityReport, AiError> {
    parse_json(raw)
}

/// Tips are returned as-is; the count is not enforced. Accepts the bare
/// array or the object wrapper used for backends that need an object root.
pub fn parse_tips(raw: &str) -> Result<Vec<String>, AiError> {
    let value = match parse_value(raw)? {
        Value::Object(mut obj) if obj.len() == 1 => match obj.remove(ARRAY_WRAPPER_KEY) {
            Some(inner) => inner,
            None => Value::Object(obj),
        },
        other => other,
    };
    serde_json::from_value(value).map_err(AiError::InvalidShape)
}
