use serde_json::Value;

/// JavaScript-style truthiness, which is what webhook payloads are judged by.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Pick the display text out of a webhook payload.
///
/// The webhook has no fixed schema, so the first truthy of `summary`, `text`
/// and the payload itself wins. Strings are returned as-is, anything else as
/// compact JSON.
pub fn coerce_summary(payload: &Value) -> String {
    let chosen = ["summary", "text"]
        .iter()
        .filter_map(|key| payload.get(key))
        .find(|v| is_truthy(v))
        .unwrap_or(payload);

    match chosen {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;
