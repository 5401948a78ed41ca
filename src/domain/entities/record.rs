use serde_json::Value;

/// Text of a stored field the way an export cell shows it.
///
/// Falsy scalars (`null`, `false`, `0`, `""`) render empty. Objects and
/// arrays render as compact JSON.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "true".to_string(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `scalar_text` of `record[key]`, or `None` when the key is missing or falsy.
pub fn field_text(record: &Value, key: &str) -> Option<String> {
    record
        .get(key)
        .map(scalar_text)
        .filter(|text| !text.is_empty())
}
