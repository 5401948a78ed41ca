use serde_json::Value;

use crate::app_error::{AppError, AppResult};

/// Accepts any string containing `@`. Anything stricter is left to the form.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@')
}

/// Pulls the email out of a loosely typed signup payload.
/// Missing, non-string or `@`-less values are rejected.
pub fn require_email(value: Option<&Value>) -> AppResult<&str> {
    match value.and_then(Value::as_str) {
        Some(email) if is_valid_email(email) => Ok(email),
        _ => Err(AppError::InvalidEmail),
    }
}

/// A referral attribution is kept only when it is a non-empty string.
pub fn optional_referrer(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|code| !code.is_empty())
        .map(str::to_owned)
}
