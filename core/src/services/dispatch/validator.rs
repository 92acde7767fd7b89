//! Request validation and contact normalization.
//!
//! The hosting platform hands bodies over in two shapes: a JSON object, or
//! a JSON string that itself contains the encoded object. Both are accepted
//! here so the HTTP layer can pass raw bytes straight through and every
//! malformed body produces the same normalized 400, not a framework error.

use otp_shared::utils::phone::{is_valid_e164, normalize_indian_mobile, strip_whitespace};
use serde_json::Value;

use super::config::PhonePolicy;
use crate::domain::value_objects::ContactIdentifier;
use crate::errors::ValidationError;

/// Parse a raw request body into a JSON object
///
/// An empty body is treated as `{}` so that missing-field errors win over
/// malformed-body errors, matching the platform's behavior of delivering
/// no body at all for bodiless requests.
pub fn parse_body(raw: &[u8]) -> Result<Value, ValidationError> {
    let text = std::str::from_utf8(raw).map_err(|_| ValidationError::MalformedBody)?;
    if text.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    let value: Value = serde_json::from_str(text).map_err(|_| ValidationError::MalformedBody)?;

    // Double-encoded body: a JSON string wrapping the actual object
    let value = match value {
        Value::String(inner) => {
            serde_json::from_str(&inner).map_err(|_| ValidationError::MalformedBody)?
        }
        other => other,
    };

    match value {
        Value::Object(_) => Ok(value),
        _ => Err(ValidationError::MalformedBody),
    }
}

/// Extract and normalize the `phoneNumber` field under the given policy
pub fn validate_phone(
    body: &Value,
    policy: PhonePolicy,
) -> Result<ContactIdentifier, ValidationError> {
    let phone = match body.get("phoneNumber").and_then(Value::as_str) {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Err(ValidationError::PhoneRequired),
    };

    match policy {
        PhonePolicy::IndianMobile => normalize_indian_mobile(phone)
            .map(ContactIdentifier::Phone)
            .ok_or(ValidationError::InvalidIndianMobile),
        PhonePolicy::E164 => {
            let stripped = strip_whitespace(phone);
            if is_valid_e164(&stripped) {
                Ok(ContactIdentifier::Phone(stripped))
            } else {
                Err(ValidationError::InvalidE164)
            }
        }
    }
}

/// Extract the `email` field
///
/// Only presence and non-emptiness are checked; the format is taken on
/// trust. This mirrors the upstream behavior and is a documented weak
/// point, not an oversight.
pub fn validate_email(body: &Value) -> Result<ContactIdentifier, ValidationError> {
    match body.get("email").and_then(Value::as_str) {
        Some(value) if !value.trim().is_empty() => {
            Ok(ContactIdentifier::Email(value.to_string()))
        }
        _ => Err(ValidationError::EmailRequired),
    }
}

/// Extract the optional `name` field used to personalize emails
pub fn optional_name(body: &Value) -> Option<String> {
    body.get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
