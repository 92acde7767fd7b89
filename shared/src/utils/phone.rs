//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Indian mobile subscriber number: 10 digits, first digit 6-9
static INDIAN_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[6-9]\d{9}$").unwrap()
});

// International phone number (E.164 format)
static E164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{7,14}$").unwrap()
});

/// Remove all whitespace from a phone number
pub fn strip_whitespace(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Normalize an Indian mobile number to canonical `+91` form
///
/// Normalization order: strip whitespace, strip leading zeros, strip an
/// existing `+91` prefix, then require exactly 10 digits starting with 6-9.
/// Returns `None` when the input does not reduce to a valid subscriber
/// number.
pub fn normalize_indian_mobile(phone: &str) -> Option<String> {
    let stripped = strip_whitespace(phone);
    let stripped = stripped.trim_start_matches('0');
    let national = stripped.strip_prefix("+91").unwrap_or(stripped);
    if INDIAN_MOBILE_REGEX.is_match(national) {
        Some(format!("+91{}", national))
    } else {
        None
    }
}

/// Check if a phone number is in valid E.164 format
pub fn is_valid_e164(phone: &str) -> bool {
    E164_REGEX.is_match(&strip_whitespace(phone))
}

/// Mask a phone number for logging, keeping only the last 4 digits
///
/// Numbers with 4 or fewer digits past an optional `+` are masked
/// entirely; a value too short to partially hide is never echoed as-is.
pub fn mask_phone(phone: &str) -> String {
    let (prefix, rest) = match phone.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", phone),
    };

    let visible = 4;
    if rest.len() <= visible {
        return format!("{}{}", prefix, "*".repeat(rest.len()));
    }

    format!(
        "{}{}{}",
        prefix,
        "*".repeat(rest.len() - visible),
        &rest[rest.len() - visible..]
    )
}
