//! Validated contact identifiers.

use otp_shared::utils::phone::mask_phone;
use serde::{Deserialize, Serialize};

/// A delivery destination that passed request validation
///
/// Only the request validator constructs these, so downstream stages can
/// rely on a phone being in canonical `+<country><national>` form and an
/// email being present and non-empty. The value is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactIdentifier {
    /// Canonical E.164-style phone number
    Phone(String),
    /// Email address, accepted as-is after a presence check
    Email(String),
}

impl ContactIdentifier {
    /// The raw identifier as handed to a provider
    pub fn as_str(&self) -> &str {
        match self {
            Self::Phone(phone) => phone,
            Self::Email(email) => email,
        }
    }

    /// A log-safe rendering that hides most of the identifier
    pub fn masked(&self) -> String {
        match self {
            Self::Phone(phone) => mask_phone(phone),
            Self::Email(email) => mask_email(email),
        }
    }
}

/// Mask an email address for logging, keeping the first character and domain
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = &local[..local.chars().next().map_or(0, char::len_utf8)];
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}
