//! Messaging provider selection
//!
//! Each delivery channel is served by exactly one provider gateway, chosen
//! per deployment through environment variables. The strings here are keys
//! into the gateway factory in the infrastructure layer.

use serde::{Deserialize, Serialize};

/// Provider selection per delivery channel
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// OTP delivery provider ("whatsapp", "whatsapp-text", "twilio", "mock")
    pub otp: String,

    /// Email delivery provider ("resend", "mock")
    pub email: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            otp: String::from("whatsapp"),
            email: String::from("resend"),
        }
    }
}

impl ProviderConfig {
    /// Load provider selection from `OTP_PROVIDER` / `EMAIL_PROVIDER`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            otp: std::env::var("OTP_PROVIDER").unwrap_or(defaults.otp),
            email: std::env::var("EMAIL_PROVIDER").unwrap_or(defaults.email),
        }
    }
}
