//! Provider gateway implementations
//!
//! One module per provider, each owning its credential capture, wire
//! format, and error-code mapping. Gateways perform exactly one outbound
//! call per send; there is no retry or backoff anywhere in this layer.

use std::sync::Arc;

use otp_core::services::dispatch::MessageGateway;

pub mod mock;
pub mod resend;
pub mod twilio;
pub mod whatsapp;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use mock::MockGateway;
pub use resend::{ResendConfig, ResendGateway};
pub use twilio::{TwilioConfig, TwilioGateway};
pub use whatsapp::{WhatsAppConfig, WhatsAppGateway};

/// Create the OTP delivery gateway for the configured provider
///
/// `whatsapp` and `whatsapp-text` share the same gateway; the message
/// style difference lives in the composer, not here. Unknown provider
/// keys fall back to the mock gateway with a warning rather than taking
/// the service down.
pub fn create_otp_gateway(provider: &str) -> Arc<dyn MessageGateway> {
    match provider {
        "whatsapp" | "whatsapp-text" => Arc::new(WhatsAppGateway::from_env()),
        "twilio" => Arc::new(TwilioGateway::from_env()),
        "mock" => Arc::new(MockGateway::new()),
        other => {
            tracing::warn!(
                provider = other,
                "Unknown OTP provider, falling back to mock gateway"
            );
            Arc::new(MockGateway::new())
        }
    }
}

/// Create the email delivery gateway for the configured provider
pub fn create_email_gateway(provider: &str) -> Arc<dyn MessageGateway> {
    match provider {
        "resend" => Arc::new(ResendGateway::from_env()),
        "mock" => Arc::new(MockGateway::new()),
        other => {
            tracing::warn!(
                provider = other,
                "Unknown email provider, falling back to mock gateway"
            );
            Arc::new(MockGateway::new())
        }
    }
}
