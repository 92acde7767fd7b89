//! Provider-bound message payloads.

use serde::{Deserialize, Serialize};

use super::contact::ContactIdentifier;
use crate::domain::entities::one_time_code::OneTimeCode;

/// A fully composed message, ready for exactly one provider send
///
/// Each variant carries everything a gateway needs to build its wire
/// request; gateways that cannot express a variant reject it as an
/// unsupported payload rather than guessing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessagePayload {
    /// Template invocation carrying the code as the single body parameter
    OtpTemplate {
        to: ContactIdentifier,
        template_name: String,
        language: String,
        code: OneTimeCode,
    },
    /// Free-text message with the code interpolated into the body
    OtpText {
        to: ContactIdentifier,
        body: String,
    },
    /// Transactional welcome email
    WelcomeEmail {
        to: ContactIdentifier,
        subject: String,
        html: String,
    },
}

impl MessagePayload {
    /// The recipient this payload is addressed to
    pub fn recipient(&self) -> &ContactIdentifier {
        match self {
            Self::OtpTemplate { to, .. } => to,
            Self::OtpText { to, .. } => to,
            Self::WelcomeEmail { to, .. } => to,
        }
    }

    /// Short kind label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OtpTemplate { .. } => "otp_template",
            Self::OtpText { .. } => "otp_text",
            Self::WelcomeEmail { .. } => "welcome_email",
        }
    }
}
