//! Configuration for the dispatch pipeline.

/// How inbound phone numbers are validated and canonicalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonePolicy {
    /// Regional policy: 10 digits starting 6-9, canonicalized to `+91...`
    IndianMobile,
    /// Generic policy: the input must already be E.164
    E164,
}

impl PhonePolicy {
    fn from_str(value: &str) -> Self {
        match value {
            "e164" => Self::E164,
            _ => Self::IndianMobile,
        }
    }
}

/// Which message shape the OTP channel uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpStyle {
    /// Provider-predefined template with the code as a body parameter
    Template,
    /// Free-text body with greeting, code, and expiry notice
    Text,
}

impl OtpStyle {
    /// Derive the message style from the selected OTP provider
    ///
    /// WhatsApp template sends require an approved template; the free-text
    /// WhatsApp variant and SMS both carry a plain body.
    pub fn for_provider(provider: &str) -> Self {
        match provider {
            "whatsapp-text" | "twilio" => Self::Text,
            _ => Self::Template,
        }
    }
}

/// Configuration for the dispatch service
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Phone validation policy
    pub phone_policy: PhonePolicy,
    /// OTP message shape
    pub otp_style: OtpStyle,
    /// Template name for template-style sends
    pub template_name: String,
    /// Template language code
    pub template_language: String,
    /// Minutes quoted in the expiry notice of free-text messages
    pub expiry_minutes: i64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            phone_policy: PhonePolicy::IndianMobile,
            otp_style: OtpStyle::Template,
            template_name: String::from("otp"),
            template_language: String::from("en_US"),
            expiry_minutes: 10,
        }
    }
}

impl DispatchConfig {
    /// Load pipeline configuration from environment variables
    ///
    /// Unset or unparseable values fall back to the defaults; missing
    /// provider credentials are deliberately not checked here, they
    /// surface per request from the gateway.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let provider = std::env::var("OTP_PROVIDER").unwrap_or_default();
        Self {
            phone_policy: std::env::var("PHONE_POLICY")
                .map(|v| PhonePolicy::from_str(&v))
                .unwrap_or(defaults.phone_policy),
            otp_style: OtpStyle::for_provider(&provider),
            template_name: std::env::var("OTP_TEMPLATE_NAME").unwrap_or(defaults.template_name),
            template_language: std::env::var("OTP_TEMPLATE_LANGUAGE")
                .unwrap_or(defaults.template_language),
            expiry_minutes: std::env::var("OTP_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.expiry_minutes),
        }
    }
}
