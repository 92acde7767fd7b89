//! Twilio Messages API gateway
//!
//! Sends SMS through `/2010-04-01/Accounts/<sid>/Messages.json` with HTTP
//! basic auth and a form-encoded body, the way the Twilio REST API expects.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use otp_core::domain::value_objects::{DispatchReceipt, MessagePayload};
use otp_core::errors::{ConfigError, DispatchError, ProviderErrorKind, RelayResult};
use otp_core::services::dispatch::MessageGateway;

/// Request timeout for Twilio API calls
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Twilio API configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Account SID
    pub account_sid: Option<String>,
    /// Auth token
    pub auth_token: Option<String>,
    /// Sender phone number (must be a Twilio number)
    pub from_number: Option<String>,
    /// API host, overridable for tests
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TwilioConfig {
    /// Capture configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            account_sid: std::env::var("TWILIO_ACCOUNT_SID").ok(),
            auth_token: std::env::var("TWILIO_AUTH_TOKEN").ok(),
            from_number: std::env::var("TWILIO_PHONE_NUMBER").ok(),
            base_url: std::env::var("TWILIO_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.twilio.com".to_string()),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Twilio SMS gateway
pub struct TwilioGateway {
    config: TwilioConfig,
    client: reqwest::Client,
}

impl TwilioGateway {
    /// Create a gateway over the given configuration
    pub fn new(config: TwilioConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a gateway from environment variables
    pub fn from_env() -> Self {
        Self::new(TwilioConfig::from_env())
    }

    /// Resolve credentials, failing fast on the first missing variable
    fn credentials(&self) -> Result<(&str, &str, &str), ConfigError> {
        let account_sid = self
            .config
            .account_sid
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::missing_var("TWILIO_ACCOUNT_SID"))?;
        let auth_token = self
            .config
            .auth_token
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::missing_var("TWILIO_AUTH_TOKEN"))?;
        let from_number = self
            .config
            .from_number
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::missing_var("TWILIO_PHONE_NUMBER"))?;
        Ok((account_sid, auth_token, from_number))
    }
}

#[async_trait]
impl MessageGateway for TwilioGateway {
    async fn send(&self, payload: &MessagePayload) -> RelayResult<DispatchReceipt> {
        let (account_sid, auth_token, from_number) = self.credentials()?;

        let body = match payload {
            MessagePayload::OtpText { body, .. } => body.as_str(),
            _ => {
                return Err(DispatchError::UnsupportedPayload {
                    provider: "twilio".to_string(),
                    kind: payload.kind(),
                }
                .into());
            }
        };

        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.base_url, account_sid
        );
        debug!(
            recipient = %payload.recipient().masked(),
            "Sending SMS via Twilio"
        );

        let form = [
            ("To", payload.recipient().as_str()),
            ("From", from_number),
            ("Body", body),
        ];
        let response = self
            .client
            .post(&url)
            .basic_auth(account_sid, Some(auth_token))
            .form(&form)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let parsed: Value = match response.json().await {
            Ok(value) => value,
            Err(_) if status.is_success() => return Err(DispatchError::InvalidResponse.into()),
            Err(_) => {
                return Err(DispatchError::Provider {
                    kind: ProviderErrorKind::Unknown,
                    code: None,
                    detail: "Twilio returned a non-JSON error response".to_string(),
                    status: status.as_u16(),
                }
                .into());
            }
        };

        if !status.is_success() {
            return Err(map_twilio_error(status.as_u16(), &parsed).into());
        }

        match parsed.get("sid").and_then(Value::as_str) {
            Some(sid) => Ok(DispatchReceipt::new(sid, self.provider_name())),
            None => Err(DispatchError::InvalidResponse.into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "twilio"
    }
}

fn map_transport_error(error: reqwest::Error) -> DispatchError {
    if error.is_timeout() {
        DispatchError::Timeout
    } else {
        DispatchError::Network {
            detail: error.to_string(),
        }
    }
}

/// Map a Twilio error body (`{code, message, status}`) to the taxonomy
///
/// 20003 is an authentication failure, 21211/21604 are recipient format
/// problems, 21610 is an unsubscribed recipient, 20429 is rate limiting.
fn map_twilio_error(http_status: u16, body: &Value) -> DispatchError {
    let code = body.get("code").and_then(Value::as_i64);
    let detail = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Twilio API error")
        .to_string();

    let kind = match code {
        Some(20003) => ProviderErrorKind::Authentication,
        Some(21211) | Some(21604) => ProviderErrorKind::InvalidRequest,
        Some(21610) => ProviderErrorKind::RecipientNotEligible,
        Some(20429) => ProviderErrorKind::RateLimited,
        _ => ProviderErrorKind::Unknown,
    };
    let status = match kind {
        ProviderErrorKind::Unknown => body
            .get("status")
            .and_then(Value::as_u64)
            .map(|s| s as u16)
            .filter(|s| (400..600).contains(s))
            .unwrap_or(http_status),
        _ => kind.suggested_status(),
    };

    DispatchError::Provider {
        kind,
        code: code.map(|c| c.to_string()),
        detail,
        status,
    }
}
