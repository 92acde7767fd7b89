//! Resend email gateway
//!
//! Sends transactional email through the Resend-style `/emails` endpoint
//! with a bearer API key and a JSON body of `{from, to, subject, html}`.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use otp_core::domain::value_objects::{DispatchReceipt, MessagePayload};
use otp_core::errors::{ConfigError, DispatchError, ProviderErrorKind, RelayResult};
use otp_core::services::dispatch::MessageGateway;

/// Request timeout for email API calls
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Resend API configuration
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// API key
    pub api_key: Option<String>,
    /// Verified sender address
    pub from_address: Option<String>,
    /// API host, overridable for tests
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ResendConfig {
    /// Capture configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("RESEND_API_KEY").ok(),
            from_address: std::env::var("EMAIL_FROM_ADDRESS").ok(),
            base_url: std::env::var("RESEND_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.resend.com".to_string()),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Resend email gateway
pub struct ResendGateway {
    config: ResendConfig,
    client: reqwest::Client,
}

impl ResendGateway {
    /// Create a gateway over the given configuration
    pub fn new(config: ResendConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a gateway from environment variables
    pub fn from_env() -> Self {
        Self::new(ResendConfig::from_env())
    }

    /// Resolve credentials, failing fast on the first missing variable
    fn credentials(&self) -> Result<(&str, &str), ConfigError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::missing_var("RESEND_API_KEY"))?;
        let from_address = self
            .config
            .from_address
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::missing_var("EMAIL_FROM_ADDRESS"))?;
        Ok((api_key, from_address))
    }
}

#[async_trait]
impl MessageGateway for ResendGateway {
    async fn send(&self, payload: &MessagePayload) -> RelayResult<DispatchReceipt> {
        let (api_key, from_address) = self.credentials()?;

        let (to, subject, html) = match payload {
            MessagePayload::WelcomeEmail { to, subject, html } => (to, subject, html),
            _ => {
                return Err(DispatchError::UnsupportedPayload {
                    provider: "resend".to_string(),
                    kind: payload.kind(),
                }
                .into());
            }
        };

        let url = format!("{}/emails", self.config.base_url);
        debug!(recipient = %to.masked(), "Sending email via Resend");

        let body = json!({
            "from": from_address,
            "to": to.as_str(),
            "subject": subject,
            "html": html,
        });
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let parsed: Value = response.json().await.unwrap_or(Value::Null);
            return Err(map_resend_error(status.as_u16(), &parsed).into());
        }

        let parsed: Value = response
            .json()
            .await
            .map_err(|_| DispatchError::InvalidResponse)?;
        match parsed.get("id").and_then(Value::as_str) {
            Some(id) => Ok(DispatchReceipt::new(id, self.provider_name())),
            None => Err(DispatchError::InvalidResponse.into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "resend"
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

/// Map a Resend error response to the taxonomy by HTTP status
fn map_resend_error(http_status: u16, body: &Value) -> DispatchError {
    let detail = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Email API error")
        .to_string();
    let code = body
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string);

    let kind = match http_status {
        401 | 403 => ProviderErrorKind::Authentication,
        422 => ProviderErrorKind::InvalidRequest,
        429 => ProviderErrorKind::RateLimited,
        _ => ProviderErrorKind::Unknown,
    };
    let status = match kind {
        ProviderErrorKind::Unknown => http_status,
        _ => kind.suggested_status(),
    };

    DispatchError::Provider {
        kind,
        code,
        detail,
        status,
    }
}
