//! WhatsApp Cloud API gateway
//!
//! Sends template and free-text messages through the Graph API
//! `/<version>/<phone-number-id>/messages` endpoint with a bearer token.
//! Graph error codes are mapped to the shared provider error taxonomy so
//! callers see a stable status instead of raw Graph responses.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use otp_core::domain::value_objects::{DispatchReceipt, MessagePayload};
use otp_core::errors::{ConfigError, DispatchError, ProviderErrorKind, RelayResult};
use otp_core::services::dispatch::MessageGateway;

/// Request timeout for Graph API calls
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// WhatsApp Cloud API configuration
///
/// Credentials are captured as `Option`s so a missing variable surfaces as
/// a per-request configuration error instead of a startup crash.
#[derive(Debug, Clone)]
pub struct WhatsAppConfig {
    /// Graph API bearer token
    pub access_token: Option<String>,
    /// Sender phone-number identifier
    pub phone_number_id: Option<String>,
    /// Graph API version segment
    pub api_version: String,
    /// Graph host, overridable for tests
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl WhatsAppConfig {
    /// Capture configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            access_token: std::env::var("WHATSAPP_ACCESS_TOKEN").ok(),
            phone_number_id: std::env::var("WHATSAPP_PHONE_NUMBER_ID").ok(),
            api_version: std::env::var("WHATSAPP_API_VERSION")
                .unwrap_or_else(|_| "v21.0".to_string()),
            base_url: std::env::var("WHATSAPP_GRAPH_BASE_URL")
                .unwrap_or_else(|_| "https://graph.facebook.com".to_string()),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

/// WhatsApp Cloud API gateway
pub struct WhatsAppGateway {
    config: WhatsAppConfig,
    client: reqwest::Client,
}

impl WhatsAppGateway {
    /// Create a gateway over the given configuration
    pub fn new(config: WhatsAppConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a gateway from environment variables
    pub fn from_env() -> Self {
        Self::new(WhatsAppConfig::from_env())
    }

    /// Resolve credentials, failing fast on the first missing variable
    fn credentials(&self) -> Result<(&str, &str), ConfigError> {
        let token = self
            .config
            .access_token
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::missing_var("WHATSAPP_ACCESS_TOKEN"))?;
        let phone_number_id = self
            .config
            .phone_number_id
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::missing_var("WHATSAPP_PHONE_NUMBER_ID"))?;
        Ok((token, phone_number_id))
    }

    fn build_body(&self, payload: &MessagePayload) -> Result<Value, DispatchError> {
        match payload {
            MessagePayload::OtpTemplate {
                to,
                template_name,
                language,
                code,
            } => Ok(json!({
                "messaging_product": "whatsapp",
                "to": to.as_str(),
                "type": "template",
                "template": {
                    "name": template_name,
                    "language": { "code": language },
                    "components": [{
                        "type": "body",
                        "parameters": [{
                            "type": "text",
                            "text": code.as_str(),
                        }],
                    }],
                },
            })),
            MessagePayload::OtpText { to, body } => Ok(json!({
                "messaging_product": "whatsapp",
                "to": to.as_str(),
                "type": "text",
                "text": { "body": body },
            })),
            MessagePayload::WelcomeEmail { .. } => Err(DispatchError::UnsupportedPayload {
                provider: "whatsapp".to_string(),
                kind: payload.kind(),
            }),
        }
    }
}

#[async_trait]
impl MessageGateway for WhatsAppGateway {
    async fn send(&self, payload: &MessagePayload) -> RelayResult<DispatchReceipt> {
        let (token, phone_number_id) = self.credentials()?;
        let body = self.build_body(payload)?;

        let url = format!(
            "{}/{}/{}/messages",
            self.config.base_url, self.config.api_version, phone_number_id
        );
        debug!(
            recipient = %payload.recipient().masked(),
            kind = payload.kind(),
            "Sending message via WhatsApp Cloud API"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|_| DispatchError::InvalidResponse)?;
        let parsed: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) if status.is_success() => return Err(DispatchError::InvalidResponse.into()),
            Err(_) => {
                return Err(DispatchError::Provider {
                    kind: ProviderErrorKind::Unknown,
                    code: None,
                    detail: truncate(&text, 200),
                    status: status.as_u16(),
                }
                .into());
            }
        };

        if let Some(error) = parsed.get("error") {
            return Err(map_graph_error(status.as_u16(), error).into());
        }
        if !status.is_success() {
            return Err(DispatchError::Provider {
                kind: ProviderErrorKind::Unknown,
                code: None,
                detail: truncate(&text, 200),
                status: status.as_u16(),
            }
            .into());
        }

        match parsed
            .pointer("/messages/0/id")
            .and_then(Value::as_str)
        {
            Some(message_id) => Ok(DispatchReceipt::new(message_id, self.provider_name())),
            None => Err(DispatchError::InvalidResponse.into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "whatsapp"
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

/// Map a Graph API error object to the provider taxonomy
///
/// Code references: 0/190 are token problems, 100 is a malformed request,
/// 131026 means the recipient cannot receive messages, 131047 is the
/// re-engagement window, 130429 is throughput throttling, 131016 is a
/// service outage.
fn map_graph_error(http_status: u16, error: &Value) -> DispatchError {
    let code = error.get("code").and_then(Value::as_i64);
    let detail = error
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("WhatsApp API error")
        .to_string();

    let kind = match code {
        Some(0) | Some(190) => ProviderErrorKind::Authentication,
        Some(100) => ProviderErrorKind::InvalidRequest,
        Some(131026) | Some(131047) => ProviderErrorKind::RecipientNotEligible,
        Some(130429) => ProviderErrorKind::RateLimited,
        Some(131016) => ProviderErrorKind::Unavailable,
        _ => ProviderErrorKind::Unknown,
    };
    let status = match kind {
        ProviderErrorKind::Unknown if (400..600).contains(&http_status) => http_status,
        _ => kind.suggested_status(),
    };

    DispatchError::Provider {
        kind,
        code: code.map(|c| c.to_string()),
        detail,
        status,
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() <= max {
        text.trim().to_string()
    } else {
        let mut end = max;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end].trim())
    }
}
