//! Dispatch service orchestrating the pipeline stages.

use std::sync::Arc;
use tracing;

use super::composer;
use super::config::{DispatchConfig, OtpStyle};
use super::traits::MessageGateway;
use super::validator;
use crate::domain::entities::one_time_code::OneTimeCode;
use crate::domain::value_objects::{DispatchReceipt, MessagePayload};
use crate::errors::{RelayError, RelayResult};

/// The request pipeline: validate, generate, compose, send
///
/// Stateless across invocations; one service instance is shared by every
/// request for a channel. The gateway behind the trait object is the only
/// stage that performs I/O.
#[derive(Clone)]
pub struct DispatchService {
    gateway: Arc<dyn MessageGateway>,
    config: DispatchConfig,
}

impl DispatchService {
    /// Create a new dispatch service
    pub fn new(gateway: Arc<dyn MessageGateway>, config: DispatchConfig) -> Self {
        Self { gateway, config }
    }

    /// Validate the raw body and dispatch a one-time code to the phone
    ///
    /// Stages run strictly in order and short-circuit on the first typed
    /// failure: an invalid body never reaches composition, and a composed
    /// payload is only sent after the gateway resolves its credentials.
    pub async fn send_otp(&self, raw_body: &[u8]) -> RelayResult<DispatchReceipt> {
        let body = validator::parse_body(raw_body)?;
        let contact = validator::validate_phone(&body, self.config.phone_policy)?;

        let code = OneTimeCode::generate();
        let payload = match self.config.otp_style {
            OtpStyle::Template => composer::compose_otp_template(contact, code, &self.config),
            OtpStyle::Text => composer::compose_otp_text(contact, code, &self.config),
        };

        self.deliver(payload).await
    }

    /// Validate the raw body and dispatch the welcome email
    pub async fn send_welcome_email(&self, raw_body: &[u8]) -> RelayResult<DispatchReceipt> {
        let body = validator::parse_body(raw_body)?;
        let contact = validator::validate_email(&body)?;
        let name = validator::optional_name(&body);

        let payload = composer::compose_welcome_email(contact, name.as_deref());
        self.deliver(payload).await
    }

    async fn deliver(&self, payload: MessagePayload) -> RelayResult<DispatchReceipt> {
        let recipient = payload.recipient().masked();
        let kind = payload.kind();
        let provider = self.gateway.provider_name();

        tracing::info!(
            recipient = %recipient,
            kind = kind,
            provider = provider,
            event = "message_dispatch",
            "Dispatching message"
        );

        match self.gateway.send(&payload).await {
            Ok(receipt) => {
                tracing::info!(
                    recipient = %recipient,
                    provider = provider,
                    message_id = %receipt.message_id,
                    event = "message_dispatched",
                    "Provider accepted message"
                );
                Ok(receipt)
            }
            Err(error) => {
                match &error {
                    RelayError::Config(config_error) => tracing::error!(
                        provider = provider,
                        missing = %config_error.missing,
                        event = "configuration_error",
                        "Provider credentials incomplete"
                    ),
                    _ => tracing::warn!(
                        recipient = %recipient,
                        provider = provider,
                        error = %error,
                        event = "message_dispatch_failed",
                        "Provider send failed"
                    ),
                }
                Err(error)
            }
        }
    }
}
