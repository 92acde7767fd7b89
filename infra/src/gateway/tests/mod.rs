//! Unit tests for gateway credential handling and the mock gateway
//!
//! Everything here must fail before any socket is opened, so the configs
//! point at an unroutable base URL; a test that accidentally reaches the
//! network fails loudly instead of hanging.

use rand::rngs::mock::StepRng;

use otp_core::domain::entities::one_time_code::OneTimeCode;
use otp_core::domain::value_objects::{ContactIdentifier, MessagePayload};
use otp_core::errors::{DispatchError, RelayError};
use otp_core::services::dispatch::MessageGateway;

use super::mock::MockGateway;
use super::resend::{ResendConfig, ResendGateway};
use super::twilio::{TwilioConfig, TwilioGateway};
use super::whatsapp::{WhatsAppConfig, WhatsAppGateway};

const UNROUTABLE: &str = "http://127.0.0.1:9";

fn template_payload() -> MessagePayload {
    MessagePayload::OtpTemplate {
        to: ContactIdentifier::Phone("+919876543210".into()),
        template_name: "otp".into(),
        language: "en_US".into(),
        code: OneTimeCode::generate_with(&mut StepRng::new(1, 0)),
    }
}

fn text_payload() -> MessagePayload {
    MessagePayload::OtpText {
        to: ContactIdentifier::Phone("+919876543210".into()),
        body: "Your verification code is 123456.".into(),
    }
}

fn email_payload() -> MessagePayload {
    MessagePayload::WelcomeEmail {
        to: ContactIdentifier::Email("user@example.com".into()),
        subject: "Welcome aboard!".into(),
        html: "<p>hi</p>".into(),
    }
}

fn whatsapp_config(token: Option<&str>, phone_id: Option<&str>) -> WhatsAppConfig {
    WhatsAppConfig {
        access_token: token.map(str::to_string),
        phone_number_id: phone_id.map(str::to_string),
        api_version: "v21.0".into(),
        base_url: UNROUTABLE.into(),
        timeout_secs: 1,
    }
}

fn assert_missing(result: Result<(), RelayError>, var: &str) {
    match result.unwrap_err() {
        RelayError::Config(error) => assert_eq!(error.missing, var),
        other => panic!("expected config error for {}, got {:?}", var, other),
    }
}

#[tokio::test]
async fn test_whatsapp_reports_missing_token_first() {
    let gateway = WhatsAppGateway::new(whatsapp_config(None, Some("12345")));
    let result = gateway.send(&template_payload()).await.map(drop);
    assert_missing(result, "WHATSAPP_ACCESS_TOKEN");

    // Empty strings count as missing too
    let gateway = WhatsAppGateway::new(whatsapp_config(Some(""), Some("12345")));
    let result = gateway.send(&template_payload()).await.map(drop);
    assert_missing(result, "WHATSAPP_ACCESS_TOKEN");
}

#[tokio::test]
async fn test_whatsapp_reports_missing_phone_number_id() {
    let gateway = WhatsAppGateway::new(whatsapp_config(Some("token"), None));
    let result = gateway.send(&template_payload()).await.map(drop);
    assert_missing(result, "WHATSAPP_PHONE_NUMBER_ID");
}

#[tokio::test]
async fn test_whatsapp_rejects_email_payload() {
    let gateway = WhatsAppGateway::new(whatsapp_config(Some("token"), Some("12345")));
    match gateway.send(&email_payload()).await.unwrap_err() {
        RelayError::Dispatch(DispatchError::UnsupportedPayload { provider, kind }) => {
            assert_eq!(provider, "whatsapp");
            assert_eq!(kind, "welcome_email");
        }
        other => panic!("expected unsupported payload, got {:?}", other),
    }
}

fn twilio_config(
    sid: Option<&str>,
    token: Option<&str>,
    from: Option<&str>,
) -> TwilioConfig {
    TwilioConfig {
        account_sid: sid.map(str::to_string),
        auth_token: token.map(str::to_string),
        from_number: from.map(str::to_string),
        base_url: UNROUTABLE.into(),
        timeout_secs: 1,
    }
}

#[tokio::test]
async fn test_twilio_reports_missing_credentials_in_order() {
    let gateway = TwilioGateway::new(twilio_config(None, Some("t"), Some("+15550001111")));
    let result = gateway.send(&text_payload()).await.map(drop);
    assert_missing(result, "TWILIO_ACCOUNT_SID");

    let gateway = TwilioGateway::new(twilio_config(Some("AC1"), None, Some("+15550001111")));
    let result = gateway.send(&text_payload()).await.map(drop);
    assert_missing(result, "TWILIO_AUTH_TOKEN");

    let gateway = TwilioGateway::new(twilio_config(Some("AC1"), Some("t"), None));
    let result = gateway.send(&text_payload()).await.map(drop);
    assert_missing(result, "TWILIO_PHONE_NUMBER");
}

#[tokio::test]
async fn test_twilio_rejects_template_payload() {
    let gateway = TwilioGateway::new(twilio_config(Some("AC1"), Some("t"), Some("+15550001111")));
    match gateway.send(&template_payload()).await.unwrap_err() {
        RelayError::Dispatch(DispatchError::UnsupportedPayload { provider, kind }) => {
            assert_eq!(provider, "twilio");
            assert_eq!(kind, "otp_template");
        }
        other => panic!("expected unsupported payload, got {:?}", other),
    }
}

fn resend_config(key: Option<&str>, from: Option<&str>) -> ResendConfig {
    ResendConfig {
        api_key: key.map(str::to_string),
        from_address: from.map(str::to_string),
        base_url: UNROUTABLE.into(),
        timeout_secs: 1,
    }
}

#[tokio::test]
async fn test_resend_reports_missing_credentials_in_order() {
    let gateway = ResendGateway::new(resend_config(None, Some("noreply@example.com")));
    let result = gateway.send(&email_payload()).await.map(drop);
    assert_missing(result, "RESEND_API_KEY");

    let gateway = ResendGateway::new(resend_config(Some("re_key"), None));
    let result = gateway.send(&email_payload()).await.map(drop);
    assert_missing(result, "EMAIL_FROM_ADDRESS");
}

#[tokio::test]
async fn test_resend_rejects_text_payload() {
    let gateway = ResendGateway::new(resend_config(Some("re_key"), Some("noreply@example.com")));
    match gateway.send(&text_payload()).await.unwrap_err() {
        RelayError::Dispatch(DispatchError::UnsupportedPayload { provider, kind }) => {
            assert_eq!(provider, "resend");
            assert_eq!(kind, "otp_text");
        }
        other => panic!("expected unsupported payload, got {:?}", other),
    }
}

#[tokio::test]
async fn test_mock_gateway_records_and_counts() {
    let gateway = MockGateway::new();

    let receipt = gateway.send(&template_payload()).await.unwrap();
    assert!(receipt.message_id.starts_with("mock_"));
    assert_eq!(receipt.provider, "mock");

    gateway.send(&email_payload()).await.unwrap();
    assert_eq!(gateway.message_count(), 2);

    let payloads = gateway.sent_payloads();
    assert_eq!(payloads.len(), 2);
    assert_eq!(payloads[0].kind(), "otp_template");
    assert_eq!(payloads[1].kind(), "welcome_email");
}

#[tokio::test]
async fn test_mock_gateway_scripted_failure() {
    let gateway = MockGateway::failing_with(DispatchError::Timeout);
    let error = gateway.send(&text_payload()).await.unwrap_err();
    assert_eq!(error, RelayError::Dispatch(DispatchError::Timeout));
    assert_eq!(gateway.message_count(), 0);

    gateway.set_failure(None);
    gateway.send(&text_payload()).await.unwrap();
    assert_eq!(gateway.message_count(), 1);
}
