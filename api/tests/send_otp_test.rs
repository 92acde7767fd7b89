//! Route tests for POST /api/v1/otp/send against the mock gateway.

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;

use otp_api::app::{configure, AppState};
use otp_core::domain::value_objects::MessagePayload;
use otp_core::errors::DispatchError;
use otp_core::services::dispatch::{DispatchConfig, DispatchService, MessageGateway};
use otp_infra::gateway::whatsapp::{WhatsAppConfig, WhatsAppGateway};
use otp_infra::gateway::MockGateway;

fn state_with_otp_gateway(gateway: Arc<dyn MessageGateway>) -> AppState {
    let config = DispatchConfig::default();
    AppState::new(
        DispatchService::new(gateway, config.clone()),
        DispatchService::new(Arc::new(MockGateway::new()), config),
    )
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_valid_phone_returns_200_with_message_id() {
    let gateway = Arc::new(MockGateway::new());
    let app = test_app!(state_with_otp_gateway(gateway.clone()));

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/send")
        .set_json(json!({"phoneNumber": "9876543210"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "OTP sent successfully!");
    assert!(body["data"]["messageId"]
        .as_str()
        .unwrap()
        .starts_with("mock_"));

    // The pipeline normalized the number before the gateway saw it
    let payloads = gateway.sent_payloads();
    assert_eq!(payloads.len(), 1);
    match &payloads[0] {
        MessagePayload::OtpTemplate { to, code, .. } => {
            assert_eq!(to.as_str(), "+919876543210");
            assert_eq!(code.as_str().len(), 6);
        }
        other => panic!("expected template payload, got {:?}", other),
    }
}

#[actix_rt::test]
async fn test_invalid_leading_digit_returns_400() {
    let gateway = Arc::new(MockGateway::new());
    let app = test_app!(state_with_otp_gateway(gateway.clone()));

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/send")
        .set_json(json!({"phoneNumber": "1234567890"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Please enter a valid 10-digit Indian mobile number"
    );
    assert_eq!(gateway.message_count(), 0);
}

#[actix_rt::test]
async fn test_empty_body_returns_400_without_gateway_call() {
    let gateway = Arc::new(MockGateway::new());
    let app = test_app!(state_with_otp_gateway(gateway.clone()));

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/send")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Valid phone number is required");
    assert_eq!(gateway.message_count(), 0);
}

#[actix_rt::test]
async fn test_malformed_body_returns_normalized_400() {
    let gateway = Arc::new(MockGateway::new());
    let app = test_app!(state_with_otp_gateway(gateway.clone()));

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/send")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Malformed request body");
}

#[actix_rt::test]
async fn test_double_encoded_body_is_accepted() {
    let gateway = Arc::new(MockGateway::new());
    let app = test_app!(state_with_otp_gateway(gateway.clone()));

    // The platform sometimes forwards the body as a JSON-encoded string
    let req = test::TestRequest::post()
        .uri("/api/v1/otp/send")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#""{\"phoneNumber\": \"9876543210\"}""#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(gateway.message_count(), 1);
}

#[actix_rt::test]
async fn test_missing_provider_token_returns_500_naming_variable() {
    // Real WhatsApp gateway with no token: fails before any network call
    let gateway = Arc::new(WhatsAppGateway::new(WhatsAppConfig {
        access_token: None,
        phone_number_id: Some("12345".into()),
        api_version: "v21.0".into(),
        base_url: "http://127.0.0.1:9".into(),
        timeout_secs: 1,
    }));
    let app = test_app!(state_with_otp_gateway(gateway));

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/send")
        .set_json(json!({"phoneNumber": "9876543210"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Server configuration error: Missing WHATSAPP_ACCESS_TOKEN"
    );
}

#[actix_rt::test]
async fn test_provider_timeout_returns_408() {
    let gateway = Arc::new(MockGateway::failing_with(DispatchError::Timeout));
    let app = test_app!(state_with_otp_gateway(gateway));

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/send")
        .set_json(json!({"phoneNumber": "9876543210"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("timed out"));
}

#[actix_rt::test]
async fn test_network_failure_returns_503() {
    let gateway = Arc::new(MockGateway::failing_with(DispatchError::Network {
        detail: "connection refused".into(),
    }));
    let app = test_app!(state_with_otp_gateway(gateway));

    let req = test::TestRequest::post()
        .uri("/api/v1/otp/send")
        .set_json(json!({"phoneNumber": "9876543210"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let gateway = Arc::new(MockGateway::new());
    let app = test_app!(state_with_otp_gateway(gateway));

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "otp-relay-api");
}
