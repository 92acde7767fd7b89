//! Response normalization.
//!
//! Total mapping from every pipeline outcome to the uniform
//! `{success, message, data?}` envelope and an HTTP status. All wording
//! surfaced to callers is decided here or in the error Display impls;
//! handlers never format their own failure messages.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::{json, Value};

use otp_core::domain::value_objects::DispatchReceipt;
use otp_core::errors::{DispatchError, RelayError, RelayResult};
use otp_shared::types::ApiResponse;

/// Map a pipeline outcome to the response envelope and status code
pub fn normalize(
    result: RelayResult<DispatchReceipt>,
    success_message: &str,
) -> (ApiResponse<Value>, StatusCode) {
    match result {
        Ok(receipt) => (
            ApiResponse::success(success_message, json!({ "messageId": receipt.message_id })),
            StatusCode::OK,
        ),
        Err(RelayError::Validation(error)) => {
            (ApiResponse::error(error.to_string()), StatusCode::BAD_REQUEST)
        }
        Err(RelayError::Config(error)) => (
            // Names the missing variable, never its value
            ApiResponse::error(format!("Server configuration error: {}", error)),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        Err(RelayError::Dispatch(error)) => {
            let status = StatusCode::from_u16(error.status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (ApiResponse::error(dispatch_message(&error)), status)
        }
    }
}

/// Build the full HTTP response, tagging it with the request id
pub fn respond(
    request_id: &str,
    result: RelayResult<DispatchReceipt>,
    success_message: &str,
) -> HttpResponse {
    let (body, status) = normalize(result, success_message);
    HttpResponse::build(status)
        .insert_header(("x-request-id", request_id))
        .json(body)
}

fn dispatch_message(error: &DispatchError) -> String {
    match error {
        DispatchError::Timeout => {
            "The request to the messaging provider timed out. Please try again.".to_string()
        }
        DispatchError::Network { .. } => {
            "Could not reach the messaging provider. Please try again later.".to_string()
        }
        DispatchError::Provider { .. } => error.to_string(),
        DispatchError::InvalidResponse => {
            "The messaging provider returned an unexpected response.".to_string()
        }
        DispatchError::UnsupportedPayload { .. } => {
            "The configured provider cannot deliver this message.".to_string()
        }
    }
}
