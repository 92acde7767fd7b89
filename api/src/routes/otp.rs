//! OTP dispatch endpoint.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::app::AppState;
use crate::handlers::respond;

/// Handler for POST /api/v1/otp/send
///
/// The body is taken as raw bytes so the pipeline owns all JSON handling;
/// a malformed body comes back as the normalized 400 shape rather than an
/// actix deserialization error.
pub async fn send_otp(state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    let request_id = Uuid::new_v4().to_string();
    log::info!("[{}] Processing OTP dispatch request", request_id);

    let result = state.otp.send_otp(&body).await;
    if let Err(error) = &result {
        log::warn!("[{}] OTP dispatch failed: {}", request_id, error);
    }

    respond(&request_id, result, "OTP sent successfully!")
}
