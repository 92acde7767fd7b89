//! Welcome email endpoint.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::app::AppState;
use crate::handlers::respond;

/// Handler for POST /api/v1/email/welcome
pub async fn send_welcome(state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    let request_id = Uuid::new_v4().to_string();
    log::info!("[{}] Processing welcome email request", request_id);

    let result = state.email.send_welcome_email(&body).await;
    if let Err(error) = &result {
        log::warn!("[{}] Welcome email dispatch failed: {}", request_id, error);
    }

    respond(&request_id, result, "Welcome email sent successfully!")
}
