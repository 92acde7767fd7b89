//! Application state and route wiring.

use actix_web::{web, HttpResponse};

use otp_core::services::dispatch::DispatchService;

use crate::routes;

/// Shared services handed to every request handler
///
/// One dispatch service per delivery channel; both are stateless and
/// cheap to clone (the gateway sits behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// OTP delivery pipeline
    pub otp: DispatchService,
    /// Welcome email pipeline
    pub email: DispatchService,
}

impl AppState {
    /// Create application state from pre-built dispatch services
    pub fn new(otp: DispatchService, email: DispatchService) -> Self {
        Self { otp, email }
    }
}

/// Register all routes on the service config
///
/// Shared between the binary and the route tests so both serve the same
/// surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/api/v1")
            .service(
                web::scope("/otp").route("/send", web::post().to(routes::otp::send_otp)),
            )
            .service(
                web::scope("/email")
                    .route("/welcome", web::post().to(routes::email::send_welcome)),
            ),
    );
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "otp-relay-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
