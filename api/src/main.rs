use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenvy::dotenv;
use log::info;

use otp_api::app::{self, AppState};
use otp_core::services::dispatch::{DispatchConfig, DispatchService};
use otp_infra::gateway::{create_email_gateway, create_otp_gateway};
use otp_shared::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting OtpRelay API Server");

    // Load configuration
    let config = AppConfig::from_env();
    let dispatch_config = DispatchConfig::from_env();
    info!(
        "OTP provider: {}, email provider: {}",
        config.providers.otp, config.providers.email
    );

    // Wire the gateways behind the dispatch services. Missing provider
    // credentials do not stop startup; they surface per request.
    let otp_gateway = create_otp_gateway(&config.providers.otp);
    let email_gateway = create_email_gateway(&config.providers.email);
    let state = AppState::new(
        DispatchService::new(otp_gateway, dispatch_config.clone()),
        DispatchService::new(email_gateway, dispatch_config),
    );

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        let cors = otp_api::middleware::cors::create_cors();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .configure(app::configure)
            // Default 404 handler
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(serde_json::json!({
                    "success": false,
                    "message": "The requested resource was not found"
                }))
            }))
    })
    .bind(&bind_address)?
    .run()
    .await
}
