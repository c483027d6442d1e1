use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenvy::dotenv;
use log::info;

use otp_api::{app::AppState, middleware, routes};
use otp_core::services::CodeCleanupTask;
use otp_shared::config::AppConfig;
use otp_shared::types::response::ApiResponse;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting OTP Relay API server");

    let config = AppConfig::from_env();
    let state = AppState::from_config(&config);

    // Expired-code retention sweep, detached for the life of the process.
    CodeCleanupTask::new(
        state.codes.clone(),
        config.dispatch.cleanup_interval_secs,
        config.dispatch.code_validity_minutes,
    )
    .spawn();

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(middleware::cors::create_cors())
            .configure(routes::configure(state.clone()))
            .default_service(web::route().to(not_found))
    })
    .bind(&bind_address)?
    .run()
    .await
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::failure(
        "The requested resource was not found",
    ))
}
