use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

use pir_api::app::create_app;
use pir_api::config::ApiConfig;
use pir_api::routes::pi_request::AppState;
use pir_core::domain::clock::SystemClock;
use pir_core::services::mfa::{MfaService, MfaServiceConfig};
use pir_core::services::submission::SubmissionService;
use pir_infra::sms::MockSmsService;
use pir_infra::store::InMemorySessionStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ApiConfig::from_env();
    info!("Starting PI Request API server ({})", config.environment);

    // Wire the in-memory infrastructure. Sessions are intentionally
    // ephemeral: a restart discards them all.
    let store = Arc::new(InMemorySessionStore::new());
    let sms_service = Arc::new(MockSmsService::new());
    let clock = Arc::new(SystemClock);

    let mfa_service = Arc::new(MfaService::new(
        store.clone(),
        sms_service,
        clock.clone(),
        MfaServiceConfig::default(),
    ));
    let submission_service = Arc::new(SubmissionService::new(store, clock));

    let app_state = web::Data::new(AppState {
        mfa_service,
        submission_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {bind_address}");

    HttpServer::new(move || create_app(app_state.clone(), &config))
        .bind(&bind_address)?
        .run()
        .await
}
