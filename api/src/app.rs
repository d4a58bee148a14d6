//! Application factory
//!
//! Builds the Actix-web application with middleware, the JSON extractor
//! configuration, and the PI request routes. Kept separate from `main`
//! so integration tests can assemble the same app around test doubles.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{error::InternalError, middleware::Logger, web, App, HttpRequest, HttpResponse};

use crate::config::ApiConfig;
use crate::middleware::{cors::create_cors, rate_limit::RateLimiter};
use crate::routes::pi_request::{
    request_mfa_code, request_status, submit, verify_mfa_code, AppState,
};

use pir_core::domain::clock::Clock;
use pir_core::repositories::SessionStore;
use pir_core::services::mfa::SmsServiceTrait;
use pir_shared::types::response::ApiResponse;

/// Create and configure the application with all dependencies
pub fn create_app<S, N, K>(
    app_state: web::Data<AppState<S, N, K>>,
    config: &ApiConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: SessionStore + 'static,
    N: SmsServiceTrait + 'static,
    K: Clock + 'static,
{
    let cors = create_cors();

    // Malformed bodies (bad JSON, unknown enum values, missing fields)
    // surface through the same envelope as field validation.
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api")
                .wrap(RateLimiter::new(
                    config.rate_limit.api_max_requests,
                    config.rate_limit.api_window_secs,
                ))
                .service(
                    web::scope("/pi-request")
                        .wrap(RateLimiter::new(
                            config.rate_limit.mfa_max_requests,
                            config.rate_limit.mfa_window_secs,
                        ))
                        .route("/request-mfa-code", web::post().to(request_mfa_code::<S, N, K>))
                        .route("/verify-mfa-code", web::post().to(verify_mfa_code::<S, N, K>))
                        .route("/submit", web::post().to(submit::<S, N, K>))
                        .route("/status/{request_id}", web::get().to(request_status::<S, N, K>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::failure_with_details(
        "Validation failed",
        vec![detail],
    ));
    InternalError::from_response(err, response).into()
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "message": "PI Request API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::failure("Endpoint not found"))
}
