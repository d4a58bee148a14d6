//! CORS middleware configuration for the front-end clients.
//!
//! The multi-step form and its companion widgets are served from
//! separate dev servers, so the API restricts cross-origin access to the
//! configured front-end origins and allows credentials.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Default origins: the Vite dev server and the legacy CRA port
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173,http://localhost:3000";

/// Creates a CORS middleware instance from the `ALLOWED_ORIGINS`
/// environment variable (comma-separated), falling back to the local
/// development front ends.
pub fn create_cors() -> Cors {
    let allowed_origins =
        env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string());

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600);

    for origin in allowed_origins.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        log::info!("Allowing CORS origin: {origin}");
        cors = cors.allowed_origin(origin);
    }

    cors
}
