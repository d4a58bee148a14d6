use actix_web::{web, HttpResponse};

use crate::dto::pi_request::RequestStatusResponse;
use crate::handlers::error::domain_error_response;

use pir_core::domain::clock::Clock;
use pir_core::repositories::SessionStore;
use pir_core::services::mfa::SmsServiceTrait;
use pir_shared::types::response::ApiResponse;

use super::AppState;

/// Handler for GET /api/pi-request/status/{request_id}
///
/// Submitted requests are not persisted, so the returned record is
/// synthesized mock data for any well-formed identifier.
pub async fn request_status<S, N, K>(
    state: web::Data<AppState<S, N, K>>,
    path: web::Path<String>,
) -> HttpResponse
where
    S: SessionStore + 'static,
    N: SmsServiceTrait + 'static,
    K: Clock + 'static,
{
    let request_id = path.into_inner();

    match state.submission_service.request_status(&request_id) {
        Ok(status) => HttpResponse::Ok().json(ApiResponse::success(
            "Request status retrieved",
            RequestStatusResponse {
                request_id: status.request_id,
                status: status.status,
                submitted_at: status.submitted_at,
                estimated_completion_date: status.estimated_completion_date,
                last_updated: status.last_updated,
            },
        )),
        Err(error) => domain_error_response(&error),
    }
}
