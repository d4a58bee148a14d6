use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::collect_error_details;
use crate::dto::pi_request::{SubmitRequest, SubmitResponse};
use crate::handlers::error::{domain_error_response, validation_failed_response};

use pir_core::domain::clock::Clock;
use pir_core::errors::MfaError;
use pir_core::repositories::SessionStore;
use pir_core::services::mfa::SmsServiceTrait;
use pir_shared::types::response::ApiResponse;

use super::AppState;

/// Fixed pause standing in for downstream processing latency
const SIMULATED_PROCESSING_LATENCY_MS: u64 = 500;

/// Handler for POST /api/pi-request/submit
///
/// Accepts the final submission once the session has passed MFA
/// verification. The session is consumed; the request record is logged
/// with sensitive fields redacted and not persisted anywhere else.
///
/// # Responses
/// - 200: submitted; data carries `requestId`, `status`,
///   `estimatedProcessingTime`, and `submittedAt`
/// - 400: field validation failure
/// - 401: session missing or not verified
pub async fn submit<S, N, K>(
    state: web::Data<AppState<S, N, K>>,
    request: web::Json<SubmitRequest>,
) -> HttpResponse
where
    S: SessionStore + 'static,
    N: SmsServiceTrait + 'static,
    K: Clock + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_failed_response(collect_error_details(&errors));
    }

    let request = request.into_inner();
    let session_id = match Uuid::parse_str(&request.session_id) {
        Ok(id) => id,
        Err(_) => return domain_error_response(&MfaError::VerificationRequired.into()),
    };

    log::info!(
        "Processing PI request submission: type={:?}, delivery={:?}",
        request.request_type,
        request.delivery_method
    );

    match state
        .submission_service
        .submit(
            request.personal_info.into(),
            &request.mobile_number,
            request.request_type,
            request.delivery_method,
            session_id,
        )
        .await
    {
        Ok(result) => {
            // Simulated processing latency before responding
            tokio::time::sleep(std::time::Duration::from_millis(
                SIMULATED_PROCESSING_LATENCY_MS,
            ))
            .await;

            HttpResponse::Ok().json(ApiResponse::success(
                "Personal information request submitted successfully",
                SubmitResponse {
                    request_id: result.request_id,
                    status: result.status,
                    estimated_processing_time: result.estimated_processing_time,
                    submitted_at: result.submitted_at,
                },
            ))
        }
        Err(error) => domain_error_response(&error),
    }
}
