use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::collect_error_details;
use crate::dto::pi_request::{VerifyMfaCodeRequest, VerifyMfaCodeResponse};
use crate::handlers::error::{domain_error_response, validation_failed_response};

use pir_core::domain::clock::Clock;
use pir_core::errors::MfaError;
use pir_core::repositories::SessionStore;
use pir_core::services::mfa::SmsServiceTrait;
use pir_shared::types::response::ApiResponse;

use super::AppState;

/// Handler for POST /api/pi-request/verify-mfa-code
///
/// Checks the claimed code against the session. Each call that reaches
/// the comparison spends one attempt; the session is removed on expiry
/// or when the attempt budget runs out.
///
/// # Responses
/// - 200: verified; data carries `sessionId` and `verified: true`
/// - 400: validation failure, unknown/expired session, phone mismatch,
///   or wrong code (message reports attempts remaining)
/// - 429: attempt budget exhausted
pub async fn verify_mfa_code<S, N, K>(
    state: web::Data<AppState<S, N, K>>,
    request: web::Json<VerifyMfaCodeRequest>,
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
        Err(_) => return domain_error_response(&MfaError::InvalidSession.into()),
    };

    match state
        .mfa_service
        .verify_code(session_id, &request.mobile_number, &request.mfa_code)
        .await
    {
        Ok(result) => HttpResponse::Ok().json(ApiResponse::success(
            "MFA verification successful",
            VerifyMfaCodeResponse {
                session_id: result.session_id.to_string(),
                verified: result.verified,
            },
        )),
        Err(error) => domain_error_response(&error),
    }
}
