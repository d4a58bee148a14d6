use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::collect_error_details;
use crate::dto::pi_request::{RequestMfaCodeRequest, RequestMfaCodeResponse};
use crate::handlers::error::{domain_error_response, validation_failed_response};

use pir_core::domain::clock::Clock;
use pir_core::repositories::SessionStore;
use pir_core::services::mfa::SmsServiceTrait;
use pir_shared::types::response::ApiResponse;
use pir_shared::utils::phone::mask_phone_number;

use super::AppState;

/// Fixed pause standing in for SMS provider latency
const SIMULATED_SMS_LATENCY_MS: u64 = 1_000;

/// Handler for POST /api/pi-request/request-mfa-code
///
/// Validates the identity payload, creates an MFA session, and "sends"
/// the one-time code (the SMS path is a console-logging mock).
///
/// # Responses
/// - 200: code issued; data carries `sessionId`, masked `phoneNumber`,
///   and `expiresIn` seconds
/// - 400: field validation failure (with `details`) or missing human
///   verification
/// - 500: SMS delivery failure
pub async fn request_mfa_code<S, N, K>(
    state: web::Data<AppState<S, N, K>>,
    request: web::Json<RequestMfaCodeRequest>,
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
    log::info!(
        "Processing MFA code request for phone: {}",
        mask_phone_number(&request.mobile_number)
    );

    match state
        .mfa_service
        .request_code(
            request.personal_info.into(),
            &request.mobile_number,
            request.captcha_verified,
        )
        .await
    {
        Ok(issued) => {
            // Simulated provider latency before responding
            tokio::time::sleep(std::time::Duration::from_millis(SIMULATED_SMS_LATENCY_MS)).await;

            HttpResponse::Ok().json(ApiResponse::success(
                "MFA code sent successfully",
                RequestMfaCodeResponse {
                    session_id: issued.session_id.to_string(),
                    phone_number: issued.masked_phone,
                    expires_in: issued.expires_in,
                },
            ))
        }
        Err(error) => domain_error_response(&error),
    }
}
