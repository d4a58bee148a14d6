//! Domain error to HTTP response mapping
//!
//! Every rejection leaves through here so all errors share the response
//! envelope and callers can branch solely on `success`.

use actix_web::HttpResponse;

use pir_core::errors::{DomainError, MfaError};
use pir_shared::types::response::ApiResponse;

/// Build a 400 response carrying the collected field errors
pub fn validation_failed_response(details: Vec<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::failure_with_details(
        "Validation failed",
        details,
    ))
}

/// Convert a domain error into the appropriate HTTP response
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Mfa(mfa_error) => mfa_error_response(mfa_error),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::failure(message.clone()))
        }
        DomainError::ValidationErr(validation_error) => HttpResponse::BadRequest()
            .json(ApiResponse::<()>::failure(validation_error.to_string())),
        DomainError::Internal { message } => {
            log::error!("Internal error: {message}");
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::failure("Internal server error"))
        }
    }
}

fn mfa_error_response(error: &MfaError) -> HttpResponse {
    let message = error.to_string();
    match error {
        MfaError::MaxAttemptsExceeded => {
            HttpResponse::TooManyRequests().json(ApiResponse::<()>::failure(message))
        }
        MfaError::VerificationRequired => {
            HttpResponse::Unauthorized().json(ApiResponse::<()>::failure(message))
        }
        MfaError::SmsServiceFailure => {
            HttpResponse::InternalServerError().json(ApiResponse::<()>::failure(message))
        }
        MfaError::InvalidSession
        | MfaError::CodeExpired
        | MfaError::PhoneMismatch
        | MfaError::AlreadyVerified
        | MfaError::InvalidCode { .. }
        | MfaError::HumanVerificationRequired => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::failure(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_attempts_exhausted_maps_to_429() {
        let response = domain_error_response(&MfaError::MaxAttemptsExceeded.into());
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_unverified_submission_maps_to_401() {
        let response = domain_error_response(&MfaError::VerificationRequired.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_business_rejections_map_to_400() {
        for error in [
            MfaError::InvalidSession,
            MfaError::CodeExpired,
            MfaError::PhoneMismatch,
            MfaError::InvalidCode { remaining: 1 },
            MfaError::HumanVerificationRequired,
        ] {
            let response = domain_error_response(&error.into());
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_internal_error_maps_to_500() {
        let error = DomainError::Internal {
            message: "boom".to_string(),
        };
        let response = domain_error_response(&error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
