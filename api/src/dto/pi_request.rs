//! DTOs for the PI request endpoints
//!
//! Wire field names are camelCase, matching the public API contract.
//! Format checks live here so a request is either rejected with the full
//! list of field errors or handed to the services fully well-formed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use pir_core::domain::entities::personal_info::PersonalInfo;
use pir_core::domain::entities::pi_request::{DeliveryMethod, RequestStatus, RequestType};
use pir_shared::utils::phone::is_valid_na_phone;
use pir_shared::utils::us_states::is_recognized_state;
use pir_shared::utils::validation::{is_valid_mfa_code, is_valid_ssn};

/// Identity payload as received on the wire
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoDto {
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub last_name: String,

    #[validate(length(min = 5, max = 200, message = "must be 5-200 characters"))]
    pub address: String,

    #[validate(custom = "validate_state")]
    pub state: String,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(custom = "validate_birth_date")]
    pub date_of_birth: NaiveDate,

    #[validate(custom = "validate_ssn")]
    pub ssn: String,
}

impl From<PersonalInfoDto> for PersonalInfo {
    fn from(dto: PersonalInfoDto) -> Self {
        PersonalInfo {
            first_name: dto.first_name,
            last_name: dto.last_name,
            address: dto.address,
            state: dto.state,
            email: dto.email,
            date_of_birth: dto.date_of_birth,
            ssn: dto.ssn,
        }
    }
}

/// Body of POST /api/pi-request/request-mfa-code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RequestMfaCodeRequest {
    #[validate]
    pub personal_info: PersonalInfoDto,

    #[validate(custom = "validate_phone")]
    pub mobile_number: String,

    /// Must be literally true; enforced by the service, not validation
    pub captcha_verified: bool,
}

/// Body of POST /api/pi-request/verify-mfa-code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyMfaCodeRequest {
    #[validate(custom = "validate_phone")]
    pub mobile_number: String,

    #[validate(custom = "validate_mfa_code")]
    pub mfa_code: String,

    #[validate(custom = "validate_session_id")]
    pub session_id: String,
}

/// Body of POST /api/pi-request/submit
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    #[validate]
    pub personal_info: PersonalInfoDto,

    #[validate(custom = "validate_phone")]
    pub mobile_number: String,

    pub request_type: RequestType,

    pub delivery_method: DeliveryMethod,

    #[validate(custom = "validate_session_id")]
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMfaCodeResponse {
    pub session_id: String,
    /// Masked destination, `***-***-<last4>`
    pub phone_number: String,
    /// Seconds until the session expires
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyMfaCodeResponse {
    pub session_id: String,
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub request_id: String,
    pub status: RequestStatus,
    pub estimated_processing_time: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStatusResponse {
    pub request_id: String,
    pub status: RequestStatus,
    pub submitted_at: DateTime<Utc>,
    pub estimated_completion_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_na_phone(phone) {
        Ok(())
    } else {
        Err(field_error(
            "invalid_phone",
            "must be a North American phone number",
        ))
    }
}

fn validate_ssn(ssn: &str) -> Result<(), ValidationError> {
    if is_valid_ssn(ssn) {
        Ok(())
    } else {
        Err(field_error("invalid_ssn", "must be a 9-digit SSN"))
    }
}

fn validate_state(state: &str) -> Result<(), ValidationError> {
    if is_recognized_state(state) {
        Ok(())
    } else {
        Err(field_error("invalid_state", "must be a US state"))
    }
}

fn validate_birth_date(date_of_birth: &NaiveDate) -> Result<(), ValidationError> {
    if *date_of_birth <= Utc::now().date_naive() {
        Ok(())
    } else {
        Err(field_error("invalid_date", "must not be in the future"))
    }
}

fn validate_mfa_code(code: &str) -> Result<(), ValidationError> {
    if is_valid_mfa_code(code) {
        Ok(())
    } else {
        Err(field_error("invalid_code", "must be a 6-digit code"))
    }
}

fn validate_session_id(session_id: &str) -> Result<(), ValidationError> {
    if uuid::Uuid::parse_str(session_id).is_ok() {
        Ok(())
    } else {
        Err(field_error("invalid_session_id", "must be a UUID"))
    }
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}
