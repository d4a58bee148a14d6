//! Identity payload supplied with a personal information request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pir_shared::utils::masking::{mask_email, mask_ssn};

/// Caller-supplied identity data bound to an MFA session
///
/// Serializes with camelCase field names, matching the public API
/// contract. Format validation happens at the API boundary; this entity
/// treats the payload as already well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub state: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub ssn: String,
}

impl PersonalInfo {
    /// Copy with sensitive fields redacted, safe for logging
    ///
    /// The SSN keeps its last four digits and the email its first two
    /// characters plus domain.
    pub fn masked(&self) -> PersonalInfo {
        PersonalInfo {
            ssn: mask_ssn(&self.ssn),
            email: mask_email(&self.email),
            ..self.clone()
        }
    }
}
