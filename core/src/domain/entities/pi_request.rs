//! Personal information request record.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::personal_info::PersonalInfo;

/// Static processing-time estimate returned on submission
pub const ESTIMATED_PROCESSING_TIME: &str = "5-7 business days";

/// Request identifier shape: `PIR-<13-digit millis>-<9 uppercase alphanumerics>`
pub static REQUEST_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^PIR-\d{13}-[A-Z0-9]{9}$").unwrap());

/// What the consumer is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    /// Produce a report of the personal information held
    Report,
    /// Delete the personal information held
    Delete,
}

/// How the response should be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryMethod {
    Email,
    Mail,
    SecurePortal,
}

/// Lifecycle status of a submitted request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Submitted,
    Processing,
    Completed,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Submitted => write!(f, "submitted"),
            RequestStatus::Processing => write!(f, "processing"),
            RequestStatus::Completed => write!(f, "completed"),
        }
    }
}

/// A submitted personal information request
///
/// Records are logged and handed back to the caller; nothing is
/// persisted to durable storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiRequest {
    pub request_id: String,
    pub personal_info: PersonalInfo,
    pub mobile_number: String,
    pub request_type: RequestType,
    pub delivery_method: DeliveryMethod,
    pub submitted_at: DateTime<Utc>,
    pub status: RequestStatus,
}

impl PiRequest {
    /// Creates a new request record with a freshly generated identifier
    pub fn new(
        personal_info: PersonalInfo,
        mobile_number: String,
        request_type: RequestType,
        delivery_method: DeliveryMethod,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            request_id: Self::generate_id(now),
            personal_info,
            mobile_number,
            request_type,
            delivery_method,
            submitted_at: now,
            status: RequestStatus::Submitted,
        }
    }

    /// Generates a request identifier from the current timestamp and a
    /// short random alphanumeric suffix
    pub fn generate_id(now: DateTime<Utc>) -> String {
        let suffix: String = rand::thread_rng()
            .sample_iter(&rand::distributions::Alphanumeric)
            .take(9)
            .map(|b| (b as char).to_ascii_uppercase())
            .collect();
        format!("PIR-{:013}-{}", now.timestamp_millis(), suffix)
    }

    /// Checks whether a string is a well-formed request identifier
    pub fn is_valid_id(request_id: &str) -> bool {
        REQUEST_ID_REGEX.is_match(request_id)
    }
}
