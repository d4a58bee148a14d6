//! Types for submission service results

use chrono::{DateTime, Utc};

use crate::domain::entities::pi_request::RequestStatus;

/// Result of submitting a personal information request
#[derive(Debug, Clone)]
pub struct SubmitResult {
    /// Generated request identifier
    pub request_id: String,
    /// Status of the freshly submitted request
    pub status: RequestStatus,
    /// Static human-readable processing estimate
    pub estimated_processing_time: String,
    /// Submission timestamp
    pub submitted_at: DateTime<Utc>,
}

/// Synthesized status lookup result
///
/// Nothing is persisted, so this data is non-authoritative mock state
/// derived from the current time.
#[derive(Debug, Clone)]
pub struct RequestStatusResult {
    pub request_id: String,
    pub status: RequestStatus,
    pub submitted_at: DateTime<Utc>,
    pub estimated_completion_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}
