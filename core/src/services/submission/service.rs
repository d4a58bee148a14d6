//! Main submission service implementation

use chrono::Duration;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::clock::Clock;
use crate::domain::entities::personal_info::PersonalInfo;
use crate::domain::entities::pi_request::{
    DeliveryMethod, PiRequest, RequestStatus, RequestType, ESTIMATED_PROCESSING_TIME,
};
use crate::errors::{DomainError, DomainResult, MfaError};
use crate::repositories::SessionStore;

use super::types::{RequestStatusResult, SubmitResult};

/// Service handling request submission and mock status lookup
pub struct SubmissionService<S, K>
where
    S: SessionStore,
    K: Clock,
{
    store: Arc<S>,
    clock: Arc<K>,
}

impl<S, K> SubmissionService<S, K>
where
    S: SessionStore,
    K: Clock,
{
    pub fn new(store: Arc<S>, clock: Arc<K>) -> Self {
        Self { store, clock }
    }

    /// Submit a personal information request
    ///
    /// Requires a session that completed MFA verification; the session
    /// is consumed by the submission. The request record is logged with
    /// sensitive fields redacted and is not persisted anywhere else.
    pub async fn submit(
        &self,
        personal_info: PersonalInfo,
        mobile_number: &str,
        request_type: RequestType,
        delivery_method: DeliveryMethod,
        session_id: Uuid,
    ) -> DomainResult<SubmitResult> {
        match self.store.get(&session_id).await? {
            Some(session) if session.verified => {}
            _ => return Err(MfaError::VerificationRequired.into()),
        }

        let now = self.clock.now();
        let request = PiRequest::new(
            personal_info,
            mobile_number.to_string(),
            request_type,
            delivery_method,
            now,
        );

        tracing::info!(
            request_id = %request.request_id,
            request_type = ?request.request_type,
            delivery_method = ?request.delivery_method,
            personal_info = ?request.personal_info.masked(),
            event = "pi_request_submitted",
            "Personal information request submitted"
        );

        // Sessions are single-use; a consumed session cannot authorize
        // another submission.
        self.store.delete(&session_id).await?;

        Ok(SubmitResult {
            request_id: request.request_id,
            status: request.status,
            estimated_processing_time: ESTIMATED_PROCESSING_TIME.to_string(),
            submitted_at: request.submitted_at,
        })
    }

    /// Look up the status of a submitted request
    ///
    /// Requests are not persisted, so the returned record is synthesized
    /// from the current time for any well-formed identifier.
    pub fn request_status(&self, request_id: &str) -> DomainResult<RequestStatusResult> {
        if !PiRequest::is_valid_id(request_id) {
            return Err(DomainError::Validation {
                message: "Invalid request ID format".to_string(),
            });
        }

        let now = self.clock.now();
        Ok(RequestStatusResult {
            request_id: request_id.to_string(),
            status: RequestStatus::Processing,
            submitted_at: now - Duration::days(2),
            estimated_completion_date: now + Duration::days(5),
            last_updated: now,
        })
    }
}
