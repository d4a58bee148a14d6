//! Main MFA service implementation

use std::sync::Arc;
use uuid::Uuid;

use pir_shared::utils::phone::{mask_phone_number, normalize_phone_number};

use crate::domain::clock::Clock;
use crate::domain::entities::mfa_session::{MfaSession, CODE_LENGTH};
use crate::domain::entities::personal_info::PersonalInfo;
use crate::errors::{DomainResult, MfaError, ValidationError};
use crate::repositories::SessionStore;

use super::config::MfaServiceConfig;
use super::traits::SmsServiceTrait;
use super::types::{IssueCodeResult, VerifyCodeResult};

/// Service handling MFA code issuance and verification
pub struct MfaService<S, N, K>
where
    S: SessionStore,
    N: SmsServiceTrait,
    K: Clock,
{
    store: Arc<S>,
    sms_service: Arc<N>,
    clock: Arc<K>,
    config: MfaServiceConfig,
}

impl<S, N, K> MfaService<S, N, K>
where
    S: SessionStore,
    N: SmsServiceTrait,
    K: Clock,
{
    pub fn new(store: Arc<S>, sms_service: Arc<N>, clock: Arc<K>, config: MfaServiceConfig) -> Self {
        Self {
            store,
            sms_service,
            clock,
            config,
        }
    }

    /// Issue an MFA code for a personal information request
    ///
    /// Creates a session binding a fresh one-time code to the normalized
    /// phone number and the pending identity payload, then hands the
    /// code to the SMS service. The identity payload is expected to be
    /// format-checked at the API boundary; the human-verification flag
    /// and phone format are enforced here as well so the service cannot
    /// be driven around them.
    pub async fn request_code(
        &self,
        personal_info: PersonalInfo,
        mobile_number: &str,
        captcha_verified: bool,
    ) -> DomainResult<IssueCodeResult> {
        if !captcha_verified {
            return Err(MfaError::HumanVerificationRequired.into());
        }

        if !self.sms_service.is_valid_phone_number(mobile_number) {
            return Err(ValidationError::InvalidFormat {
                field: "mobileNumber".to_string(),
            }
            .into());
        }

        let normalized = normalize_phone_number(mobile_number);
        let now = self.clock.now();
        let mut session = MfaSession::with_expiration(
            normalized,
            personal_info,
            now,
            self.config.code_expiration_minutes,
        );
        session.max_attempts = self.config.max_attempts;
        let session_id = session.id;
        let masked_phone = mask_phone_number(&session.phone_number);
        let expires_in = session.expires_in_seconds();
        let code = session.code.clone();
        let phone = session.phone_number.clone();

        tracing::info!(
            session_id = %session_id,
            phone = %masked_phone,
            personal_info = ?session.personal_info.masked(),
            event = "mfa_code_requested",
            "MFA code requested"
        );

        self.store.put(session).await?;

        self.sms_service
            .send_verification_code(&phone, &code)
            .await
            .map_err(|e| {
                tracing::error!(
                    session_id = %session_id,
                    error = %e,
                    event = "sms_send_failed",
                    "Failed to send MFA code"
                );
                MfaError::SmsServiceFailure
            })?;

        Ok(IssueCodeResult {
            session_id,
            masked_phone,
            expires_in,
        })
    }

    /// Verify a claimed MFA code against a session
    ///
    /// Checks run in a fixed order: unknown session, expiry, spent
    /// attempt budget, phone mismatch, already verified. Only a call
    /// that survives all of them counts an attempt. The attempt counter
    /// is advanced through a compare-and-swap so two concurrent calls
    /// cannot spend the same attempt; a lost swap re-reads and re-runs
    /// the checks. The loop terminates because every retry means another
    /// caller advanced or deleted the session, and the counter is capped.
    pub async fn verify_code(
        &self,
        session_id: Uuid,
        mobile_number: &str,
        code: &str,
    ) -> DomainResult<VerifyCodeResult> {
        if code.len() != CODE_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: "mfaCode".to_string(),
            }
            .into());
        }

        let normalized = normalize_phone_number(mobile_number);

        loop {
            let Some(session) = self.store.get(&session_id).await? else {
                return Err(MfaError::InvalidSession.into());
            };

            let now = self.clock.now();
            if session.is_expired(now) {
                self.store.delete(&session_id).await?;
                tracing::warn!(
                    session_id = %session_id,
                    event = "mfa_session_expired",
                    "MFA session expired before verification"
                );
                return Err(MfaError::CodeExpired.into());
            }

            // Pre-count check: a session whose budget is already spent is
            // removed without charging this call.
            if session.attempts_exhausted() {
                self.store.delete(&session_id).await?;
                return Err(MfaError::MaxAttemptsExceeded.into());
            }

            if session.phone_number != normalized {
                tracing::warn!(
                    session_id = %session_id,
                    event = "mfa_phone_mismatch",
                    "Phone number does not match MFA session"
                );
                return Err(MfaError::PhoneMismatch.into());
            }

            if session.verified {
                return Err(MfaError::AlreadyVerified.into());
            }

            let expected_attempts = session.attempts;
            let mut updated = session;
            let matched = updated.record_attempt(code, now);
            let attempts = updated.attempts;
            let remaining = updated.remaining_attempts();
            let exhausted = updated.attempts_exhausted();

            if !self
                .store
                .compare_and_swap(&session_id, expected_attempts, updated)
                .await?
            {
                // Another call advanced or deleted the session; retry.
                continue;
            }

            if matched {
                tracing::info!(
                    session_id = %session_id,
                    attempts = attempts,
                    event = "mfa_verified",
                    "MFA verification successful"
                );
                return Ok(VerifyCodeResult {
                    session_id,
                    verified: true,
                });
            }

            if exhausted {
                // The wrong attempt that reaches the cap consumes the session.
                self.store.delete(&session_id).await?;
                tracing::warn!(
                    session_id = %session_id,
                    event = "mfa_attempts_exhausted",
                    "MFA attempt budget exhausted; session removed"
                );
                return Err(MfaError::MaxAttemptsExceeded.into());
            }

            tracing::warn!(
                session_id = %session_id,
                remaining_attempts = remaining,
                event = "mfa_code_mismatch",
                "Invalid MFA code supplied"
            );
            return Err(MfaError::InvalidCode { remaining }.into());
        }
    }
}
