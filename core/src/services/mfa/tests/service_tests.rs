//! Tests for the MFA issuance and verification flows

use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::clock::{Clock, FixedClock};
use crate::errors::{DomainError, MfaError};
use crate::repositories::{MockSessionStore, SessionStore};
use crate::services::mfa::config::MfaServiceConfig;
use crate::services::mfa::service::MfaService;

use super::mocks::{sample_personal_info, MockSmsService};

struct Harness {
    store: Arc<MockSessionStore>,
    sms: Arc<MockSmsService>,
    clock: Arc<FixedClock>,
    service: MfaService<MockSessionStore, MockSmsService, FixedClock>,
}

fn harness() -> Harness {
    let store = Arc::new(MockSessionStore::new());
    let sms = Arc::new(MockSmsService::new());
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let service = MfaService::new(
        store.clone(),
        sms.clone(),
        clock.clone(),
        MfaServiceConfig::default(),
    );
    Harness {
        store,
        sms,
        clock,
        service,
    }
}

fn assert_mfa_err(result: DomainError, expected: MfaError) {
    match result {
        DomainError::Mfa(err) => assert_eq!(err, expected),
        other => panic!("expected MfaError, got {other:?}"),
    }
}

#[tokio::test]
async fn request_code_creates_session_with_expected_window() {
    let h = harness();
    let result = h
        .service
        .request_code(sample_personal_info(), "555-123-4567", true)
        .await
        .unwrap();

    assert_eq!(result.expires_in, 300);
    assert_eq!(result.masked_phone, "***-***-4567");

    let session = h.store.get(&result.session_id).await.unwrap().unwrap();
    assert_eq!(session.phone_number, "5551234567");
    assert_eq!(session.attempts, 0);
    assert!(!session.verified);
    assert_eq!(session.expires_at, h.clock.now() + Duration::seconds(300));

    let sent = h.sms.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "5551234567");
    assert_eq!(sent[0].1, session.code);
}

#[tokio::test]
async fn request_code_rejects_missing_captcha() {
    let h = harness();
    let error = h
        .service
        .request_code(sample_personal_info(), "555-123-4567", false)
        .await
        .unwrap_err();

    assert_mfa_err(error, MfaError::HumanVerificationRequired);
    assert!(h.store.is_empty());
    assert!(h.sms.sent().is_empty());
}

#[tokio::test]
async fn request_code_rejects_invalid_phone() {
    let h = harness();
    let error = h
        .service
        .request_code(sample_personal_info(), "555-123", true)
        .await
        .unwrap_err();

    assert!(matches!(error, DomainError::ValidationErr(_)));
    assert!(h.store.is_empty());
}

#[tokio::test]
async fn request_code_surfaces_sms_failure() {
    let h = harness();
    h.sms.set_fail(true);
    let error = h
        .service
        .request_code(sample_personal_info(), "555-123-4567", true)
        .await
        .unwrap_err();

    assert_mfa_err(error, MfaError::SmsServiceFailure);
}

#[tokio::test]
async fn verify_correct_code_marks_session_verified() {
    let h = harness();
    let issued = h
        .service
        .request_code(sample_personal_info(), "555-123-4567", true)
        .await
        .unwrap();
    let code = h.store.get(&issued.session_id).await.unwrap().unwrap().code;

    let result = h
        .service
        .verify_code(issued.session_id, "555-123-4567", &code)
        .await
        .unwrap();

    assert!(result.verified);
    let session = h.store.get(&issued.session_id).await.unwrap().unwrap();
    assert!(session.verified);
    assert_eq!(session.verified_at, Some(h.clock.now()));
    assert_eq!(session.attempts, 1);
}

#[tokio::test]
async fn verify_accepts_differently_formatted_phone() {
    let h = harness();
    let issued = h
        .service
        .request_code(sample_personal_info(), "555-123-4567", true)
        .await
        .unwrap();
    let code = h.store.get(&issued.session_id).await.unwrap().unwrap().code;

    // Same number, different formatting
    let result = h
        .service
        .verify_code(issued.session_id, "+1 (555) 123-4567", &code)
        .await
        .unwrap();
    assert!(result.verified);
}

#[tokio::test]
async fn verify_unknown_session_is_rejected() {
    let h = harness();
    let error = h
        .service
        .verify_code(Uuid::new_v4(), "555-123-4567", "123456")
        .await
        .unwrap_err();
    assert_mfa_err(error, MfaError::InvalidSession);
}

#[tokio::test]
async fn verify_expired_session_is_rejected_and_removed() {
    let h = harness();
    let issued = h
        .service
        .request_code(sample_personal_info(), "555-123-4567", true)
        .await
        .unwrap();
    let code = h.store.get(&issued.session_id).await.unwrap().unwrap().code;

    h.clock.advance(Duration::seconds(301));

    let error = h
        .service
        .verify_code(issued.session_id, "555-123-4567", &code)
        .await
        .unwrap_err();
    assert_mfa_err(error, MfaError::CodeExpired);
    assert!(h.store.get(&issued.session_id).await.unwrap().is_none());
}

#[tokio::test]
async fn verify_at_exact_expiry_still_succeeds() {
    let h = harness();
    let issued = h
        .service
        .request_code(sample_personal_info(), "555-123-4567", true)
        .await
        .unwrap();
    let code = h.store.get(&issued.session_id).await.unwrap().unwrap().code;

    h.clock.advance(Duration::seconds(300));

    let result = h
        .service
        .verify_code(issued.session_id, "555-123-4567", &code)
        .await
        .unwrap();
    assert!(result.verified);
}

#[tokio::test]
async fn verify_phone_mismatch_does_not_count_attempt() {
    let h = harness();
    let issued = h
        .service
        .request_code(sample_personal_info(), "555-123-4567", true)
        .await
        .unwrap();

    let error = h
        .service
        .verify_code(issued.session_id, "555-999-0000", "123456")
        .await
        .unwrap_err();
    assert_mfa_err(error, MfaError::PhoneMismatch);

    let session = h.store.get(&issued.session_id).await.unwrap().unwrap();
    assert_eq!(session.attempts, 0);
}

#[tokio::test]
async fn verify_wrong_codes_deplete_budget_and_consume_session() {
    let h = harness();
    let issued = h
        .service
        .request_code(sample_personal_info(), "555-123-4567", true)
        .await
        .unwrap();
    let code = h.store.get(&issued.session_id).await.unwrap().unwrap().code;
    let wrong = if code == "482913" { "482914" } else { "482913" };

    let error = h
        .service
        .verify_code(issued.session_id, "555-123-4567", wrong)
        .await
        .unwrap_err();
    assert_mfa_err(error, MfaError::InvalidCode { remaining: 2 });

    let error = h
        .service
        .verify_code(issued.session_id, "555-123-4567", wrong)
        .await
        .unwrap_err();
    assert_mfa_err(error, MfaError::InvalidCode { remaining: 1 });

    // The wrong attempt that reaches the cap consumes the session.
    let error = h
        .service
        .verify_code(issued.session_id, "555-123-4567", wrong)
        .await
        .unwrap_err();
    assert_mfa_err(error, MfaError::MaxAttemptsExceeded);
    assert!(h.store.get(&issued.session_id).await.unwrap().is_none());

    // A fourth call reports an invalid session, not a wrong code.
    let error = h
        .service
        .verify_code(issued.session_id, "555-123-4567", &code)
        .await
        .unwrap_err();
    assert_mfa_err(error, MfaError::InvalidSession);
}

#[tokio::test]
async fn verify_already_verified_session_is_rejected() {
    let h = harness();
    let issued = h
        .service
        .request_code(sample_personal_info(), "555-123-4567", true)
        .await
        .unwrap();
    let code = h.store.get(&issued.session_id).await.unwrap().unwrap().code;

    h.service
        .verify_code(issued.session_id, "555-123-4567", &code)
        .await
        .unwrap();

    let error = h
        .service
        .verify_code(issued.session_id, "555-123-4567", &code)
        .await
        .unwrap_err();
    assert_mfa_err(error, MfaError::AlreadyVerified);

    // The attempt counter did not move.
    let session = h.store.get(&issued.session_id).await.unwrap().unwrap();
    assert_eq!(session.attempts, 1);
}

#[tokio::test]
async fn verify_rejects_malformed_code_without_counting() {
    let h = harness();
    let issued = h
        .service
        .request_code(sample_personal_info(), "555-123-4567", true)
        .await
        .unwrap();

    let error = h
        .service
        .verify_code(issued.session_id, "555-123-4567", "12ab56")
        .await
        .unwrap_err();
    assert!(matches!(error, DomainError::ValidationErr(_)));

    let session = h.store.get(&issued.session_id).await.unwrap().unwrap();
    assert_eq!(session.attempts, 0);
}

#[tokio::test]
async fn store_failure_surfaces_as_internal_error() {
    let h = harness();
    h.store.set_fail(true);
    let error = h
        .service
        .verify_code(Uuid::new_v4(), "555-123-4567", "123456")
        .await
        .unwrap_err();
    assert!(matches!(error, DomainError::Internal { .. }));
}
