//! MFA session entity for SMS-based verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::personal_info::PersonalInfo;

/// Maximum number of verification attempts allowed
pub const MAX_ATTEMPTS: u32 = 3;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for MFA sessions (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// Short-lived server-side record binding a one-time code to a phone
/// number and pending identity payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MfaSession {
    /// Session identifier handed back to the caller
    pub id: Uuid,

    /// The 6-digit verification code
    pub code: String,

    /// Normalized 10-digit destination phone number
    pub phone_number: String,

    /// Identity payload pending submission
    pub personal_info: PersonalInfo,

    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the session expires
    pub expires_at: DateTime<Utc>,

    /// Number of verification attempts made
    pub attempts: u32,

    /// Maximum allowed attempts
    pub max_attempts: u32,

    /// Whether a correct code has been confirmed
    pub verified: bool,

    /// Timestamp of the successful verification, set at most once
    pub verified_at: Option<DateTime<Utc>>,
}

impl MfaSession {
    /// Creates a new session with a random 6-digit code and the default
    /// 5-minute expiry
    pub fn new(phone_number: String, personal_info: PersonalInfo, now: DateTime<Utc>) -> Self {
        Self::with_expiration(phone_number, personal_info, now, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new session with a custom expiration window
    pub fn with_expiration(
        phone_number: String,
        personal_info: PersonalInfo,
        now: DateTime<Utc>,
        expiration_minutes: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: Self::generate_code(),
            phone_number,
            personal_info,
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
            attempts: 0,
            max_attempts: MAX_ATTEMPTS,
            verified: false,
            verified_at: None,
        }
    }

    /// Generates a random 6-digit code, uniform over 100000..=999999
    ///
    /// Not cryptographically strong; the code is a short-lived shared
    /// secret for a mock delivery channel.
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        rng.gen_range(100_000..1_000_000u32).to_string()
    }

    /// Checks if the session has expired
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Checks if the attempt budget is already spent
    pub fn attempts_exhausted(&self) -> bool {
        self.attempts >= self.max_attempts
    }

    /// Records one verification attempt against this session
    ///
    /// Increments the attempt counter unconditionally, then compares the
    /// supplied code in constant time. On a match the session becomes
    /// verified and `verified_at` is set if it was not already.
    ///
    /// Returns `true` when the code matched.
    pub fn record_attempt(&mut self, input_code: &str, now: DateTime<Utc>) -> bool {
        self.attempts += 1;

        let matched = input_code.len() == self.code.len()
            && constant_time_eq(self.code.as_bytes(), input_code.as_bytes());
        if matched {
            self.verified = true;
            if self.verified_at.is_none() {
                self.verified_at = Some(now);
            }
        }
        matched
    }

    /// Gets the number of remaining verification attempts
    pub fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    /// Seconds until expiry, measured from session creation
    pub fn expires_in_seconds(&self) -> i64 {
        (self.expires_at - self.created_at).num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_info() -> PersonalInfo {
        PersonalInfo {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            address: "123 Main Street, Springfield".to_string(),
            state: "IL".to_string(),
            email: "jane.doe@example.com".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 4, 12).unwrap(),
            ssn: "123-45-6789".to_string(),
        }
    }

    fn new_session(now: DateTime<Utc>) -> MfaSession {
        MfaSession::new("5551234567".to_string(), sample_info(), now)
    }

    #[test]
    fn test_new_session_defaults() {
        let now = Utc::now();
        let session = new_session(now);

        assert_eq!(session.phone_number, "5551234567");
        assert_eq!(session.attempts, 0);
        assert_eq!(session.max_attempts, MAX_ATTEMPTS);
        assert!(!session.verified);
        assert!(session.verified_at.is_none());
        assert_eq!(session.expires_at, now + Duration::minutes(5));
        assert_eq!(session.expires_in_seconds(), 300);
    }

    #[test]
    fn test_generate_code_format() {
        for _ in 0..100 {
            let code = MfaSession::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            let num: u32 = code.parse().expect("code should be numeric");
            assert!((100_000..1_000_000).contains(&num));
        }
    }

    #[test]
    fn test_is_expired() {
        let now = Utc::now();
        let session = new_session(now);

        assert!(!session.is_expired(now));
        assert!(!session.is_expired(now + Duration::minutes(5)));
        assert!(session.is_expired(now + Duration::minutes(5) + Duration::seconds(1)));
    }

    #[test]
    fn test_record_attempt_success() {
        let now = Utc::now();
        let mut session = new_session(now);
        let code = session.code.clone();

        assert!(session.record_attempt(&code, now));
        assert!(session.verified);
        assert_eq!(session.verified_at, Some(now));
        assert_eq!(session.attempts, 1);
    }

    #[test]
    fn test_record_attempt_failure_counts() {
        let now = Utc::now();
        let mut session = new_session(now);

        assert!(!session.record_attempt("000000", now));
        assert!(!session.verified);
        assert_eq!(session.attempts, 1);
        assert_eq!(session.remaining_attempts(), 2);
    }

    #[test]
    fn test_verified_at_set_once() {
        let now = Utc::now();
        let mut session = new_session(now);
        let code = session.code.clone();

        assert!(session.record_attempt(&code, now));
        let later = now + Duration::seconds(30);
        assert!(session.record_attempt(&code, later));
        assert_eq!(session.verified_at, Some(now));
    }

    #[test]
    fn test_attempts_exhausted() {
        let now = Utc::now();
        let mut session = new_session(now);

        for _ in 0..MAX_ATTEMPTS {
            assert!(!session.attempts_exhausted());
            session.record_attempt("000000", now);
        }
        assert!(session.attempts_exhausted());
        assert_eq!(session.remaining_attempts(), 0);
    }

    #[test]
    fn test_serialization_round_trip() {
        let session = new_session(Utc::now());
        let json = serde_json::to_string(&session).unwrap();
        let deserialized: MfaSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, deserialized);
    }
}
