//! Configuration for the MFA service

use crate::domain::entities::mfa_session::{DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS};

/// Configuration for the MFA service
#[derive(Debug, Clone)]
pub struct MfaServiceConfig {
    /// Number of minutes before an MFA session expires
    pub code_expiration_minutes: i64,
    /// Maximum number of verification attempts allowed
    pub max_attempts: u32,
}

impl Default for MfaServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}
