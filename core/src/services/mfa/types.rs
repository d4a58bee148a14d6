//! Types for MFA service results

use uuid::Uuid;

/// Result of issuing an MFA code
#[derive(Debug, Clone)]
pub struct IssueCodeResult {
    /// Identifier of the freshly created session
    pub session_id: Uuid,
    /// Destination phone number, masked for display
    pub masked_phone: String,
    /// Seconds until the session expires
    pub expires_in: i64,
}

/// Result of a successful code verification
#[derive(Debug, Clone)]
pub struct VerifyCodeResult {
    /// Identifier of the verified session
    pub session_id: Uuid,
    /// Always `true`; failures are reported as errors
    pub verified: bool,
}
