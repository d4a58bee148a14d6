//! Domain-specific error types and error handling.

use thiserror::Error;

/// MFA session lifecycle errors
///
/// These errors represent business-rule rejections from the issuance,
/// verification, and submission flows. HTTP status mapping lives in the
/// presentation layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MfaError {
    #[error("Invalid or expired session")]
    InvalidSession,

    #[error("MFA code has expired. Please request a new code.")]
    CodeExpired,

    #[error("Too many failed attempts. Please request a new code.")]
    MaxAttemptsExceeded,

    #[error("Phone number mismatch")]
    PhoneMismatch,

    #[error("Session has already been verified")]
    AlreadyVerified,

    #[error("Invalid MFA code. {remaining} attempts remaining.")]
    InvalidCode { remaining: u32 },

    #[error("Human verification required")]
    HumanVerificationRequired,

    #[error("MFA verification required")]
    VerificationRequired,

    #[error("Failed to send MFA code. Please try again.")]
    SmsServiceFailure,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Pattern mismatch for field: {field}")]
    PatternMismatch { field: String },
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Mfa(#[from] MfaError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;
