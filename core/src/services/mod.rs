//! Business services

pub mod mfa;
pub mod submission;

pub use mfa::{IssueCodeResult, MfaService, MfaServiceConfig, SmsServiceTrait, VerifyCodeResult};
pub use submission::{RequestStatusResult, SubmissionService, SubmitResult};
