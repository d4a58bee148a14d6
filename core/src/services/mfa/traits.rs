//! Traits for SMS delivery integration

use async_trait::async_trait;

/// Trait for SMS delivery integration
///
/// The production deployment is a console-logging mock; a real SMS
/// provider would implement the same contract.
#[async_trait]
pub trait SmsServiceTrait: Send + Sync {
    /// Send a verification code via SMS, returning a provider message id
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String>;

    /// Check if the phone number format is valid for this provider
    fn is_valid_phone_number(&self, phone: &str) -> bool;
}
