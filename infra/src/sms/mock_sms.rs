//! Mock SMS Service Implementation
//!
//! Logs verification codes to the console instead of sending them. This
//! is the production behavior of this deployment: SMS delivery is
//! simulated, and the code surfaces in the operational log.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use pir_core::services::mfa::SmsServiceTrait;
use pir_shared::utils::phone::{is_valid_na_phone, mask_phone_number};

/// Mock SMS service for development and testing
///
/// This implementation:
/// - Logs SMS messages to console
/// - Validates phone numbers against the North-American pattern
/// - Generates mock message IDs
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockSmsService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockSmsService {
    /// Create a new mock SMS service
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock service with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockSmsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsServiceTrait for MockSmsService {
    async fn send_verification_code(&self, phone: &str, code: &str) -> Result<String, String> {
        if self.simulate_failure {
            warn!(
                phone = %mask_phone_number(phone),
                "Mock SMS service simulating failure"
            );
            return Err("Simulated SMS sending failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            // Console output is the delivery channel in this deployment.
            println!("\n{}", "=".repeat(60));
            println!("MOCK SMS - MESSAGE #{count}");
            println!("{}", "=".repeat(60));
            println!("To: {phone}");
            println!("MFA code: {code}");
            println!("Message ID: {message_id}");
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "sms_service",
            provider = "mock",
            phone = %mask_phone_number(phone),
            message_id = %message_id,
            "SMS sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn is_valid_phone_number(&self, phone: &str) -> bool {
        is_valid_na_phone(phone)
    }
}
