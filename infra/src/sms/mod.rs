//! SMS delivery implementations
//!
//! Only the mock exists: the real dispatch path is intentionally absent
//! in this deployment, and verification codes are written to the
//! operational log instead.

pub mod mock_sms;

pub use mock_sms::MockSmsService;
