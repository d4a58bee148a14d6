//! Shared utilities and common types for the PI request server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The JSON response envelope
//! - Utility functions (phone normalization, masking, format checks)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{Environment, RateLimitConfig, ServerConfig};
pub use types::response::ApiResponse;
pub use utils::{masking, phone, validation};
