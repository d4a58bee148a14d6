//! Rate limiting configuration module

use serde::{Deserialize, Serialize};
use std::env;

/// Per-IP rate limiting configuration
///
/// Two fixed windows are enforced: a general limit covering everything
/// under `/api`, and a stricter limit on the MFA endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// General API requests allowed per IP per window
    pub api_max_requests: u32,
    /// General API window length in seconds
    pub api_window_secs: u64,
    /// MFA endpoint requests allowed per IP per window
    pub mfa_max_requests: u32,
    /// MFA endpoint window length in seconds
    pub mfa_window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            api_max_requests: 100,
            api_window_secs: 15 * 60,
            mfa_max_requests: 5,
            mfa_window_secs: 15 * 60,
        }
    }
}

impl RateLimitConfig {
    /// Load rate limit configuration from the environment
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_max_requests: env_or("RATE_LIMIT_API_MAX", defaults.api_max_requests),
            api_window_secs: env_or("RATE_LIMIT_API_WINDOW_SECS", defaults.api_window_secs),
            mfa_max_requests: env_or("RATE_LIMIT_MFA_MAX", defaults.mfa_max_requests),
            mfa_window_secs: env_or("RATE_LIMIT_MFA_WINDOW_SECS", defaults.mfa_window_secs),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RateLimitConfig::default();
        assert_eq!(config.api_max_requests, 100);
        assert_eq!(config.mfa_max_requests, 5);
        assert_eq!(config.api_window_secs, 900);
    }
}
