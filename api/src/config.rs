//! API configuration loaded from the environment

use pir_shared::config::{Environment, RateLimitConfig, ServerConfig};

/// Complete configuration for the API binary
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub rate_limit: RateLimitConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}
