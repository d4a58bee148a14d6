//! Configuration types for the PI request server
//!
//! Configuration is sourced from environment variables with sensible
//! development defaults; there is no external config file.

pub mod environment;
pub mod rate_limit;
pub mod server;

pub use environment::Environment;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;
