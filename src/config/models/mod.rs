//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

pub mod cache;
pub mod gateway;
pub mod rate_limit;
pub mod server;

// Re-export all configuration types
pub use cache::*;
pub use gateway::*;
pub use rate_limit::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default decode cache TTL in seconds
pub fn default_cache_ttl() -> u64 {
    300
}

/// Default requests admitted per window and client
pub fn default_max_requests() -> u32 {
    5
}

/// Default rate limit window in seconds
pub fn default_window_seconds() -> u64 {
    10
}

pub fn default_true() -> bool {
    true
}
