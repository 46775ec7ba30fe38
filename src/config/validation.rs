//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::*;
use tracing::warn;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count must be greater than 0".to_string());
        }

        self.cors.validate()
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        if self.allows_all_origins() && self.allow_credentials {
            return Err(
                "CORS cannot allow all origins (*) when credentials are enabled".to_string(),
            );
        }

        if self.allows_all_origins() {
            warn!("CORS allows all origins. This may be insecure for production.");
        }

        for origin in self.allowed_origins.iter().filter(|o| o.as_str() != "*") {
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(format!("Invalid CORS origin: {}", origin));
            }
        }

        Ok(())
    }
}

impl Validate for CacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ttl_seconds == 0 {
            return Err("Cache TTL must be greater than 0".to_string());
        }

        if self.purge_interval_secs == Some(0) {
            return Err("Cache purge interval must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for RateLimitConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_requests == 0 {
            return Err("Rate limit max_requests must be greater than 0".to_string());
        }

        if self.window_seconds == 0 {
            return Err("Rate limit window_seconds must be greater than 0".to_string());
        }

        if self.cleanup_interval_secs == Some(0) {
            return Err("Rate limit cleanup interval must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<(), String> {
        self.server
            .validate()
            .map_err(|e| format!("Server config error: {}", e))?;
        self.cache
            .validate()
            .map_err(|e| format!("Cache config error: {}", e))?;
        self.rate_limit
            .validate()
            .map_err(|e| format!("Rate limit config error: {}", e))?;
        Ok(())
    }
}
