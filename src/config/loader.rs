//! Configuration loading utilities
//!
//! Environment variable overrides applied on top of file or default configuration.

use super::models::*;
use crate::utils::error::{GatewayError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

impl GatewayConfig {
    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|name| env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable source
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("GATEWAY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = parse_var(&lookup, "GATEWAY_PORT")? {
            self.server.port = port;
        }
        if let Some(workers) = parse_var(&lookup, "GATEWAY_WORKERS")? {
            self.server.workers = Some(workers);
        }
        if let Some(ttl) = parse_var(&lookup, "CACHE_TTL_SECONDS")? {
            self.cache.ttl_seconds = ttl;
        }
        if let Some(interval) = parse_var(&lookup, "CACHE_PURGE_INTERVAL_SECS")? {
            self.cache.purge_interval_secs = Some(interval);
        }
        if let Some(enabled) = parse_var(&lookup, "RATE_LIMIT_ENABLED")? {
            self.rate_limit.enabled = enabled;
        }
        if let Some(max_requests) = parse_var(&lookup, "RATE_LIMIT_MAX_REQUESTS")? {
            self.rate_limit.max_requests = max_requests;
        }
        if let Some(window) = parse_var(&lookup, "RATE_LIMIT_WINDOW_SECONDS")? {
            self.rate_limit.window_seconds = window;
        }
        if let Some(interval) = parse_var(&lookup, "RATE_LIMIT_CLEANUP_INTERVAL_SECS")? {
            self.rate_limit.cleanup_interval_secs = Some(interval);
        }

        debug!("Configuration overrides applied from environment");
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| GatewayError::config(format!("Invalid {}: {}", name, e))),
        None => Ok(None),
    }
}
