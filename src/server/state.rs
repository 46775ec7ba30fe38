//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::config::Config;
use crate::core::rate_limiter::RateLimiter;
use crate::core::vin::VinDecoder;
use crate::services::recalls::RecallService;
use std::sync::Arc;
use tracing::debug;

/// HTTP server state shared across handlers
///
/// Built once at startup and handed to every worker. All fields are wrapped
/// in Arc for efficient sharing across threads.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// VIN decoder and its result cache
    pub decoder: Arc<VinDecoder>,
    /// Per-client limiter for the VIN endpoints
    pub rate_limiter: Arc<RateLimiter>,
    /// Recall lookup
    pub recalls: Arc<RecallService>,
}

impl AppState {
    /// Create a new AppState from configuration
    pub fn new(config: Config) -> Self {
        debug!(
            cache_ttl_secs = config.cache().ttl_seconds,
            max_requests = config.rate_limit().max_requests,
            window_secs = config.rate_limit().window_seconds,
            "Building application state"
        );

        let decoder = VinDecoder::with_cache_ttl(config.cache().ttl());
        let rate_limiter = RateLimiter::new(config.rate_limit().clone());

        Self {
            config: Arc::new(config),
            decoder: Arc::new(decoder),
            rate_limiter: Arc::new(rate_limiter),
            recalls: Arc::new(RecallService::new()),
        }
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
