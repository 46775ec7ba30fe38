//! Core rate limiter implementation

use super::types::{RateLimitEntry, RateLimitResult};
use crate::config::models::rate_limit::RateLimitConfig;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Sliding window rate limiter keyed by client identifier
///
/// A single mutex guards the whole table, so every check-and-record is atomic
/// for its key. The table is never pruned on its own; see
/// [`cleanup`](Self::cleanup) and [`start_cleanup_task`](Self::start_cleanup_task).
pub struct RateLimiter {
    /// Rate limit configuration
    pub(super) config: RateLimitConfig,
    /// Rate limit entries by key (client IP)
    pub(super) entries: Arc<Mutex<HashMap<String, RateLimitEntry>>>,
    /// Window duration
    pub(super) window: Duration,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(config: RateLimitConfig) -> Self {
        let window = Duration::from_secs(config.window_seconds);
        Self {
            config,
            entries: Arc::new(Mutex::new(HashMap::new())),
            window,
        }
    }

    /// Create an enabled rate limiter with explicit limits
    pub fn with_limits(max_requests: u32, window: Duration) -> Self {
        let config = RateLimitConfig {
            enabled: true,
            max_requests,
            window_seconds: window.as_secs(),
            cleanup_interval_secs: None,
        };
        Self {
            config,
            entries: Arc::new(Mutex::new(HashMap::new())),
            window,
        }
    }

    /// Admit or reject a request from `key`, recording it when admitted
    pub fn allow_request(&self, key: &str) -> bool {
        self.check_and_record(key).allowed
    }

    /// Check if a request would be allowed (read-only, does not record)
    pub fn check(&self, key: &str) -> RateLimitResult {
        self.check_at(key, Instant::now())
    }

    /// Read-only check as of `now`
    pub fn check_at(&self, key: &str, now: Instant) -> RateLimitResult {
        if !self.config.enabled {
            return RateLimitResult::unlimited(self.config.max_requests);
        }
        self.sliding_window(key, now, false)
    }

    /// Atomically check and record a request
    pub fn check_and_record(&self, key: &str) -> RateLimitResult {
        self.check_and_record_at(key, Instant::now())
    }

    /// Atomically check and record a request arriving at `now`
    pub fn check_and_record_at(&self, key: &str, now: Instant) -> RateLimitResult {
        if !self.config.enabled {
            return RateLimitResult::unlimited(self.config.max_requests);
        }
        self.sliding_window(key, now, true)
    }
}

impl Clone for RateLimiter {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            entries: self.entries.clone(),
            window: self.window,
        }
    }
}
