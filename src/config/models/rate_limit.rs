//! Rate limiting configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Rate limiting configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Requests admitted per client within one window
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
    /// Sliding window length in seconds
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,
    /// Interval of the background sweep of idle clients; no sweep when unset
    #[serde(default)]
    pub cleanup_interval_secs: Option<u64>,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_requests: default_max_requests(),
            window_seconds: default_window_seconds(),
            cleanup_interval_secs: None,
        }
    }
}

impl RateLimitConfig {
    /// Window length as a duration
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_seconds)
    }

    /// Sweep interval as a duration
    pub fn cleanup_interval(&self) -> Option<Duration> {
        self.cleanup_interval_secs.map(Duration::from_secs)
    }

    /// Merge rate limit configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.max_requests != default_max_requests() {
            self.max_requests = other.max_requests;
        }
        if other.window_seconds != default_window_seconds() {
            self.window_seconds = other.window_seconds;
        }
        if other.cleanup_interval_secs.is_some() {
            self.cleanup_interval_secs = other.cleanup_interval_secs;
        }
        self
    }
}
