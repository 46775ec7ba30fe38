//! Cache configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Decode cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Lifetime of a decoded VIN in seconds
    #[serde(default = "default_cache_ttl")]
    pub ttl_seconds: u64,
    /// Interval of the background purge of expired entries; no purge when unset
    #[serde(default)]
    pub purge_interval_secs: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_cache_ttl(),
            purge_interval_secs: None,
        }
    }
}

impl CacheConfig {
    /// Entry lifetime as a duration
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }

    /// Purge interval as a duration
    pub fn purge_interval(&self) -> Option<Duration> {
        self.purge_interval_secs.map(Duration::from_secs)
    }

    /// Merge cache configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.ttl_seconds != default_cache_ttl() {
            self.ttl_seconds = other.ttl_seconds;
        }
        if other.purge_interval_secs.is_some() {
            self.purge_interval_secs = other.purge_interval_secs;
        }
        self
    }
}
