//! Maintenance helpers for the rate limiter

use super::limiter::RateLimiter;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::debug;

impl RateLimiter {
    /// Drop clients whose windows are empty, returning how many were removed
    pub fn cleanup(&self) -> usize {
        self.cleanup_at(Instant::now())
    }

    /// Cleanup as of `now`
    pub fn cleanup_at(&self, now: Instant) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| {
            entry.prune(now, self.window);
            !entry.timestamps.is_empty()
        });
        let removed = before - entries.len();

        if removed > 0 {
            debug!("Rate limiter dropped {} idle clients", removed);
        }
        removed
    }

    /// Start background cleanup task
    pub fn start_cleanup_task(self: Arc<Self>, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                self.cleanup();
            }
        })
    }

    /// Number of clients currently tracked
    pub fn tracked_keys(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if rate limiting is enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Get the configured limit
    pub fn limit(&self) -> u32 {
        self.config.max_requests
    }

    /// Get the window length
    pub fn window(&self) -> Duration {
        self.window
    }
}
