//! Sliding window algorithm

use super::limiter::RateLimiter;
use super::types::{RateLimitEntry, RateLimitResult};
use std::time::{Duration, Instant};
use tracing::debug;

impl RateLimiter {
    /// Sliding window rate limiting implementation
    /// If `record` is true, atomically records the request if allowed.
    /// Unknown keys are only inserted when recording.
    pub(super) fn sliding_window(&self, key: &str, now: Instant, record: bool) -> RateLimitResult {
        let limit = self.config.max_requests;

        let mut entries = self.entries.lock();
        let mut unseen = RateLimitEntry::default();
        // Avoid String allocation if key already exists
        let entry = if let Some(e) = entries.get_mut(key) {
            e
        } else if record {
            entries.entry(key.to_string()).or_default()
        } else {
            &mut unseen
        };

        entry.prune(now, self.window);

        let current_count = entry.timestamps.len() as u32;
        let allowed = current_count < limit;
        let remaining = limit.saturating_sub(current_count);

        let reset_after_secs = match entry.timestamps.front() {
            Some(&oldest) => {
                ceil_secs(self.window.saturating_sub(now.saturating_duration_since(oldest)))
            }
            None => ceil_secs(self.window),
        };

        let retry_after_secs = if !allowed {
            debug!(
                "Rate limit exceeded for {}: {}/{} requests",
                key, current_count, limit
            );
            Some(reset_after_secs.max(1))
        } else {
            if record {
                entry.timestamps.push_back(now);
            }
            None
        };

        RateLimitResult {
            allowed,
            current_count,
            limit,
            remaining: if record && allowed {
                remaining.saturating_sub(1)
            } else {
                remaining
            },
            reset_after_secs,
            retry_after_secs,
        }
    }
}

/// Whole seconds, rounded up
fn ceil_secs(duration: Duration) -> u64 {
    let secs = duration.as_secs();
    if duration.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}
