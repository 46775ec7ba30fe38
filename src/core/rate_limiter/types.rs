//! Rate limiter types and data structures

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Rate limit result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    /// Whether the request is allowed
    pub allowed: bool,
    /// Requests counted in the window before this one
    pub current_count: u32,
    /// Maximum requests allowed
    pub limit: u32,
    /// Remaining requests in the window
    pub remaining: u32,
    /// Time until the oldest counted request leaves the window (in seconds)
    pub reset_after_secs: u64,
    /// Retry after (in seconds, only set when not allowed)
    pub retry_after_secs: Option<u64>,
}

impl RateLimitResult {
    /// Result reported while rate limiting is switched off
    pub(super) fn unlimited(limit: u32) -> Self {
        Self {
            allowed: true,
            current_count: 0,
            limit,
            remaining: limit,
            reset_after_secs: 0,
            retry_after_secs: None,
        }
    }
}

/// Admitted request timestamps for one client, oldest first
#[derive(Debug, Clone, Default)]
pub(super) struct RateLimitEntry {
    pub(super) timestamps: VecDeque<Instant>,
}

impl RateLimitEntry {
    /// Drop timestamps that are `window` or more in the past
    pub(super) fn prune(&mut self, now: Instant, window: Duration) {
        while let Some(&oldest) = self.timestamps.front() {
            if now.saturating_duration_since(oldest) < window {
                break;
            }
            self.timestamps.pop_front();
        }
    }
}
