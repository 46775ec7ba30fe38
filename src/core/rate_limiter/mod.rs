//! Rate Limiting Implementation
//!
//! Per-client sliding window rate limiting

mod limiter;
mod types;
mod utils;
mod window;


// Re-export public types
pub use limiter::RateLimiter;
pub use types::RateLimitResult;
