//! HTTP middleware implementations
//!
//! This module provides the middleware used by the gateway:
//! - Per-client rate limiting for the VIN endpoints
//! - Request ID tracking
//! - Request logging
//! - Security headers

mod rate_limit;
mod request_id;
mod request_logging;
mod security;


// Re-export all middleware
pub use rate_limit::{RateLimitMiddleware, RateLimitMiddlewareService, client_key};
pub use request_id::{REQUEST_ID_HEADER, RequestIdMiddleware, RequestIdMiddlewareService};
pub use request_logging::{RequestLoggingMiddleware, RequestLoggingMiddlewareService};
pub use security::{SecurityHeadersMiddleware, SecurityHeadersMiddlewareService};
