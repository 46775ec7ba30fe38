//! Helper functions for creating specific error types

use super::types::GatewayError;

/// Message returned to clients that exceed the rate limit
pub const RATE_LIMIT_MESSAGE: &str = "Too many requests. Please try again later.";

impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn rate_limited(retry_after_secs: Option<u64>) -> Self {
        Self::RateLimit {
            message: RATE_LIMIT_MESSAGE.to_string(),
            retry_after_secs,
        }
    }

    pub fn invalid_parameters<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameters(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Error kind reported in the `type` field of error responses; every
    /// client error kind has its own label
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Decode(_) => "InvalidVin",
            Self::RateLimit { .. } => "RateLimitExceeded",
            Self::InvalidParameters(_) => "ValidationError",
            Self::NotFound(_) => "NotFound",
            Self::Config(_)
            | Self::Io(_)
            | Self::Yaml(_)
            | Self::Serialization(_)
            | Self::Internal(_) => "ServerError",
        }
    }
}
