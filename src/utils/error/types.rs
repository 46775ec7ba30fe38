//! Error type definitions

use crate::core::vin::DecodeError;
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// VIN decoding failures; the message never reveals which check failed
    #[error("{0}")]
    Decode(#[from] DecodeError),

    /// Client exceeded its request budget
    #[error("{message}")]
    RateLimit {
        message: String,
        retry_after_secs: Option<u64>,
    },

    /// Malformed request parameters
    #[error("{0}")]
    InvalidParameters(String),

    /// Not found errors
    #[error("{0}")]
    NotFound(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
