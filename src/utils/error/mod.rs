//! Error handling for the gateway
//!
//! Defines the crate-wide error type and its mapping onto JSON error responses.

mod helpers;
mod response;
mod types;


pub use response::{ErrorDetail, ErrorResponse};
pub use types::{GatewayError, Result};
