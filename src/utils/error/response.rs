//! HTTP response mapping for gateway errors

use super::types::GatewayError;
use actix_web::http::StatusCode;
use actix_web::http::header::{HeaderValue, RETRY_AFTER};
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use tracing::error;

const SERVER_ERROR_MESSAGE: &str = "An unexpected error occurred";
const INVALID_PARAMETERS_MESSAGE: &str = "Invalid request parameters";

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub timestamp: i64,
}

impl GatewayError {
    /// Build the JSON body sent for this error
    pub fn to_error_response(&self) -> ErrorResponse {
        let (message, details) = match self {
            GatewayError::Decode(_)
            | GatewayError::RateLimit { .. }
            | GatewayError::NotFound(_) => (self.to_string(), None),
            GatewayError::InvalidParameters(reason) => {
                (INVALID_PARAMETERS_MESSAGE.to_string(), Some(reason.clone()))
            }
            _ => (SERVER_ERROR_MESSAGE.to_string(), None),
        };

        ErrorResponse {
            success: false,
            error: ErrorDetail {
                error_type: self.error_type().to_string(),
                message,
                details,
                timestamp: chrono::Utc::now().timestamp(),
            },
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Decode(_) => StatusCode::BAD_REQUEST,
            GatewayError::RateLimit { .. } => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::InvalidParameters(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        let mut builder = HttpResponse::build(status);
        if let GatewayError::RateLimit {
            retry_after_secs: Some(secs),
            ..
        } = self
        {
            builder.insert_header((RETRY_AFTER, HeaderValue::from(*secs)));
        }

        builder.json(self.to_error_response())
    }
}
