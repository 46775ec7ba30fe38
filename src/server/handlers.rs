//! HTTP route handlers
//!
//! This module provides HTTP route handler functions.

use crate::utils::error::GatewayError;
use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;

/// Root liveness endpoint
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Fallback for unmatched routes
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, GatewayError> {
    Err(GatewayError::not_found(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}
