//! VIN endpoints
//!
//! Validation, decoding and recall lookup under `/api/v1/vin`. The scope is
//! wrapped in the rate limiting middleware by the server.

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::services::recalls::RecallRecord;
use crate::utils::error::Result;
use actix_web::{HttpResponse, Scope, web};
use serde::Serialize;
use tracing::debug;

/// Route prefix for the VIN endpoints
pub const VIN_SCOPE: &str = "/api/v1/vin";

/// Build the VIN scope
pub fn scope() -> Scope {
    web::scope(VIN_SCOPE)
        .route("/validate/{vin}", web::get().to(validate_vin))
        .route("/decode/{vin}", web::get().to(decode_vin))
        .route("/recalls/{vin}", web::get().to(get_recalls))
}

/// Result of a validation request
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    /// VIN exactly as received
    pub vin: String,
    pub is_valid: bool,
}

/// Recalls for a decoded VIN
#[derive(Debug, Clone, Serialize)]
pub struct RecallResponse {
    /// VIN exactly as received
    pub vin: String,
    /// Full manufacturer name
    pub manufacturer: &'static str,
    pub recalls: &'static [RecallRecord],
}

/// GET /api/v1/vin/validate/{vin}
pub async fn validate_vin(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let vin = path.into_inner();
    let is_valid = state.decoder.validate(&vin);

    Ok(HttpResponse::Ok().json(ApiResponse::success(ValidationResponse { vin, is_valid })))
}

/// GET /api/v1/vin/decode/{vin}
pub async fn decode_vin(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let decoded = state.decoder.decode(&path)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(decoded)))
}

/// GET /api/v1/vin/recalls/{vin}
pub async fn get_recalls(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let vin = path.into_inner();
    let decoded = state.decoder.decode(&vin)?;

    let token = decoded.manufacturer_token();
    debug!("Looking up recalls for {} (manufacturer token {})", vin, token);
    let recalls = state.recalls.check_recalls(token);

    Ok(HttpResponse::Ok().json(ApiResponse::success(RecallResponse {
        vin,
        manufacturer: decoded.manufacturer_name(),
        recalls,
    })))
}
