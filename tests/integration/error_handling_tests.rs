//! Error handling integration tests
//!
//! Tests for error types, their HTTP mapping, and the JSON error envelope.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::Value;
    use vin_gateway::server::HttpServer;
    use vin_gateway::utils::error::GatewayError;
    use vin_gateway::{DecodeError, VinDecoder};

    // ==================== DecodeError to GatewayError Conversion ====================

    /// Invalid VINs map to 400
    #[::core::prelude::v1::test]
    fn test_decode_error_flow() {
        let decode_err = VinDecoder::new().decode("").unwrap_err();
        let gateway_err: GatewayError = decode_err.into();

        assert!(matches!(
            gateway_err,
            GatewayError::Decode(DecodeError::InvalidVin { .. })
        ));
        assert_eq!(gateway_err.to_string(), "Invalid VIN");
        assert_eq!(gateway_err.error_response().status().as_u16(), 400);
    }

    /// Rate limit errors map to 429 with Retry-After
    #[::core::prelude::v1::test]
    fn test_rate_limit_error_flow() {
        let gateway_err = GatewayError::rate_limited(Some(7));

        let response = gateway_err.error_response();
        assert_eq!(response.status().as_u16(), 429);
        assert_eq!(response.headers().get("retry-after").unwrap(), "7");
    }

    /// Internal failures never leak their message
    #[::core::prelude::v1::test]
    fn test_internal_error_is_opaque() {
        let gateway_err = GatewayError::server("database password is hunter2");
        let body = gateway_err.to_error_response();

        assert_eq!(gateway_err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.error_type, "ServerError");
        assert_eq!(body.error.message, "An unexpected error occurred");
        assert!(body.error.details.is_none());
    }

    /// Configuration errors are server errors
    #[::core::prelude::v1::test]
    fn test_configuration_error_flow() {
        let gateway_err = GatewayError::config("bad port");
        assert_eq!(gateway_err.error_response().status().as_u16(), 500);
        assert_eq!(gateway_err.error_type(), "ServerError");
    }

    /// Parameter errors map to 422 with the fixed message
    #[::core::prelude::v1::test]
    fn test_invalid_parameters_flow() {
        let gateway_err = GatewayError::invalid_parameters("segment not utf-8");
        let body = gateway_err.to_error_response();

        assert_eq!(gateway_err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error.error_type, "ValidationError");
        assert_eq!(body.error.message, "Invalid request parameters");
        assert_eq!(body.error.details.as_deref(), Some("segment not utf-8"));
    }

    /// IO errors convert through `?`
    #[::core::prelude::v1::test]
    fn test_io_error_conversion() {
        fn read() -> vin_gateway::Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here")?)
        }

        let err = read().unwrap_err();
        assert!(matches!(err, GatewayError::Io(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    // ==================== HTTP envelope ====================

    #[actix_web::test]
    async fn test_unknown_route_envelope() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let res = test::call_service(&app, get_from("/api/v2/anything", "10.2.0.1").to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["type"], "NotFound");
        assert!(body["error"]["timestamp"].is_i64());
    }

    #[actix_web::test]
    async fn test_missing_vin_segment_is_not_found() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let res = test::call_service(&app, get_from("/api/v1/vin/decode/", "10.2.0.2").to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_invalid_vin_envelope_has_no_details() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = get_from("/api/v1/vin/decode/1HGCM82633A00435", "10.2.0.3").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"]["message"], "Invalid VIN");
        assert!(body["error"].get("details").is_none());
    }
}
