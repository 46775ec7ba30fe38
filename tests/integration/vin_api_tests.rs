//! VIN endpoint integration tests

#[cfg(test)]
mod tests {
    use crate::common::fixtures::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::Value;
    use vin_gateway::server::HttpServer;

    const CLIENT: &str = "10.1.0.1";

    // ==================== Validate ====================

    #[actix_web::test]
    async fn test_validate_valid_vin() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = get_from(&format!("/api/v1/vin/validate/{}", HONDA_VIN), CLIENT).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["vin"], HONDA_VIN);
        assert_eq!(body["data"]["is_valid"], true);
    }

    #[actix_web::test]
    async fn test_validate_invalid_vin_is_not_an_error() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        for vin in [FORBIDDEN_LETTER_VIN, "1hgcm82633a004352", "SHORT"] {
            let req = get_from(&format!("/api/v1/vin/validate/{}", vin), CLIENT).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::OK);

            let body: Value = test::read_body_json(res).await;
            assert_eq!(body["data"]["vin"], vin);
            assert_eq!(body["data"]["is_valid"], false);
        }
    }

    // ==================== Decode ====================

    #[actix_web::test]
    async fn test_decode_honda() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = get_from(&format!("/api/v1/vin/decode/{}", HONDA_VIN), CLIENT).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["vin"], HONDA_VIN);
        assert_eq!(body["data"]["manufacturer"], "Honda (USA)");
        assert_eq!(body["data"]["model_year"], 2003);
    }

    #[actix_web::test]
    async fn test_decode_unknown_renders_sentinels() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = get_from(&format!("/api/v1/vin/decode/{}", UNKNOWN_VIN), CLIENT).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["manufacturer"], "Unknown Manufacturer");
        assert_eq!(body["data"]["model_year"], "Unknown");
    }

    #[actix_web::test]
    async fn test_decode_invalid_vin_returns_400() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = get_from(
            &format!("/api/v1/vin/decode/{}", FORBIDDEN_LETTER_VIN),
            CLIENT,
        )
        .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["type"], "InvalidVin");
        assert_eq!(body["error"]["message"], "Invalid VIN");
    }

    #[actix_web::test]
    async fn test_decode_trims_encoded_whitespace() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = get_from(&format!("/api/v1/vin/decode/%20{}%20", FORD_VIN), CLIENT).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["data"]["vin"], FORD_VIN);
        assert_eq!(body["data"]["manufacturer"], "Ford (USA)");
        assert_eq!(body["data"]["model_year"], 2002);
    }

    #[actix_web::test]
    async fn test_repeated_decode_hits_cache() {
        let state = default_state();
        let app = test::init_service(HttpServer::create_app(state.clone())).await;

        for _ in 0..3 {
            let req = get_from(&format!("/api/v1/vin/decode/{}", HONDA_VIN), CLIENT).to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        }

        let stats = state.decoder.cache_stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.entries, 1);
    }

    // ==================== Recalls ====================

    #[actix_web::test]
    async fn test_recalls_for_honda() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = get_from(&format!("/api/v1/vin/recalls/{}", HONDA_VIN), CLIENT).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["vin"], HONDA_VIN);
        assert_eq!(body["data"]["manufacturer"], "Honda (USA)");

        let recalls = body["data"]["recalls"].as_array().unwrap();
        assert_eq!(recalls.len(), 1);
        assert_eq!(recalls[0]["campaign_id"], "HND-2023-001");
        assert_eq!(recalls[0]["issue"], "Airbag inflator may rupture");
        assert_eq!(recalls[0]["severity"], "High");
    }

    #[actix_web::test]
    async fn test_recalls_for_ford() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = get_from(&format!("/api/v1/vin/recalls/{}", FORD_VIN), CLIENT).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["recalls"][0]["campaign_id"], "FRD-2022-014");
        assert_eq!(body["data"]["recalls"][0]["severity"], "Medium");
    }

    #[actix_web::test]
    async fn test_recalls_empty_for_unlisted_and_unknown_manufacturers() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        for (vin, manufacturer) in [
            (CHEVROLET_VIN, "Chevrolet (USA)"),
            (UNKNOWN_VIN, "Unknown Manufacturer"),
        ] {
            let req = get_from(&format!("/api/v1/vin/recalls/{}", vin), CLIENT).to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;

            assert_eq!(body["data"]["manufacturer"], manufacturer);
            assert_eq!(body["data"]["recalls"], serde_json::json!([]));
        }
    }

    #[actix_web::test]
    async fn test_recalls_invalid_vin_returns_400() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = get_from("/api/v1/vin/recalls/NOT-A-VIN", CLIENT).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"]["message"], "Invalid VIN");
    }

    // ==================== Headers ====================

    #[actix_web::test]
    async fn test_security_headers_on_success_and_error() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        for uri in [
            "/".to_string(),
            "/health".to_string(),
            format!("/api/v1/vin/decode/{}", HONDA_VIN),
            "/api/v1/vin/decode/BAD".to_string(),
            "/no/such/route".to_string(),
        ] {
            let res = test::call_service(&app, get_from(&uri, CLIENT).to_request()).await;
            let headers = res.headers();

            assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff", "{}", uri);
            assert_eq!(headers.get("x-frame-options").unwrap(), "DENY", "{}", uri);
            assert_eq!(headers.get("x-xss-protection").unwrap(), "1; mode=block", "{}", uri);
            assert_eq!(
                headers.get("strict-transport-security").unwrap(),
                "max-age=31536000; includeSubDomains",
                "{}",
                uri
            );
            assert!(headers.contains_key("x-request-id"), "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_rate_limit_headers_on_vin_endpoints_only() {
        let app = test::init_service(HttpServer::create_app(default_state())).await;

        let req = get_from(&format!("/api/v1/vin/validate/{}", HONDA_VIN), CLIENT).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.headers().get("x-ratelimit-limit").unwrap(), "5");
        assert_eq!(res.headers().get("x-ratelimit-remaining").unwrap(), "4");

        let res = test::call_service(&app, get_from("/health", CLIENT).to_request()).await;
        assert!(!res.headers().contains_key("x-ratelimit-limit"));
    }
}
