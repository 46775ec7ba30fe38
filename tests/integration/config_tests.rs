//! Configuration integration tests
//!
//! Loads configuration files from disk and checks that the settings reach the
//! assembled application.

#[cfg(test)]
mod tests {
    use crate::assert_err;
    use crate::common::fixtures::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use vin_gateway::Config;
    use vin_gateway::server::builder::load_config;
    use vin_gateway::server::{AppState, HttpServer};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_partial_file_keeps_defaults() {
        let file = write_config("server:\n  port: 9100\n");
        let config = Config::from_file(file.path()).await.unwrap();

        assert_eq!(config.server().port, 9100);
        assert_eq!(config.server().host, "0.0.0.0");
        assert_eq!(config.cache().ttl_seconds, 300);
        assert_eq!(config.rate_limit().max_requests, 5);
        assert_eq!(config.rate_limit().window_seconds, 10);
        assert!(config.rate_limit().cleanup_interval_secs.is_none());
    }

    #[tokio::test]
    async fn test_invalid_file_is_rejected() {
        let file = write_config("rate_limit:\n  window_seconds: 0\n");
        let err = assert_err!(load_config(file.path()).await);
        assert!(err.to_string().contains("window_seconds"));
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_rejected() {
        let file = write_config("server: [unterminated\n");
        assert!(Config::from_file(file.path()).await.is_err());
    }

    #[::core::prelude::v1::test]
    fn test_overrides_from_variables() {
        let vars: HashMap<&str, &str> = [
            ("GATEWAY_PORT", "9200"),
            ("CACHE_TTL_SECONDS", "60"),
            ("RATE_LIMIT_MAX_REQUESTS", "2"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .gateway
            .apply_overrides_from(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server().port, 9200);
        assert_eq!(config.cache().ttl_seconds, 60);
        assert_eq!(config.rate_limit().max_requests, 2);
    }

    #[::core::prelude::v1::test]
    fn test_unparseable_override_is_error() {
        let mut config = Config::default();
        let result = config.gateway.apply_overrides_from(|name| {
            (name == "GATEWAY_PORT").then(|| "eighty".to_string())
        });
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_yaml_round_trip_through_file() {
        let original = Config::default();
        let file = write_config(&original.to_yaml().unwrap());

        let loaded = Config::from_file(file.path()).await.unwrap();
        assert_eq!(loaded, original);
    }

    #[actix_web::test]
    async fn test_configured_limit_reaches_application() {
        let file = write_config("rate_limit:\n  max_requests: 2\n  window_seconds: 30\n");
        let config = Config::from_file(file.path()).await.unwrap();
        let state = web::Data::new(AppState::new(config));
        let app = test::init_service(HttpServer::create_app(state)).await;
        let uri = format!("/api/v1/vin/validate/{}", HONDA_VIN);

        for expected in [StatusCode::OK, StatusCode::OK, StatusCode::TOO_MANY_REQUESTS] {
            let res = test::call_service(&app, get_from(&uri, "10.4.0.1").to_request()).await;
            assert_eq!(res.status(), expected);
        }
    }

    #[actix_web::test]
    async fn test_configured_cache_ttl_reaches_decoder() {
        let file = write_config("cache:\n  ttl_seconds: 42\n");
        let config = Config::from_file(file.path()).await.unwrap();
        let state = AppState::new(config);

        assert_eq!(state.decoder.cache_ttl().as_secs(), 42);
    }

    #[actix_web::test]
    async fn test_largest_cache_ttl_keeps_serving_decodes() {
        let mut config = Config::default();
        config
            .gateway
            .apply_overrides_from(|name| {
                (name == "CACHE_TTL_SECONDS").then(|| u64::MAX.to_string())
            })
            .unwrap();
        config.validate().unwrap();

        let state = web::Data::new(AppState::new(config));
        let app = test::init_service(HttpServer::create_app(state.clone())).await;
        let uri = format!("/api/v1/vin/decode/{}", HONDA_VIN);

        for _ in 0..2 {
            let res = test::call_service(&app, get_from(&uri, "10.4.0.2").to_request()).await;
            assert_eq!(res.status(), StatusCode::OK);
        }
        assert_eq!(state.decoder.cache_stats().hits, 1);
    }

    #[tokio::test]
    async fn test_cache_purge_interval_from_file() {
        let file = write_config("cache:\n  purge_interval_secs: 60\n");
        let config = Config::from_file(file.path()).await.unwrap();

        assert_eq!(config.cache().purge_interval_secs, Some(60));
        assert_eq!(config.cache().ttl_seconds, 300);
    }
}
