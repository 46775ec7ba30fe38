//! Common test utilities for vin-gateway
//!
//! # Usage
//!
//! ```rust
//! use crate::common::fixtures;
//! use vin_gateway::server::HttpServer;
//!
//! #[actix_web::test]
//! async fn my_test() {
//!     let app = actix_web::test::init_service(HttpServer::create_app(
//!         fixtures::default_state(),
//!     ))
//!     .await;
//!     // ...
//! }
//! ```


pub use fixtures::get_from;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
