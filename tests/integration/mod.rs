//! Integration tests for vin-gateway
//!
//! These tests assemble the real application and exercise it end to end
//! through actix's in-process test service.

pub mod config_tests;
pub mod error_handling_tests;
pub mod vin_api_tests;
