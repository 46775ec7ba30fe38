//! Core functionality for the gateway
//!
//! This module contains the VIN decoding logic and the in-memory building
//! blocks it relies on.

pub mod cache_manager;
pub mod rate_limiter; // Per-client sliding window limiter
pub mod vin;
