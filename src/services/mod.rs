//! Services module
//!
//! This module contains business logic and service implementations

pub mod recalls;

pub use recalls::{RecallRecord, RecallService, Severity};
