//! # VIN Gateway
//!
//! HTTP service that validates Vehicle Identification Numbers, decodes the
//! manufacturer and model year they encode, and looks up recall campaigns.
//!
//! ## Features
//!
//! - **Validation**: 17 characters, uppercase ASCII alphanumerics, no `I`/`O`/`Q`
//! - **Decoding**: manufacturer from the WMI, model year from the tenth character
//! - **Caching**: decode results memoized per VIN with a time-to-live
//! - **Rate limiting**: per-client sliding window on the VIN endpoints
//!
//! ## Library usage
//!
//! ```rust
//! use vin_gateway::{RecallService, VinDecoder};
//!
//! let decoder = VinDecoder::new();
//! let vehicle = decoder.decode("1HGCM82633A004352").unwrap();
//! assert_eq!(vehicle.manufacturer_name(), "Honda (USA)");
//! assert_eq!(vehicle.model_year, Some(2003));
//!
//! let recalls = RecallService::new().check_recalls(vehicle.manufacturer_token());
//! assert_eq!(recalls[0].campaign_id, "HND-2023-001");
//! ```
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use vin_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::cache_manager::{CacheStats, TtlCache};
pub use core::rate_limiter::{RateLimitResult, RateLimiter};
pub use core::vin::{DecodeError, DecodedVehicle, VinDecoder};
pub use services::recalls::{RecallRecord, RecallService, Severity};
pub use utils::error::{GatewayError, Result};

use tracing::info;

/// A VIN gateway bound to its configuration
pub struct Gateway {
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::HttpServer::new(&config)?;

        Ok(Self { server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting VIN Gateway");
        self.server.start().await
    }

    /// Shared application state
    pub fn state(&self) -> &server::AppState {
        self.server.state()
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("VIN_GATEWAY_BUILD_TIME"),
            git_hash: env!("VIN_GATEWAY_GIT_HASH"),
            rust_version: env!("VIN_GATEWAY_RUST_VERSION"),
        }
    }
}

/// Build information baked in by the build script
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
