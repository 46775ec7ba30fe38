//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the helpers used by the binary to load configuration and run.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{info, warn};

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::config("Configuration is required"))?;

        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration from `path`, then apply environment overrides
///
/// A missing file falls back to the built-in defaults; a file that exists but
/// does not parse or validate is an error.
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    let mut config = if path.exists() {
        Config::from_file(path).await?
    } else {
        warn!(
            "Configuration file {} not found, using default config",
            path.display()
        );
        Config::default()
    };

    config.gateway.apply_env_overrides()?;
    config.validate()?;
    Ok(config)
}

/// Build and run the server until it is stopped
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting VIN Gateway v{}", crate::VERSION);

    let server = ServerBuilder::new().with_config(config).build()?;
    let server_config = server.config();

    info!(
        "Server starting at: http://{}:{}",
        server_config.host, server_config.port
    );
    info!("API Endpoints:");
    info!("   GET  / - Liveness");
    info!("   GET  /health - Health check");
    info!("   GET  /api/v1/vin/validate/{{vin}} - Validate a VIN");
    info!("   GET  /api/v1/vin/decode/{{vin}} - Decode manufacturer and model year");
    info!("   GET  /api/v1/vin/recalls/{{vin}} - Recall lookup");

    server.start().await
}
