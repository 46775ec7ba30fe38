//! VIN Gateway - VIN validation, decoding and recall lookup over HTTP

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use vin_gateway::server;
use vin_gateway::utils::logging::{LogFormat, init_logging};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "vin-gateway", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "GATEWAY_CONFIG", default_value = "config/gateway.yaml")]
    config: PathBuf,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_format) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Gateway exited with error: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> vin_gateway::Result<()> {
    let mut config = server::builder::load_config(&cli.config).await?;

    if let Some(host) = cli.host {
        config.gateway.server.host = host;
    }
    if let Some(port) = cli.port {
        config.gateway.server.port = port;
    }

    server::run_server(config).await
}
