use std::error::Error;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tinyircd::cli::{generate_example_config, Cli};
use tinyircd::config::ServerConfig;
use tinyircd::server::Server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Handle config generation
    if cli.generate_config {
        println!("{}", generate_example_config());
        return Ok(());
    }

    // Initialize logging
    let log_level = match cli.log_level.to_lowercase().as_str() {
        level @ ("error" | "warn" | "info" | "debug" | "trace") => level.to_string(),
        _ => "info".to_string(),
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tinyircd={}", log_level)));

    FmtSubscriber::builder()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(false)
        .with_env_filter(filter)
        .init();

    info!("Starting IRCd...");

    let mut config = if cli.config.exists() {
        ServerConfig::load(&cli.config).map_err(|e| {
            tracing::error!("Failed to load configuration from {:?}: {}", cli.config, e);
            e
        })?
    } else {
        warn!("Configuration file {:?} not found, using defaults", cli.config);
        ServerConfig::default()
    };
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    info!("Configuration loaded successfully");
    let server = Server::new(config);

    info!("Starting server...");
    server.run().await?;

    Ok(())
}
