//! ograph server - main entry point

use anyhow::Result;
use clap::Parser;
use tracing::info;

use ograph_common::{init_logging, LoggingConfig};
use ograph_config::ConfigLoader;
use ograph_server::{start_server, AppState};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match args.config {
        Some(path) => ConfigLoader::load_from_file(&path)?,
        None => ConfigLoader::load()?,
    };

    // Initialize logging, with the CLI flag taking precedence
    let logging = LoggingConfig {
        level: args.log_level.unwrap_or_else(|| config.logging.level.clone()),
        file_path: config.logging.file.clone(),
        colored: config.logging.colored,
        ..LoggingConfig::default()
    };
    init_logging(logging).map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    info!("Configuration loaded successfully");

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config);

    start_server(state, &bind_address).await?;

    info!("ograph server has shut down");
    Ok(())
}
