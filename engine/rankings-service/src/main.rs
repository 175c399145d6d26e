//! MFL Power Rankings Service
//!
//! Entry point for the HTTP service and the one-shot CLI commands.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use rankings_service::cli::{run, Cli};
use rankings_service::{initialize_logging, load_config};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    initialize_logging(&config.logging)?;

    info!("Starting rankings service v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "League {} season {} at {}",
        config.mfl.league_id, config.mfl.season, config.mfl.base_url
    );

    if let Err(e) = run(cli, config).await {
        error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}
