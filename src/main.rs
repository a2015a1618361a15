//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_recon` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use site_recon::initialization::{init_crypto_provider, init_logger_with};
use site_recon::{run_recon, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    // Must happen before the first TLS connection
    init_crypto_provider();

    match run_recon(config).await {
        Ok(report) => {
            println!(
                "Information gathered and saved to {}",
                report.report_path.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("site_recon error: {:#}", e);
            process::exit(1);
        }
    }
}
