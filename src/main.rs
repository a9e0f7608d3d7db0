// gmaps-scraper - Google Maps business listings to Excel
// Copyright (c) 2025 gmaps-scraper Contributors
// Licensed under the MIT License

use clap::Parser;
use gmaps_scraper::cli::{usage, Cli};
use gmaps_scraper::logging::init_logging;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // A bare invocation prints usage and fails
    if std::env::args_os().len() <= 1 {
        eprintln!("{}", usage());
        process::exit(1);
    }

    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let logging_guard = match init_logging(&config.application.log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(1);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "gmaps-scraper - Google Maps business listings to Excel"
    );

    let exit_code = match cli.scrape.execute(&config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            1
        }
    };

    // Flush buffered file logs before exiting
    drop(logging_guard);
    process::exit(exit_code);
}
