//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use crate::config::{load_config, ScraperConfig};
use crate::domain::{Result, ScraperError};
use clap::{CommandFactory, Parser};
use commands::scrape::ScrapeArgs;

/// Scrape Google Maps for business information using an API.
#[derive(Parser, Debug)]
#[command(name = "gmaps-scraper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, env = "GMAPS_SCRAPER_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "GMAPS_SCRAPER_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub scrape: ScrapeArgs,
}

impl Cli {
    /// Load, override and validate the configuration for this invocation
    ///
    /// Precedence, lowest first: built-in defaults, TOML file,
    /// `GMAPS_SCRAPER_*` variables, command-line flags.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if loading fails or the final
    /// configuration is invalid (for example, no API key).
    pub fn resolve_config(&self) -> Result<ScraperConfig> {
        let mut config = load_config(self.config.as_deref())?;

        if let Some(level) = &self.log_level {
            config.application.log_level = level.clone();
        }
        self.scrape.apply_overrides(&mut config);

        config
            .validate()
            .map_err(|e| ScraperError::Configuration(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }
}

/// Full help text, as printed for a bare invocation
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
