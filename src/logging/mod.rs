//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console output on stderr
//! - Configurable log levels (`--log-level`, `RUST_LOG`)
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use gmaps_scraper::logging::init_logging;
//! use gmaps_scraper::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(province = "استان تهران", "Geocoding province");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the completion of a pipeline stage with its duration
///
/// # Example
///
/// ```no_run
/// use gmaps_scraper::log_stage_complete;
/// use std::time::Duration;
///
/// log_stage_complete!("geocode", Duration::from_millis(420));
/// ```
#[macro_export]
macro_rules! log_stage_complete {
    ($stage:expr, $duration:expr) => {
        tracing::info!(
            stage = $stage,
            duration_ms = $duration.as_millis() as u64,
            "Stage completed"
        );
    };
    ($stage:expr, $duration:expr, $($field:tt)+) => {
        tracing::info!(
            stage = $stage,
            duration_ms = $duration.as_millis() as u64,
            $($field)+,
            "Stage completed"
        );
    };
}

/// Log a failed pipeline stage with its error
///
/// # Example
///
/// ```no_run
/// use gmaps_scraper::log_stage_failed;
/// use gmaps_scraper::domain::ScraperError;
///
/// let error = ScraperError::Export("disk full".to_string());
/// log_stage_failed!("export", &error);
/// ```
#[macro_export]
macro_rules! log_stage_failed {
    ($stage:expr, $error:expr) => {
        tracing::error!(
            stage = $stage,
            error = %$error,
            "Stage failed"
        );
    };
}
