//! Configuration management.
//!
//! The scraper runs with sensible defaults and no configuration file at all;
//! a TOML file, `GMAPS_SCRAPER_*` environment variables and command-line flags
//! override those defaults in that order.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gmaps_scraper::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(Some("gmaps_scraper.toml"))?;
//! config.validate()?;
//!
//! println!("Geocoder: {}", config.geocoder.base_url);
//! println!("Output: {}", config.export.output_path);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [geocoder]
//! base_url = "https://nominatim.openstreetmap.org"
//! user_agent = "gmaps_scraper_app"
//! country = "Iran"
//!
//! [search]
//! endpoint = "http://api.scraperapi.com/structured/google/mapssearch"
//! api_key = "${SCRAPER_API_KEY}"
//! timeout_seconds = 60
//!
//! [search.fields]
//! address = "address_line"
//! phone = "phone_number"
//!
//! [export]
//! output_path = "google_maps_data.xlsx"
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`GeocoderConfig`] - Geocoding service, client identifier, country hint
//! - [`SearchConfig`] - Search endpoint, API key, timeout, [`FieldMapping`]
//! - [`ExportConfig`] - Output workbook path and sheet name
//! - [`LoggingConfig`] - Optional JSON file logging

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, ExportConfig, FieldMapping, GeocoderConfig, LoggingConfig, ScraperConfig,
    SearchConfig, API_KEY_PLACEHOLDER,
};
pub use secret::{secret_string, SecretString, SecretValue};
