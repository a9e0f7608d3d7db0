//! Configuration schema types
//!
//! Every field carries a default, so an absent configuration file behaves
//! exactly like an empty one. Only the search API key has no usable default.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

/// Placeholder key shipped in early templates; rejected at startup
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY_HERE";

/// Main configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Geocoding service settings
    #[serde(default)]
    pub geocoder: GeocoderConfig,

    /// Structured search API settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Spreadsheet export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ScraperConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value found
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.geocoder.validate()?;
        self.search.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Geocoding service configuration (Nominatim-compatible)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Base URL of the geocoding service
    #[serde(default = "default_geocoder_base_url")]
    pub base_url: String,

    /// Client identifier sent as the User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Country qualifier appended to the province name
    #[serde(default = "default_country")]
    pub country: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoder_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl GeocoderConfig {
    fn validate(&self) -> Result<(), String> {
        validate_http_url("geocoder.base_url", &self.base_url)?;

        if self.user_agent.trim().is_empty() {
            return Err("geocoder.user_agent cannot be empty".to_string());
        }

        validate_timeout("geocoder.timeout_seconds", self.timeout_seconds)
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoder_base_url(),
            user_agent: default_user_agent(),
            country: default_country(),
            timeout_seconds: default_geocoder_timeout_seconds(),
        }
    }
}

/// Structured search API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Endpoint of the structured Google Maps search
    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,

    /// ScraperAPI key
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_search_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Names of the fields read from each result item
    #[serde(default)]
    pub fields: FieldMapping,
}

impl SearchConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        validate_http_url("search.endpoint", &self.endpoint)?;
        validate_timeout("search.timeout_seconds", self.timeout_seconds)?;

        match &self.api_key {
            None => {
                return Err(
                    "search.api_key is not set. Pass --api-key or set SCRAPER_API_KEY".to_string(),
                )
            }
            Some(key) => {
                let key = key.expose_secret().as_str();
                if key.trim().is_empty() {
                    return Err("search.api_key cannot be empty".to_string());
                }
                if key == API_KEY_PLACEHOLDER {
                    return Err(format!(
                        "search.api_key is still the placeholder '{API_KEY_PLACEHOLDER}'. \
                         Replace it with your ScraperAPI key"
                    ));
                }
            }
        }

        self.fields.validate()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_search_endpoint(),
            api_key: None,
            timeout_seconds: default_search_timeout_seconds(),
            fields: FieldMapping::default(),
        }
    }
}

/// Source field names in the search API's result items
///
/// The upstream schema is undocumented; these are the names observed so far
/// and can be corrected from the configuration file without a rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    #[serde(default = "default_name_field")]
    pub name: String,

    #[serde(default = "default_address_field")]
    pub address: String,

    #[serde(default = "default_phone_field")]
    pub phone: String,

    #[serde(default = "default_latitude_field")]
    pub latitude: String,

    #[serde(default = "default_longitude_field")]
    pub longitude: String,
}

impl FieldMapping {
    fn validate(&self) -> Result<(), String> {
        let fields = [
            ("name", &self.name),
            ("address", &self.address),
            ("phone", &self.phone),
            ("latitude", &self.latitude),
            ("longitude", &self.longitude),
        ];
        for (column, source) in fields {
            if source.trim().is_empty() {
                return Err(format!("search.fields.{column} cannot be empty"));
            }
        }
        Ok(())
    }
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            name: default_name_field(),
            address: default_address_field(),
            phone: default_phone_field(),
            latitude: default_latitude_field(),
            longitude: default_longitude_field(),
        }
    }
}

/// Spreadsheet export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Output workbook path, relative to the working directory
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Worksheet name
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_path.trim().is_empty() {
            return Err("export.output_path cannot be empty".to_string());
        }

        if !self.output_path.to_lowercase().ends_with(".xlsx") {
            return Err(format!(
                "export.output_path must end with .xlsx, got '{}'",
                self.output_path
            ));
        }

        // Excel limits sheet names to 31 characters and forbids []:*?/\
        if self.sheet_name.is_empty() || self.sheet_name.chars().count() > 31 {
            return Err(format!(
                "export.sheet_name must be 1 to 31 characters, got '{}'",
                self.sheet_name
            ));
        }
        if self
            .sheet_name
            .chars()
            .any(|c| matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        {
            return Err(format!(
                "export.sheet_name contains a forbidden character: '{}'",
                self.sheet_name
            ));
        }

        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            sheet_name: default_sheet_name(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn validate_http_url(key: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{key} cannot be empty"));
    }

    let url = Url::parse(value).map_err(|e| format!("{key} is not a valid URL: {e}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("{key} must start with http:// or https://"));
    }

    Ok(())
}

fn validate_timeout(key: &str, seconds: u64) -> Result<(), String> {
    if seconds == 0 || seconds > 600 {
        return Err(format!("{key} must be between 1 and 600, got {seconds}"));
    }
    Ok(())
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_geocoder_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_user_agent() -> String {
    "gmaps_scraper_app".to_string()
}

fn default_country() -> String {
    "Iran".to_string()
}

fn default_geocoder_timeout_seconds() -> u64 {
    10
}

fn default_search_endpoint() -> String {
    "http://api.scraperapi.com/structured/google/mapssearch".to_string()
}

fn default_search_timeout_seconds() -> u64 {
    60
}

fn default_name_field() -> String {
    "name".to_string()
}

fn default_address_field() -> String {
    "address_line".to_string()
}

fn default_phone_field() -> String {
    "phone_number".to_string()
}

fn default_latitude_field() -> String {
    "latitude".to_string()
}

fn default_longitude_field() -> String {
    "longitude".to_string()
}

fn default_output_path() -> String {
    "google_maps_data.xlsx".to_string()
}

fn default_sheet_name() -> String {
    "Sheet1".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
