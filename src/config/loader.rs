//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ScraperConfig;
use super::secret_string;
use crate::domain::errors::ScraperError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "GMAPS_SCRAPER_";

/// Loads configuration, optionally from a TOML file
///
/// This function:
/// 1. Reads the TOML file when a path is given (defaults otherwise)
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`ScraperConfig`]
/// 4. Applies environment variable overrides (`GMAPS_SCRAPER_*` prefix)
///
/// Validation is left to the caller because command-line overrides, such as
/// `--api-key`, are applied after loading.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given file does not exist or cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
///
/// # Examples
///
/// ```no_run
/// use gmaps_scraper::config::load_config;
///
/// let config = load_config(Some("gmaps_scraper.toml")).expect("Failed to load config");
/// config.validate().expect("Invalid configuration");
/// ```
pub fn load_config<P: AsRef<Path>>(path: Option<P>) -> Result<ScraperConfig> {
    let mut config = match path {
        Some(path) => parse_config_file(path.as_ref())?,
        None => ScraperConfig::default(),
    };

    apply_env_overrides(&mut config)?;

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<ScraperConfig> {
    if !path.exists() {
        return Err(ScraperError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ScraperError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    toml::from_str(&contents)
        .map_err(|e| ScraperError::Configuration(format!("Failed to parse TOML: {e}")))
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ScraperError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = re.replace_all(line, |cap: &regex::Captures<'_>| {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    String::new()
                }
            }
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ScraperError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `GMAPS_SCRAPER_` prefix
///
/// Variables follow the pattern `GMAPS_SCRAPER_<SECTION>_<KEY>`, for example
/// `GMAPS_SCRAPER_SEARCH_API_KEY` or `GMAPS_SCRAPER_GEOCODER_COUNTRY`.
fn apply_env_overrides(config: &mut ScraperConfig) -> Result<()> {
    let var = |key: &str| std::env::var(format!("{ENV_PREFIX}{key}")).ok();

    if let Some(val) = var("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Geocoder overrides
    if let Some(val) = var("GEOCODER_BASE_URL") {
        config.geocoder.base_url = val;
    }
    if let Some(val) = var("GEOCODER_USER_AGENT") {
        config.geocoder.user_agent = val;
    }
    if let Some(val) = var("GEOCODER_COUNTRY") {
        config.geocoder.country = val;
    }
    if let Some(val) = var("GEOCODER_TIMEOUT_SECONDS") {
        config.geocoder.timeout_seconds = parse_number("GEOCODER_TIMEOUT_SECONDS", &val)?;
    }

    // Search overrides
    if let Some(val) = var("SEARCH_ENDPOINT") {
        config.search.endpoint = val;
    }
    if let Some(val) = var("SEARCH_API_KEY") {
        config.search.api_key = Some(secret_string(val));
    }
    if let Some(val) = var("SEARCH_TIMEOUT_SECONDS") {
        config.search.timeout_seconds = parse_number("SEARCH_TIMEOUT_SECONDS", &val)?;
    }

    // Export overrides
    if let Some(val) = var("EXPORT_OUTPUT_PATH") {
        config.export.output_path = val;
    }
    if let Some(val) = var("EXPORT_SHEET_NAME") {
        config.export.sheet_name = val;
    }

    // Logging overrides
    if let Some(val) = var("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Some(val) = var("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = var("LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value.trim().parse().map_err(|_| {
        ScraperError::Configuration(format!(
            "{ENV_PREFIX}{key} must be a whole number of seconds, got '{value}'"
        ))
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ScraperError::Configuration(format!(
            "{ENV_PREFIX}{key} must be true or false, got '{value}'"
        ))),
    }
}
