//! Domain error types
//!
//! This module defines the error hierarchy for the scraper. Adapters convert
//! `reqwest`, `serde_json` and spreadsheet writer errors into these types at
//! their borders, so nothing above the adapter layer sees third-party errors.

use thiserror::Error;

/// Main scraper error type
///
/// Every fallible operation in the crate returns this type. Each variant maps
/// to one branch of the failure taxonomy and is rendered as a one-line
/// diagnostic by the command layer.
#[derive(Debug, Error)]
pub enum ScraperError {
    /// Configuration-related errors (missing API key, bad URL, bad log level)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Geocoding-related errors
    #[error("Geocoding error: {0}")]
    Geocoding(#[from] GeocodingError),

    /// Structured search API errors
    #[error("Search API error: {0}")]
    Search(#[from] SearchError),

    /// Spreadsheet export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl ScraperError {
    /// True when the error happened before any network call was attempted
    pub fn is_configuration(&self) -> bool {
        matches!(self, ScraperError::Configuration(_))
    }
}

/// Geocoding-specific errors
///
/// Distinguishes "the service answered but found nothing" from the
/// transport and protocol failures that prevented an answer.
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// The service answered with an empty match list
    #[error("No match found for '{0}'")]
    NoMatch(String),

    /// Failed to reach the geocoding service
    #[error("Failed to connect to geocoding service: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Geocoding request timeout: {0}")]
    Timeout(String),

    /// Non-success HTTP status from the geocoding service
    #[error("Geocoding service returned {status}: {message}")]
    ServiceError { status: u16, message: String },

    /// Body could not be parsed or carried unusable coordinates
    #[error("Invalid response from geocoding service: {0}")]
    InvalidResponse(String),
}

/// Structured search API errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// Failed to reach the search API (DNS, refused connection, TLS)
    #[error("Failed to connect to search API: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Body was not the expected JSON document
    #[error("Invalid response from search API: {0}")]
    InvalidResponse(String),
}

impl SearchError {
    /// Build the status error variant matching an HTTP status code
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status >= 500 {
            SearchError::ServerError { status, message }
        } else {
            SearchError::ClientError { status, message }
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ScraperError {
    fn from(err: std::io::Error) -> Self {
        ScraperError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ScraperError {
    fn from(err: serde_json::Error) -> Self {
        ScraperError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ScraperError {
    fn from(err: toml::de::Error) -> Self {
        ScraperError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from spreadsheet writer errors
impl From<rust_xlsxwriter::XlsxError> for ScraperError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ScraperError::Export(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scraper_error_display() {
        let err = ScraperError::Configuration("API key is missing".to_string());
        assert_eq!(err.to_string(), "Configuration error: API key is missing");
        assert!(err.is_configuration());
    }

    #[test]
    fn test_geocoding_error_conversion() {
        let geo_err = GeocodingError::NoMatch("Atlantis, Iran".to_string());
        let err: ScraperError = geo_err.into();
        assert!(matches!(err, ScraperError::Geocoding(GeocodingError::NoMatch(_))));
        assert_eq!(
            err.to_string(),
            "Geocoding error: No match found for 'Atlantis, Iran'"
        );
    }

    #[test]
    fn test_search_error_from_status() {
        assert!(matches!(
            SearchError::from_status(500, "boom"),
            SearchError::ServerError { status: 500, .. }
        ));
        assert!(matches!(
            SearchError::from_status(503, "unavailable"),
            SearchError::ServerError { status: 503, .. }
        ));
        assert!(matches!(
            SearchError::from_status(401, "bad key"),
            SearchError::ClientError { status: 401, .. }
        ));
    }

    #[test]
    fn test_search_error_conversion() {
        let err: ScraperError = SearchError::Timeout("60s elapsed".to_string()).into();
        assert!(matches!(err, ScraperError::Search(_)));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ScraperError = io_err.into();
        assert!(matches!(err, ScraperError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ScraperError = json_err.into();
        assert!(matches!(err, ScraperError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: ScraperError = toml_err.into();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let _: &dyn std::error::Error = &ScraperError::Other("x".to_string());
        let _: &dyn std::error::Error = &GeocodingError::Timeout("x".to_string());
        let _: &dyn std::error::Error = &SearchError::InvalidResponse("x".to_string());
    }
}
