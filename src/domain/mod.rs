//! Domain models and types for the scraper.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Input and location types** ([`Query`], [`Coordinates`])
//! - **Export rows** ([`ResultRow`], [`ResultSet`])
//! - **Error types** ([`ScraperError`], [`GeocodingError`], [`SearchError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ScraperError>`]:
//!
//! ```rust
//! use gmaps_scraper::domain::{GeocodingError, Result, ScraperError};
//!
//! fn resolve() -> Result<()> {
//!     Err(GeocodingError::NoMatch("Atlantis, Iran".to_string()).into())
//! }
//!
//! assert!(matches!(resolve(), Err(ScraperError::Geocoding(_))));
//! ```

pub mod errors;
pub mod listing;
pub mod query;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{GeocodingError, ScraperError, SearchError};
pub use listing::{ResultRow, ResultSet, COLUMNS, PHONE_FALLBACK};
pub use query::{Coordinates, Query};
pub use result::Result;
