//! Geocoder trait definition
//!
//! Abstracts the name-to-coordinates lookup so the pipeline can run against
//! Nominatim in production and a canned implementation in tests.

use crate::domain::{Coordinates, Result};
use async_trait::async_trait;

/// Resolves free-text place names to coordinates
///
/// Implementations return the single best match. An empty answer is reported
/// as [`GeocodingError::NoMatch`](crate::domain::GeocodingError::NoMatch), not
/// as a sentinel value, so callers can tell it apart from transport failures.
///
/// # Example
///
/// ```no_run
/// use gmaps_scraper::adapters::geocoding::{Geocoder, NominatimGeocoder};
/// use gmaps_scraper::config::GeocoderConfig;
///
/// # async fn example() -> gmaps_scraper::domain::Result<()> {
/// let geocoder = NominatimGeocoder::new(GeocoderConfig::default())?;
/// let coords = geocoder.resolve("استان تهران").await?;
/// println!("{coords}");
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve a province name to the coordinates of its best match
    ///
    /// # Errors
    ///
    /// Returns a [`ScraperError::Geocoding`](crate::domain::ScraperError::Geocoding)
    /// describing why no coordinates could be produced.
    async fn resolve(&self, province_name: &str) -> Result<Coordinates>;

    /// Short identifier used in logs
    fn name(&self) -> &str;
}
