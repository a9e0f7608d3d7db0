//! External system integrations.
//!
//! - [`geocoding`] - Place name to coordinates (Nominatim)
//! - [`search`] - ScraperAPI Google Maps structured search
//! - [`spreadsheet`] - Excel workbook export
//!
//! # Design Pattern
//!
//! Adapters isolate third-party crates (`reqwest`, `rust_xlsxwriter`) behind
//! domain types and errors. The geocoder and the sink are trait objects so the
//! pipeline can be exercised with in-memory implementations.
//!
//! ```rust,no_run
//! use gmaps_scraper::adapters::geocoding::{Geocoder, NominatimGeocoder};
//! use gmaps_scraper::adapters::search::SearchClient;
//! use gmaps_scraper::config::ScraperConfig;
//!
//! # async fn example(config: ScraperConfig) -> gmaps_scraper::domain::Result<()> {
//! let geocoder = NominatimGeocoder::new(config.geocoder.clone())?;
//! let coords = geocoder.resolve("استان تهران").await?;
//!
//! let search = SearchClient::new(&config.search)?;
//! let response = search.search("کافی نت", &coords).await?;
//! println!("{} listings", response.results.len());
//! # Ok(())
//! # }
//! ```

pub mod geocoding;
pub mod search;
pub mod spreadsheet;
