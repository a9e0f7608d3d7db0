//! Geocoding adapter
//!
//! Resolves a province name (plus a country hint) to coordinates through an
//! external lookup service.

pub mod nominatim;
pub mod traits;

pub use nominatim::NominatimGeocoder;
pub use traits::Geocoder;
