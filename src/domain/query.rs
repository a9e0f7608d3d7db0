//! Search query and coordinate types

use std::fmt;

/// What to search for and where
///
/// Built once from the command line and never mutated afterwards. The strings
/// are taken verbatim: empty or non-Latin input is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    business_type: String,
    province_name: String,
}

impl Query {
    /// Create a new query
    pub fn new(business_type: impl Into<String>, province_name: impl Into<String>) -> Self {
        Self {
            business_type: business_type.into(),
            province_name: province_name.into(),
        }
    }

    /// Business type sent to the search API (e.g. "کافی نت")
    pub fn business_type(&self) -> &str {
        &self.business_type
    }

    /// Province name sent to the geocoder (e.g. "استان تهران")
    pub fn province_name(&self) -> &str {
        &self.province_name
    }
}

/// A resolved location in WGS84 degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in degrees
    pub latitude: f64,

    /// Longitude in degrees
    pub longitude: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude as sent on the wire
    pub fn latitude_param(&self) -> String {
        self.latitude.to_string()
    }

    /// Longitude as sent on the wire
    pub fn longitude_param(&self) -> String {
        self.longitude.to_string()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Latitude={}, Longitude={}",
            self.latitude, self.longitude
        )
    }
}
