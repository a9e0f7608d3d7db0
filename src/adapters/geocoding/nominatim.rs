//! Nominatim geocoder implementation
//!
//! Queries the OpenStreetMap Nominatim search endpoint
//! (`GET /search?q=...&format=json&limit=1`). Nominatim's usage policy
//! requires an identifying User-Agent, which comes from
//! `geocoder.user_agent`.

use super::Geocoder;
use crate::config::GeocoderConfig;
use crate::domain::{Coordinates, GeocodingError, Result, ScraperError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use std::time::Duration;

/// Geocoder backed by a Nominatim-compatible HTTP service
pub struct NominatimGeocoder {
    client: Client,
    search_url: String,
    country: String,
}

impl NominatimGeocoder {
    /// Create a new Nominatim geocoder
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: GeocoderConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                ScraperError::Configuration(format!("Failed to build geocoding HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            search_url: format!("{}/search", config.base_url.trim_end_matches('/')),
            country: config.country,
        })
    }

    /// Free-text query sent to the service: the province plus the country hint
    pub fn query_text(&self, province_name: &str) -> String {
        if self.country.trim().is_empty() {
            province_name.to_string()
        } else {
            format!("{province_name}, {}", self.country)
        }
    }

    fn map_transport_error(err: reqwest::Error) -> GeocodingError {
        if err.is_timeout() {
            GeocodingError::Timeout(err.to_string())
        } else if err.is_decode() {
            GeocodingError::InvalidResponse(err.to_string())
        } else {
            GeocodingError::ConnectionFailed(err.to_string())
        }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn resolve(&self, province_name: &str) -> Result<Coordinates> {
        let query = self.query_text(province_name);

        tracing::debug!(url = %self.search_url, query = %query, "Sending geocoding request");

        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", query.as_str()), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodingError::ServiceError {
                status: status.as_u16(),
                message: body,
            }
            .into());
        }

        let places: Vec<NominatimPlace> = response.json().await.map_err(|e| {
            GeocodingError::InvalidResponse(format!("Unexpected geocoding payload: {e}"))
        })?;

        let place = places
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::NoMatch(query.clone()))?;

        let coords = place.coordinates()?;

        tracing::debug!(
            query = %query,
            display_name = place.display_name.as_deref().unwrap_or_default(),
            latitude = coords.latitude,
            longitude = coords.longitude,
            "Geocoding match found"
        );

        Ok(coords)
    }

    fn name(&self) -> &str {
        "nominatim"
    }
}

/// One entry of a Nominatim search response
///
/// Nominatim encodes coordinates as decimal strings; plain numbers are
/// accepted as well for compatible services.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: serde_json::Value,
    lon: serde_json::Value,
    #[serde(default)]
    display_name: Option<String>,
}

impl NominatimPlace {
    fn coordinates(&self) -> std::result::Result<Coordinates, GeocodingError> {
        let latitude = parse_degrees("lat", &self.lat)?;
        let longitude = parse_degrees("lon", &self.lon)?;
        Ok(Coordinates::new(latitude, longitude))
    }
}

fn parse_degrees(
    field: &str,
    value: &serde_json::Value,
) -> std::result::Result<f64, GeocodingError> {
    let parsed = match value {
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        serde_json::Value::Number(n) => n.as_f64(),
        _ => None,
    };

    parsed.filter(|v| v.is_finite()).ok_or_else(|| {
        GeocodingError::InvalidResponse(format!("Field '{field}' is not a coordinate: {value}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn geocoder_for(base_url: &str) -> NominatimGeocoder {
        NominatimGeocoder::new(GeocoderConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_query_text_appends_country() {
        let geocoder = geocoder_for("https://nominatim.example.com/");
        assert_eq!(geocoder.query_text("استان تهران"), "استان تهران, Iran");
        assert_eq!(geocoder.search_url, "https://nominatim.example.com/search");
    }

    #[test]
    fn test_query_text_without_country() {
        let geocoder = NominatimGeocoder::new(GeocoderConfig {
            country: String::new(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(geocoder.query_text("Tehran"), "Tehran");
    }

    #[test]
    fn test_parse_degrees() {
        assert_eq!(parse_degrees("lat", &json!("35.6892523")).unwrap(), 35.6892523);
        assert_eq!(parse_degrees("lat", &json!(51.25)).unwrap(), 51.25);
        assert!(parse_degrees("lat", &json!("north")).is_err());
        assert!(parse_degrees("lat", &json!(null)).is_err());
    }

    #[tokio::test]
    async fn test_resolve_first_match() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("q".into(), "استان تهران, Iran".into()),
                mockito::Matcher::UrlEncoded("format".into(), "json".into()),
                mockito::Matcher::UrlEncoded("limit".into(), "1".into()),
            ]))
            .match_header("user-agent", "gmaps_scraper_app")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    {"lat": "35.6892523", "lon": "51.3896004", "display_name": "Tehran Province"},
                    {"lat": "1.0", "lon": "2.0", "display_name": "Elsewhere"}
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let coords = geocoder_for(&server.url())
            .resolve("استان تهران")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(coords, Coordinates::new(35.6892523, 51.3896004));
    }

    #[tokio::test]
    async fn test_resolve_no_match() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let err = geocoder_for(&server.url())
            .resolve("Atlantis")
            .await
            .unwrap_err();

        match err {
            ScraperError::Geocoding(GeocodingError::NoMatch(query)) => {
                assert_eq!(query, "Atlantis, Iran")
            }
            other => panic!("Expected NoMatch, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_service_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .with_body("maintenance")
            .create_async()
            .await;

        let err = geocoder_for(&server.url())
            .resolve("Tehran")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ScraperError::Geocoding(GeocodingError::ServiceError { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let err = geocoder_for(&server.url())
            .resolve("Tehran")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ScraperError::Geocoding(GeocodingError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_resolve_connection_refused() {
        // Port 9 (discard) is closed on test hosts
        let err = geocoder_for("http://127.0.0.1:9")
            .resolve("Tehran")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ScraperError::Geocoding(GeocodingError::ConnectionFailed(_))
        ));
    }
}
