//! ScraperAPI structured search client
//!
//! Issues a single `GET` per run with `api_key`, `query`, `latitude` and
//! `longitude` query parameters. There is no retry: any transport failure or
//! 4xx/5xx status ends the run.

use super::models::SearchResponse;
use crate::config::{SearchConfig, SecretString};
use crate::domain::{Coordinates, Result, ScraperError, SearchError};
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Longest response body excerpt kept in error messages
const MAX_ERROR_BODY: usize = 512;

/// Client for the Google Maps structured search endpoint
pub struct SearchClient {
    client: Client,
    endpoint: String,
    api_key: SecretString,
    timeout: Duration,
}

impl SearchClient {
    /// Create a new search client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key is configured or the HTTP
    /// client cannot be built.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            ScraperError::Configuration("search.api_key is not set".to_string())
        })?;

        let timeout = Duration::from_secs(config.timeout_seconds);
        let client = ClientBuilder::new().timeout(timeout).build().map_err(|e| {
            ScraperError::Configuration(format!("Failed to build search HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key,
            timeout,
        })
    }

    /// Endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Search for `query_text` around `coordinates`
    ///
    /// Returns the raw result items in API order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] variants for transport failures, timeouts,
    /// 4xx/5xx statuses and bodies that are not the expected JSON envelope.
    pub async fn search(
        &self,
        query_text: &str,
        coordinates: &Coordinates,
    ) -> Result<SearchResponse> {
        let latitude = coordinates.latitude_param();
        let longitude = coordinates.longitude_param();

        tracing::debug!(
            endpoint = %self.endpoint,
            query = %query_text,
            latitude = %latitude,
            longitude = %longitude,
            timeout_secs = self.timeout.as_secs(),
            "Sending search request"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("api_key", self.api_key.expose_secret().as_str()),
                ("query", query_text),
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
            ])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::from_status(status.as_u16(), excerpt(&body)).into());
        }

        let body = response.text().await.map_err(map_transport_error)?;
        let parsed: SearchResponse = serde_json::from_str(&body).map_err(|e| {
            SearchError::InvalidResponse(format!("{e}; body starts with: {}", excerpt(&body)))
        })?;

        tracing::debug!(
            status = status.as_u16(),
            results = parsed.results.len(),
            "Search response received"
        );

        Ok(parsed)
    }
}

/// Map a reqwest error without leaking the request URL, which carries the key
fn map_transport_error(err: reqwest::Error) -> SearchError {
    let is_timeout = err.is_timeout();
    let message = err.without_url().to_string();
    if is_timeout {
        SearchError::Timeout(message)
    } else {
        SearchError::ConnectionFailed(message)
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_ERROR_BODY {
        return trimmed.to_string();
    }
    let mut cut: String = trimmed.chars().take(MAX_ERROR_BODY).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(endpoint: String) -> SearchClient {
        SearchClient::new(&SearchConfig {
            endpoint,
            api_key: Some(secret_string("test-key".to_string())),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_client_requires_api_key() {
        let result = SearchClient::new(&SearchConfig::default());
        assert!(matches!(result, Err(ScraperError::Configuration(_))));
    }

    #[test]
    fn test_excerpt_truncates_long_bodies() {
        let long = "x".repeat(MAX_ERROR_BODY + 10);
        let cut = excerpt(&long);
        assert_eq!(cut.chars().count(), MAX_ERROR_BODY + 1);
        assert!(cut.ends_with('…'));
        assert_eq!(excerpt("  short  "), "short");
    }

    #[tokio::test]
    async fn test_search_sends_expected_parameters() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/structured/google/mapssearch")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("api_key".into(), "test-key".into()),
                Matcher::UrlEncoded("query".into(), "کافی نت".into()),
                Matcher::UrlEncoded("latitude".into(), "35.6892523".into()),
                Matcher::UrlEncoded("longitude".into(), "51.3896004".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"results": [{"name": "Cafe Net"}]}).to_string())
            .create_async()
            .await;

        let client = client_for(format!("{}/structured/google/mapssearch", server.url()));
        let response = client
            .search("کافی نت", &Coordinates::new(35.6892523, 51.3896004))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.results.len(), 1);
    }

    #[tokio::test]
    async fn test_search_server_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let err = client_for(server.url())
            .search("cafe", &Coordinates::new(1.0, 2.0))
            .await
            .unwrap_err();

        match err {
            ScraperError::Search(SearchError::ServerError { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "internal error");
            }
            other => panic!("Expected ServerError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_search_client_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body("invalid api key")
            .create_async()
            .await;

        let err = client_for(server.url())
            .search("cafe", &Coordinates::new(1.0, 2.0))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ScraperError::Search(SearchError::ClientError { status: 403, .. })
        ));
    }

    #[tokio::test]
    async fn test_search_invalid_json() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = client_for(server.url())
            .search("cafe", &Coordinates::new(1.0, 2.0))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ScraperError::Search(SearchError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_search_top_level_array_is_invalid() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let err = client_for(server.url())
            .search("cafe", &Coordinates::new(1.0, 2.0))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ScraperError::Search(SearchError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_transport_error_hides_api_key() {
        let err = client_for("http://127.0.0.1:9/search".to_string())
            .search("cafe", &Coordinates::new(1.0, 2.0))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ScraperError::Search(SearchError::ConnectionFailed(_))
        ));
        assert!(!err.to_string().contains("test-key"));
    }
}
