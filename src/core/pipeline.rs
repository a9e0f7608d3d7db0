//! Search pipeline - orchestrates geocode, search and export
//!
//! The three stages run strictly in sequence and the first failure ends the
//! run. The sink is only touched after the search has fully succeeded, so a
//! failed request never creates or modifies the output file.

use crate::adapters::geocoding::{Geocoder, NominatimGeocoder};
use crate::adapters::search::SearchClient;
use crate::adapters::spreadsheet::{ResultSink, XlsxSink};
use crate::config::{FieldMapping, ScraperConfig};
use crate::core::summary::{RunOutcome, RunSummary};
use crate::core::transform::extract_rows;
use crate::domain::{Coordinates, Query, Result};
use crate::{log_stage_complete, log_stage_failed};
use std::time::Instant;

/// Geocode → search → export
pub struct SearchPipeline {
    geocoder: Box<dyn Geocoder>,
    search: SearchClient,
    sink: Box<dyn ResultSink>,
    fields: FieldMapping,
}

impl SearchPipeline {
    /// Assemble a pipeline from its parts
    pub fn new(
        geocoder: Box<dyn Geocoder>,
        search: SearchClient,
        sink: Box<dyn ResultSink>,
        fields: FieldMapping,
    ) -> Self {
        Self {
            geocoder,
            search,
            sink,
            fields,
        }
    }

    /// Build the production pipeline: Nominatim, ScraperAPI, .xlsx
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an HTTP client cannot be built or the
    /// API key is missing.
    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        let geocoder = NominatimGeocoder::new(config.geocoder.clone())?;
        let search = SearchClient::new(&config.search)?;
        let sink = XlsxSink::from_config(&config.export);

        Ok(Self::new(
            Box::new(geocoder),
            search,
            Box::new(sink),
            config.search.fields.clone(),
        ))
    }

    /// Run all three stages for `query`
    ///
    /// # Errors
    ///
    /// Returns the error of the first stage that failed. No search request is
    /// made when geocoding fails.
    pub async fn run(&self, query: &Query) -> Result<RunSummary> {
        let mut summary = self.geocode(query).await?;

        self.search_and_export(query.business_type(), &mut summary)
            .await?;

        tracing::info!(
            rows = summary.rows_written(),
            total_ms = summary.total_duration().as_millis() as u64,
            "Pipeline finished"
        );

        Ok(summary)
    }

    /// Resolve the query's province and start the run summary
    ///
    /// The returned summary carries the coordinates and the geocode timing;
    /// pass it on to [`search_and_export`](Self::search_and_export).
    ///
    /// # Errors
    ///
    /// Returns a geocoding error on no match or any service failure.
    pub async fn geocode(&self, query: &Query) -> Result<RunSummary> {
        let started = Instant::now();
        let coordinates = self.resolve(query.province_name()).await?;

        let mut summary = RunSummary::new(query.clone(), coordinates);
        summary.geocode_duration = started.elapsed();
        Ok(summary)
    }

    /// Stage 1: resolve the province to coordinates
    ///
    /// # Errors
    ///
    /// Returns a geocoding error on no match or any service failure.
    pub async fn resolve(&self, province_name: &str) -> Result<Coordinates> {
        tracing::info!(
            province = %province_name,
            geocoder = self.geocoder.name(),
            "Geocoding province"
        );

        let started = Instant::now();
        match self.geocoder.resolve(province_name).await {
            Ok(coords) => {
                log_stage_complete!(
                    "geocode",
                    started.elapsed(),
                    latitude = coords.latitude,
                    longitude = coords.longitude
                );
                Ok(coords)
            }
            Err(e) => {
                log_stage_failed!("geocode", &e);
                Err(e)
            }
        }
    }

    /// Stages 2 and 3: search around the summary's coordinates and export
    ///
    /// Records counts, durations and the outcome in `summary`. An empty
    /// result list is a successful [`RunOutcome::NoResults`].
    ///
    /// # Errors
    ///
    /// Returns a search error for transport, status or payload failures and
    /// an export error when the sink cannot be written.
    pub async fn search_and_export(&self, query_text: &str, summary: &mut RunSummary) -> Result<()> {
        tracing::info!(
            query = %query_text,
            endpoint = %self.search.endpoint(),
            "Requesting search results"
        );

        let started = Instant::now();
        let response = match self.search.search(query_text, &summary.coordinates).await {
            Ok(response) => response,
            Err(e) => {
                log_stage_failed!("search", &e);
                return Err(e);
            }
        };
        summary.search_duration = started.elapsed();
        summary.results_received = response.results.len();
        log_stage_complete!(
            "search",
            summary.search_duration,
            results = summary.results_received
        );

        if response.is_empty() {
            tracing::warn!(query = %query_text, "Search returned no results; nothing to export");
            summary.outcome = RunOutcome::NoResults;
            return Ok(());
        }

        let rows = extract_rows(&response.results, &self.fields);
        summary.missing_phones = rows.iter().filter(|r| r.has_fallback_phone()).count();

        let started = Instant::now();
        if let Err(e) = self.sink.write(&rows) {
            log_stage_failed!("export", &e);
            return Err(e);
        }
        summary.export_duration = started.elapsed();
        log_stage_complete!(
            "export",
            summary.export_duration,
            rows = rows.len(),
            path = %self.sink.destination().display()
        );

        summary.outcome = RunOutcome::Exported {
            path: self.sink.destination().to_path_buf(),
            rows: rows.len(),
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{secret_string, SearchConfig};
    use crate::domain::{GeocodingError, ResultSet, ScraperError};
    use async_trait::async_trait;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    struct FixedGeocoder(Option<Coordinates>);

    #[async_trait]
    impl Geocoder for FixedGeocoder {
        async fn resolve(&self, province_name: &str) -> Result<Coordinates> {
            self.0
                .ok_or_else(|| GeocodingError::NoMatch(province_name.to_string()).into())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[derive(Clone, Default)]
    struct MemorySink {
        writes: Arc<Mutex<Vec<ResultSet>>>,
        path: PathBuf,
    }

    impl ResultSink for MemorySink {
        fn write(&self, rows: &ResultSet) -> Result<()> {
            self.writes.lock().unwrap().push(rows.clone());
            Ok(())
        }

        fn destination(&self) -> &Path {
            &self.path
        }
    }

    struct FailingSink;

    impl ResultSink for FailingSink {
        fn write(&self, _rows: &ResultSet) -> Result<()> {
            Err(ScraperError::Export("disk full".to_string()))
        }

        fn destination(&self) -> &Path {
            Path::new("unwritable.xlsx")
        }
    }

    fn search_client(url: String) -> SearchClient {
        let config = SearchConfig {
            endpoint: url,
            api_key: Some(secret_string("test-key".to_string())),
            ..Default::default()
        };
        SearchClient::new(&config).unwrap()
    }

    fn tehran() -> Option<Coordinates> {
        Some(Coordinates::new(35.6892, 51.389))
    }

    #[tokio::test]
    async fn test_run_exports_rows_in_order() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(Matcher::UrlEncoded("latitude".into(), "35.6892".into()))
            .with_status(200)
            .with_body(
                json!({"results": [
                    {"name": "A", "phone_number": "1"},
                    {"name": "B"},
                    {"name": "C", "phone_number": ""}
                ]})
                .to_string(),
            )
            .create_async()
            .await;

        let sink = MemorySink {
            path: PathBuf::from("memory.xlsx"),
            ..Default::default()
        };
        let pipeline = SearchPipeline::new(
            Box::new(FixedGeocoder(tehran())),
            search_client(server.url()),
            Box::new(sink.clone()),
            FieldMapping::default(),
        );

        let summary = pipeline.run(&Query::new("cafe", "Tehran")).await.unwrap();

        assert_eq!(summary.rows_written(), 3);
        assert_eq!(summary.missing_phones, 2);
        assert_eq!(summary.output_path(), Some(&PathBuf::from("memory.xlsx")));

        let writes = sink.writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        let names: Vec<_> = writes[0].iter().map(|r| r.name.clone().unwrap()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_geocode_failure_stops_before_search() {
        let mut server = Server::new_async().await;
        let search_mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let sink = MemorySink::default();
        let pipeline = SearchPipeline::new(
            Box::new(FixedGeocoder(None)),
            search_client(server.url()),
            Box::new(sink.clone()),
            FieldMapping::default(),
        );

        let err = pipeline
            .run(&Query::new("cafe", "Nowhere"))
            .await
            .unwrap_err();

        assert!(matches!(err, ScraperError::Geocoding(GeocodingError::NoMatch(_))));
        search_mock.assert_async().await;
        assert!(sink.writes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_geocode_starts_summary() {
        let server = Server::new_async().await;
        let pipeline = SearchPipeline::new(
            Box::new(FixedGeocoder(tehran())),
            search_client(server.url()),
            Box::new(MemorySink::default()),
            FieldMapping::default(),
        );

        let query = Query::new("cafe", "Tehran");
        let summary = pipeline.geocode(&query).await.unwrap();

        assert_eq!(summary.query, query);
        assert_eq!(Some(summary.coordinates), tehran());
        assert_eq!(summary.outcome, RunOutcome::NoResults);
        assert_eq!(summary.results_received, 0);
    }

    #[tokio::test]
    async fn test_null_results_skip_sink() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"results": null}"#)
            .create_async()
            .await;

        let pipeline = SearchPipeline::new(
            Box::new(FixedGeocoder(tehran())),
            search_client(server.url()),
            Box::new(FailingSink),
            FieldMapping::default(),
        );

        let summary = pipeline.run(&Query::new("cafe", "Tehran")).await.unwrap();
        assert_eq!(summary.outcome, RunOutcome::NoResults);
    }

    #[tokio::test]
    async fn test_sink_failure_is_reported() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(json!({"results": [{"name": "A"}]}).to_string())
            .create_async()
            .await;

        let pipeline = SearchPipeline::new(
            Box::new(FixedGeocoder(tehran())),
            search_client(server.url()),
            Box::new(FailingSink),
            FieldMapping::default(),
        );

        let err = pipeline
            .run(&Query::new("cafe", "Tehran"))
            .await
            .unwrap_err();
        assert!(matches!(err, ScraperError::Export(_)));
    }
}
