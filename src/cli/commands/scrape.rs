//! Scrape command implementation
//!
//! Geocodes the province, runs the Google Maps search around it and saves
//! the listings to an Excel workbook. Progress goes to stdout, failures to
//! stderr; the returned value is the process exit code.

use crate::config::{secret_string, ScraperConfig};
use crate::core::{RunOutcome, SearchPipeline};
use crate::domain::{Query, ScraperError};
use clap::Args;

/// Arguments for a scrape run
#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// The type of business to search for (e.g., 'کافی نت')
    pub business_type: String,

    /// The name of the province to search in (e.g., 'استان تهران')
    pub province_name: String,

    /// ScraperAPI key
    #[arg(long, env = "SCRAPER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output workbook path (must end in .xlsx)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Country appended to the province when geocoding
    #[arg(long)]
    pub country: Option<String>,
}

impl ScrapeArgs {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut ScraperConfig) {
        if let Some(key) = &self.api_key {
            config.search.api_key = Some(secret_string(key.clone()));
        }

        if let Some(output) = &self.output {
            tracing::debug!(output = %output, "Overriding output path from CLI");
            config.export.output_path = output.clone();
        }

        if let Some(country) = &self.country {
            tracing::debug!(country = %country, "Overriding geocoder country from CLI");
            config.geocoder.country = country.clone();
        }
    }

    /// Execute the scrape command against a validated configuration
    pub async fn execute(&self, config: &ScraperConfig) -> anyhow::Result<i32> {
        let pipeline = match SearchPipeline::from_config(config) {
            Ok(pipeline) => pipeline,
            Err(e) => {
                tracing::error!(error = %e, "Failed to build pipeline");
                eprintln!("Error: {e}");
                return Ok(1);
            }
        };

        self.run(&pipeline).await
    }

    /// Drive an assembled pipeline and report progress to the user
    pub async fn run(&self, pipeline: &SearchPipeline) -> anyhow::Result<i32> {
        let query = Query::new(&self.business_type, &self.province_name);

        println!("Geocoding province: {}...", query.province_name());
        let mut summary = match pipeline.geocode(&query).await {
            Ok(summary) => summary,
            Err(e) => {
                eprintln!(
                    "Could not get coordinates for '{}': {e}",
                    query.province_name()
                );
                eprintln!("Exiting.");
                return Ok(1);
            }
        };
        println!("Coordinates found: {}", summary.coordinates);

        println!(
            "Making API request for query: '{}'...",
            query.business_type()
        );
        if let Err(e) = pipeline
            .search_and_export(query.business_type(), &mut summary)
            .await
        {
            match &e {
                ScraperError::Search(_) => eprintln!("API request failed: {e}"),
                _ => eprintln!("Failed to save results: {e}"),
            }
            return Ok(1);
        }

        match &summary.outcome {
            RunOutcome::NoResults => {
                println!("The API returned no business results for the query.");
            }
            RunOutcome::Exported { path, rows } => {
                println!("Processed {rows} results");
                if summary.missing_phones > 0 {
                    println!("  {} without a phone number", summary.missing_phones);
                }
                println!("Data successfully saved to {}", path.display());
                println!(
                    "  Completed in {:.1}s",
                    summary.total_duration().as_secs_f64()
                );
            }
        }

        tracing::info!(
            rows = summary.rows_written(),
            duration_ms = summary.total_duration().as_millis() as u64,
            "Scrape complete"
        );

        Ok(0)
    }
}
