//! Core pipeline logic.
//!
//! # Modules
//!
//! - [`pipeline`] - Orchestrates geocode → search → export
//! - [`transform`] - Raw search items to spreadsheet rows
//! - [`summary`] - Outcome and timings of a run
//!
//! # Workflow
//!
//! 1. **Geocode**: Resolve "<province>, <country>" to coordinates
//! 2. **Search**: Query the structured search around those coordinates
//! 3. **Transform**: Extract name, address, phone, latitude and longitude
//! 4. **Export**: Write the rows to the workbook, replacing any previous file
//!
//! # Example
//!
//! ```rust,no_run
//! use gmaps_scraper::config::load_config;
//! use gmaps_scraper::core::pipeline::SearchPipeline;
//! use gmaps_scraper::domain::Query;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config(None::<&str>)?;
//! config.validate()?;
//!
//! let pipeline = SearchPipeline::from_config(&config)?;
//! let summary = pipeline.run(&Query::new("کافی نت", "استان تهران")).await?;
//!
//! println!("Rows written: {}", summary.rows_written());
//! # Ok(())
//! # }
//! ```

pub mod pipeline;
pub mod summary;
pub mod transform;

pub use pipeline::SearchPipeline;
pub use summary::{RunOutcome, RunSummary};
