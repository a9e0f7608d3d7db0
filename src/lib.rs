// gmaps-scraper - Google Maps business listings to Excel
// Copyright (c) 2025 gmaps-scraper Contributors
// Licensed under the MIT License

//! # gmaps-scraper
//!
//! Finds businesses of a given type in a province and saves them to an Excel
//! workbook.
//!
//! ## Overview
//!
//! A run has three stages:
//! - **Geocode** the province name to coordinates with Nominatim
//! - **Search** Google Maps around those coordinates through ScraperAPI
//! - **Export** name, address, phone and coordinates of each listing to `.xlsx`
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Pipeline orchestration and listing transformation
//! - [`adapters`] - External integrations (Nominatim, ScraperAPI, spreadsheet)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gmaps_scraper::config::{load_config, secret_string};
//! use gmaps_scraper::core::SearchPipeline;
//! use gmaps_scraper::domain::Query;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = load_config(None::<&str>)?;
//!     config.search.api_key = Some(secret_string("your-key".to_string()));
//!     config.validate()?;
//!
//!     let pipeline = SearchPipeline::from_config(&config)?;
//!     let summary = pipeline.run(&Query::new("کافی نت", "استان تهران")).await?;
//!
//!     println!("Wrote {} rows", summary.rows_written());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
