//! Run summary and reporting

use crate::domain::{Coordinates, Query};
use std::path::PathBuf;
use std::time::Duration;

/// How a successful run ended
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Rows were written to `path`
    Exported { path: PathBuf, rows: usize },

    /// The API returned no listings; nothing was written
    NoResults,
}

/// Summary of one pipeline run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// What was searched
    pub query: Query,

    /// Where the search was centered
    pub coordinates: Coordinates,

    /// How the run ended
    pub outcome: RunOutcome,

    /// Number of items in the API response
    pub results_received: usize,

    /// Rows whose phone column fell back to "N/A"
    pub missing_phones: usize,

    /// Time spent geocoding
    pub geocode_duration: Duration,

    /// Time spent waiting on the search API
    pub search_duration: Duration,

    /// Time spent writing the spreadsheet
    pub export_duration: Duration,
}

impl RunSummary {
    /// Create a summary for a run that has resolved its coordinates
    pub fn new(query: Query, coordinates: Coordinates) -> Self {
        Self {
            query,
            coordinates,
            outcome: RunOutcome::NoResults,
            results_received: 0,
            missing_phones: 0,
            geocode_duration: Duration::ZERO,
            search_duration: Duration::ZERO,
            export_duration: Duration::ZERO,
        }
    }

    /// Total time across all stages
    pub fn total_duration(&self) -> Duration {
        self.geocode_duration + self.search_duration + self.export_duration
    }

    /// Path of the written workbook, if any
    pub fn output_path(&self) -> Option<&PathBuf> {
        match &self.outcome {
            RunOutcome::Exported { path, .. } => Some(path),
            RunOutcome::NoResults => None,
        }
    }

    /// Number of rows written
    pub fn rows_written(&self) -> usize {
        match self.outcome {
            RunOutcome::Exported { rows, .. } => rows,
            RunOutcome::NoResults => 0,
        }
    }
}
