//! Spreadsheet export adapter
//!
//! Writes a [`ResultSet`](crate::domain::ResultSet) to its destination in one
//! call. The [`ResultSink`] trait keeps the pipeline independent of the file
//! format.

pub mod xlsx;

pub use xlsx::XlsxSink;

use crate::domain::{Result, ResultSet};
use std::path::Path;

/// Destination for exported listings
pub trait ResultSink: Send + Sync {
    /// Write every row, replacing whatever the destination held before
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Export`](crate::domain::ScraperError::Export)
    /// when the destination cannot be written.
    fn write(&self, rows: &ResultSet) -> Result<()>;

    /// Where the rows end up, for user-facing messages
    fn destination(&self) -> &Path;
}
