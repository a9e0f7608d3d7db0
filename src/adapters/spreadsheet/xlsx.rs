//! Excel (.xlsx) result sink
//!
//! One worksheet, a bold header row `name, address, phone, latitude,
//! longitude`, then one row per listing in arrival order. There is no index
//! column. Absent values are left as empty cells; coordinates are written as
//! numbers.
//!
//! The workbook is rendered in memory and moved into place with a rename, so
//! a failed export never leaves a half-written file behind and an existing
//! file is only replaced once the new one is complete.

use super::ResultSink;
use crate::config::ExportConfig;
use crate::domain::{Result, ResultRow, ResultSet, ScraperError, COLUMNS};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::fs;
use std::path::{Path, PathBuf};

/// Excel's hard row limit, header included
const MAX_ROWS: usize = 1_048_576;

/// Writes listings to an .xlsx workbook
pub struct XlsxSink {
    path: PathBuf,
    sheet_name: String,
}

impl XlsxSink {
    /// Create a sink writing to `path` with the given worksheet name
    pub fn new(path: impl Into<PathBuf>, sheet_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sheet_name: sheet_name.into(),
        }
    }

    /// Create a sink from the export configuration
    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(&config.output_path, &config.sheet_name)
    }

    fn render(&self, rows: &ResultSet) -> Result<Vec<u8>> {
        if rows.len() + 1 > MAX_ROWS {
            return Err(ScraperError::Export(format!(
                "{} rows exceed the worksheet limit of {}",
                rows.len(),
                MAX_ROWS - 1
            )));
        }

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        let header = Format::new().set_bold();
        for (col, title) in (0u16..).zip(COLUMNS) {
            worksheet.write_string_with_format(0, col, title, &header)?;
        }

        for (row_num, row) in (1u32..).zip(rows.iter()) {
            write_row(worksheet, row_num, row)?;
        }

        worksheet.autofit();

        Ok(workbook.save_to_buffer()?)
    }

    fn staging_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "export.xlsx".to_string());
        self.path.with_file_name(format!(".{file_name}.partial"))
    }
}

impl ResultSink for XlsxSink {
    fn write(&self, rows: &ResultSet) -> Result<()> {
        let bytes = self.render(rows)?;
        let staging = self.staging_path();

        fs::write(&staging, &bytes).map_err(|e| {
            ScraperError::Export(format!("Failed to write {}: {}", staging.display(), e))
        })?;

        if let Err(e) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(ScraperError::Export(format!(
                "Failed to move workbook into {}: {}",
                self.path.display(),
                e
            )));
        }

        tracing::debug!(
            path = %self.path.display(),
            rows = rows.len(),
            bytes = bytes.len(),
            "Workbook written"
        );

        Ok(())
    }

    fn destination(&self) -> &Path {
        &self.path
    }
}

fn write_row(worksheet: &mut Worksheet, row_num: u32, row: &ResultRow) -> Result<()> {
    if let Some(name) = &row.name {
        worksheet.write_string(row_num, 0, name)?;
    }
    if let Some(address) = &row.address {
        worksheet.write_string(row_num, 1, address)?;
    }
    worksheet.write_string(row_num, 2, &row.phone)?;
    if let Some(latitude) = row.latitude {
        worksheet.write_number(row_num, 3, latitude)?;
    }
    if let Some(longitude) = row.longitude {
        worksheet.write_number(row_num, 4, longitude)?;
    }
    Ok(())
}
