//! CSV export of crawl results
//!
//! One row per record, UTF-8, with the fixed 16-column header in its exact
//! order. Absent field values are written as empty fields so the output is
//! always rectangular, and an empty crawl still produces a header-only file.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

use crate::models::{RfqRecord, CSV_HEADERS};

/// Build the timestamp-named output filename, e.g. `rfq_2026-08-23_101500.csv`
#[must_use]
pub fn output_filename(prefix: &str, now: DateTime<Local>) -> String {
    format!("{prefix}_{}.csv", now.format("%Y-%m-%d_%H%M%S"))
}

/// CSV writer for RFQ records
pub struct CsvWriter {
    path: PathBuf,
}

impl CsvWriter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the writer targets
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write all records, header included.
    ///
    /// Serialization derives the header from the record's field order, so
    /// every row carries exactly the 16 fixed columns. With no records the
    /// header row is still written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written
    pub fn write(&self, records: &[RfqRecord]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)
            .with_context(|| format!("Failed to create output file: {}", self.path.display()))?;

        if records.is_empty() {
            tracing::warn!("No records to write, emitting header-only file");
            writer
                .write_record(&CSV_HEADERS)
                .context("Failed to write CSV header")?;
        } else {
            for record in records {
                writer
                    .serialize(record)
                    .context("Failed to write CSV row")?;
            }
        }

        writer.flush().context("Failed to flush CSV output")?;

        tracing::info!(
            path = %self.path.display(),
            records = records.len(),
            "Wrote CSV output"
        );

        Ok(())
    }
}
