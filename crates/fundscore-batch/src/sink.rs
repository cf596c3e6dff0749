//! Row sinks: a CSV file and an in-memory table.

use fundscore_traits::{
    FundscoreError, OUTPUT_COLUMNS, OutputRow, Result, RowSink, rows_to_frame,
};
use polars::prelude::*;
use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

/// Appends rows to a CSV file.
///
/// The header is written once, when the file is new or empty. Each row is
/// encoded completely in memory and then written with a single call, so an
/// interrupted run never leaves a partial row.
#[derive(Debug)]
pub struct CsvSink {
    path: PathBuf,
    file: File,
    header_pending: bool,
    rows_written: usize,
}

impl CsvSink {
    /// Open `path` for appending, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let header_pending = file.metadata()?.len() == 0;
        Ok(Self {
            path,
            file,
            header_pending,
            rows_written: 0,
        })
    }

    /// Output file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(&self, row: &OutputRow) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        if self.header_pending {
            writer
                .write_record(OUTPUT_COLUMNS)
                .map_err(|e| FundscoreError::Sink(e.to_string()))?;
        }
        writer
            .write_record(row.cells().iter().map(ToString::to_string))
            .map_err(|e| FundscoreError::Sink(e.to_string()))?;
        writer
            .into_inner()
            .map_err(|e| FundscoreError::Sink(e.to_string()))
    }
}

impl RowSink for CsvSink {
    fn append(&mut self, row: &OutputRow) -> Result<()> {
        let bytes = self.encode(row)?;
        self.file.write_all(&bytes)?;
        self.file.flush()?;
        self.header_pending = false;
        self.rows_written += 1;
        Ok(())
    }

    fn rows_written(&self) -> usize {
        self.rows_written
    }
}

/// Keeps rows in memory and renders them as a DataFrame.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    rows: Vec<OutputRow>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Rows in append order.
    #[must_use]
    pub fn rows(&self) -> &[OutputRow] {
        &self.rows
    }

    /// Consume the sink, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<OutputRow> {
        self.rows
    }

    /// Rows as a DataFrame, in append order.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be built.
    pub fn to_frame(&self) -> Result<DataFrame> {
        rows_to_frame(&self.rows)
    }

    /// Rows as a DataFrame, highest composite score first.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be built or sorted.
    pub fn ranked_frame(&self) -> Result<DataFrame> {
        let df = self.to_frame()?;
        let sorted = df.sort(
            ["composite_score"],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )?;
        Ok(sorted)
    }
}

impl RowSink for MemorySink {
    fn append(&mut self, row: &OutputRow) -> Result<()> {
        self.rows.push(row.clone());
        Ok(())
    }

    fn rows_written(&self) -> usize {
        self.rows.len()
    }
}
