//! Row sink trait for the tabular output target.

use crate::{OutputRow, Result};

/// An append-only tabular destination, one row per ticker per run.
///
/// Implementations must write a row completely or not at all, so that an
/// interrupted batch leaves only whole rows behind. There are no update or
/// upsert semantics.
pub trait RowSink: Send {
    /// Appends one row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row could not be written.
    fn append(&mut self, row: &OutputRow) -> Result<()>;

    /// Number of rows appended through this sink so far.
    fn rows_written(&self) -> usize;
}
