//! Backend-agnostic output sink.

use crate::{OutputResult, PatientRow, TickSummaryRow};

/// Destination for run output.  Implemented by [`CsvWriter`][crate::CsvWriter]
/// and, with feature `sqlite`, `SqliteWriter`.
pub trait OutputWriter {
    fn write_patients(&mut self, rows: &[PatientRow]) -> OutputResult<()>;

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush everything written so far.  Calling it again does nothing.
    fn finish(&mut self) -> OutputResult<()>;
}
