//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, PositionRow, RunSummaryRow};

/// Errors are stored by the observer and retrieved with
/// [`ReportObserver::take_error`][crate::ReportObserver::take_error].
pub trait OutputWriter {
    /// Write one turn's positions.
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()>;

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
