//! The `ReportWriter` trait implemented by all backend writers.

use crate::{ReportResult, VehicleRow};

/// Trait implemented by the text and CSV writers.
pub trait ReportWriter {
    /// Write one snapshot of the fleet, taken at driver step `tick`.
    fn write_rows(&mut self, tick: u64, rows: &[VehicleRow]) -> ReportResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> ReportResult<()>;
}
