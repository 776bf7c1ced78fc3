//! CSV output backend.
//!
//! Creates `fleet_report.csv` in the configured output directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{ReportResult, VehicleRow};

/// File name created by [`CsvWriter::new`].
pub const REPORT_FILE: &str = "fleet_report.csv";

/// Writes one CSV record per vehicle per snapshot.
pub struct CsvWriter {
    rows:     Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the CSV file in `dir` and write the header row.
    pub fn new(dir: &Path) -> ReportResult<Self> {
        let mut rows = Writer::from_path(dir.join(REPORT_FILE))?;
        rows.write_record(["tick", "kind", "id", "source", "destination", "current_location"])?;
        Ok(Self { rows, finished: false })
    }
}

impl ReportWriter for CsvWriter {
    fn write_rows(&mut self, tick: u64, rows: &[VehicleRow]) -> ReportResult<()> {
        for row in rows {
            self.rows.write_record(&[
                tick.to_string(),
                row.kind.to_string(),
                row.id.to_string(),
                row.source.clone(),
                row.destination.clone(),
                row.current_location.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
