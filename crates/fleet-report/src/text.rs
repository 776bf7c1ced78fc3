//! Plain-text backend: the report lines, one block per snapshot.

use std::io::Write;

use crate::writer::ReportWriter;
use crate::{ReportResult, VehicleRow};

/// Writes report lines to any `io::Write`, each snapshot preceded by a
/// `# tick <n>` header line.
pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the inner sink (e.g. to inspect a `Vec<u8>` buffer).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for TextWriter<W> {
    fn write_rows(&mut self, tick: u64, rows: &[VehicleRow]) -> ReportResult<()> {
        writeln!(self.out, "# tick {tick}")?;
        for row in rows {
            writeln!(self.out, "{}", row.report_line())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> ReportResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
