//! Error types for fleet-report.

use fleet_core::FleetError;
use thiserror::Error;

/// Errors that can occur when sorting or writing fleet reports.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, ReportError>`.
pub type ReportResult<T> = Result<T, ReportError>;
