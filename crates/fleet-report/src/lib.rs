//! `fleet-report` — fleet-level utilities over `fleet-vehicle` types.
//!
//! | Item                 | Purpose                                                  |
//! |----------------------|----------------------------------------------------------|
//! | [`sort_transport`]   | Stable ascending sort of one kind by capacity            |
//! | [`sort_vehicles`]    | Same, for a `Vehicle` slice that must be homogeneous     |
//! | [`report_all`]       | One text line per vehicle, any mix of kinds              |
//! | [`VehicleRow`]       | Plain data projection of one vehicle                     |
//! | [`ReportWriter`]     | Backend trait: [`TextWriter`], [`CsvWriter`]             |
//!
//! # Report line format
//!
//! ```text
//! <Type> <id> going from <source> to <destination>. Currently in <current location>
//! ```
//!
//! Lines are joined with `\n` in input order.  An empty fleet yields an
//! empty string.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fleet_report::{report_all, sort_transport};
//!
//! sort_transport(&mut planes);
//! println!("{}", report_all(&fleet));
//! ```

pub mod csv;
pub mod error;
pub mod fleet;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{ReportError, ReportResult};
pub use fleet::{report_all, sort_transport, sort_vehicles};
pub use row::VehicleRow;
pub use text::TextWriter;
pub use writer::ReportWriter;
