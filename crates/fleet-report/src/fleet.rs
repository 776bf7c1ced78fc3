//! Sorting and text reporting over groups of vehicles.

use fleet_vehicle::{CapacityOrd, Movable, Vehicle};
use tracing::debug;

use crate::{ReportResult, VehicleRow};

/// Sort vehicles of one kind in place, ascending by capacity.
///
/// Stable: vehicles with equal capacity keep their relative order.
pub fn sort_transport<T: CapacityOrd>(vehicles: &mut [T]) {
    vehicles.sort_by(T::capacity_cmp);
    debug!(count = vehicles.len(), "sorted transport");
}

/// Sort a `Vehicle` slice in place, ascending by capacity.
///
/// # Errors
///
/// [`ReportError::Fleet`][crate::ReportError::Fleet] wrapping
/// `FleetError::KindMismatch` for the first vehicle whose kind differs from
/// the first element's.  The slice is
/// left untouched in that case.
pub fn sort_vehicles(vehicles: &mut [Vehicle]) -> ReportResult<()> {
    if let Some((first, rest)) = vehicles.split_first() {
        for other in rest {
            first.compare_capacity(other)?;
        }
    }
    vehicles.sort_by_key(Vehicle::capacity);
    debug!(count = vehicles.len(), "sorted vehicles");
    Ok(())
}

/// Render one report line per vehicle, joined by `\n`, in input order.
///
/// Read-only; returns an empty string for an empty slice.
pub fn report_all<M: Movable>(vehicles: &[M]) -> String {
    let report = vehicles
        .iter()
        .map(|v| VehicleRow::from_movable(v).report_line())
        .collect::<Vec<_>>()
        .join("\n");
    debug!(vehicles = vehicles.len(), "rendered fleet report");
    report
}
