//! Plain data row types written by report backends.

use fleet_vehicle::Movable;

/// A snapshot of one vehicle's route state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleRow {
    pub kind:             &'static str,
    pub id:               u32,
    pub source:           String,
    pub destination:      String,
    pub current_location: String,
}

impl VehicleRow {
    pub fn from_movable<M: Movable + ?Sized>(vehicle: &M) -> Self {
        Self {
            kind:             vehicle.kind_name(),
            id:               vehicle.id().get(),
            source:           vehicle.source().to_string(),
            destination:      vehicle.destination().to_string(),
            current_location: vehicle.current_location(),
        }
    }

    /// `<Type> <id> going from <source> to <destination>. Currently in <current>`
    pub fn report_line(&self) -> String {
        format!(
            "{} {} going from {} to {}. Currently in {}",
            self.kind, self.id, self.source, self.destination, self.current_location
        )
    }
}
