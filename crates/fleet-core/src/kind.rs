//! Vehicle kind enum shared across the vehicle and report crates.

/// The concrete variant of a vehicle.  Ordering is only defined between two
/// vehicles of the same kind.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleKind {
    Plane,
    Train,
}

impl VehicleKind {
    /// Type name as it appears at the start of each report line.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleKind::Plane => "Plane",
            VehicleKind::Train => "Train",
        }
    }

    /// Name of the attribute this kind is ordered by.
    pub fn capacity_field(self) -> &'static str {
        match self {
            VehicleKind::Plane => "maxHeight",
            VehicleKind::Train => "maxPassengers",
        }
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
