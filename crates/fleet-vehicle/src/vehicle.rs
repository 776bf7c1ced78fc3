//! Closed tagged union over the vehicle kinds.

use std::fmt;

use fleet_core::{FleetConfig, FleetError, FleetResult, Location, VehicleId, VehicleKind};
use tracing::warn;

use crate::{CapacityOrd, Movable, Plane, Train};

/// Any vehicle of the fleet.
///
/// Use this when planes and trains share one collection.  Every capability
/// is dispatched with an exhaustive `match`, so adding a kind forces every
/// site to handle it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum Vehicle {
    Plane(Plane),
    Train(Train),
}

impl Vehicle {
    #[inline]
    pub fn kind(&self) -> VehicleKind {
        match self {
            Vehicle::Plane(_) => VehicleKind::Plane,
            Vehicle::Train(_) => VehicleKind::Train,
        }
    }

    /// The kind-specific ordering attribute (height or passengers).
    #[inline]
    pub fn capacity(&self) -> u32 {
        match self {
            Vehicle::Plane(p) => p.capacity(),
            Vehicle::Train(t) => t.capacity(),
        }
    }

    /// Raw capacity difference against a vehicle of the same kind.
    ///
    /// # Errors
    ///
    /// [`FleetError::KindMismatch`] naming both vehicles when the kinds
    /// differ.  This is a caller bug; nothing is coerced.
    pub fn compare_capacity(&self, other: &Vehicle) -> FleetResult<i64> {
        match (self, other) {
            (Vehicle::Plane(a), Vehicle::Plane(b)) => Ok(a.compare_capacity(b)),
            (Vehicle::Train(a), Vehicle::Train(b)) => Ok(a.compare_capacity(b)),
            _ => {
                warn!(left = %self.id(), right = %other.id(), "capacity comparison across kinds");
                Err(FleetError::KindMismatch {
                    left_kind:  self.kind(),
                    left_id:    self.id(),
                    right_kind: other.kind(),
                    right_id:   other.id(),
                })
            }
        }
    }

    /// Check this vehicle's attributes against fleet limits.
    pub fn check(&self, config: &FleetConfig) -> FleetResult<()> {
        match self {
            Vehicle::Plane(p) => config.check_height(p.id(), p.max_height()),
            Vehicle::Train(t) => {
                config.check_stations(t.id(), t.total_stations())?;
                config.check_passengers(t.id(), t.max_passengers())
            }
        }
    }
}

impl Movable for Vehicle {
    fn kind_name(&self) -> &'static str {
        self.kind().as_str()
    }

    fn id(&self) -> VehicleId {
        match self {
            Vehicle::Plane(p) => p.id(),
            Vehicle::Train(t) => t.id(),
        }
    }

    fn source(&self) -> &Location {
        match self {
            Vehicle::Plane(p) => p.source(),
            Vehicle::Train(t) => t.source(),
        }
    }

    fn destination(&self) -> &Location {
        match self {
            Vehicle::Plane(p) => p.destination(),
            Vehicle::Train(t) => t.destination(),
        }
    }

    fn current_location(&self) -> String {
        match self {
            Vehicle::Plane(p) => p.current_location(),
            Vehicle::Train(t) => t.current_location(),
        }
    }

    fn advance(&mut self) {
        match self {
            Vehicle::Plane(p) => p.advance(),
            Vehicle::Train(t) => t.advance(),
        }
    }
}

impl From<Plane> for Vehicle {
    fn from(p: Plane) -> Self {
        Vehicle::Plane(p)
    }
}

impl From<Train> for Vehicle {
    fn from(t: Train) -> Self {
        Vehicle::Train(t)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vehicle::Plane(p) => fmt::Display::fmt(p, f),
            Vehicle::Train(t) => fmt::Display::fmt(t, f),
        }
    }
}
