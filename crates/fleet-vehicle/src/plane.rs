//! Planes: endpoint-only movement, ordered by maximum height.

use std::fmt;
use std::mem;

use fleet_core::{Location, VehicleId, VehicleKind};
use tracing::trace;

use crate::{CapacityOrd, Movable};

/// A plane flying back and forth between two locations.
///
/// A plane has no in-flight position: it is always at its source, and one
/// step of movement puts it at the other endpoint.
///
/// Display form (stable field order):
/// `licence = <id>, source = <src>, destination = <dst>, maxHeight = <h>`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    id:          VehicleId,
    source:      Location,
    destination: Location,
    max_height:  u32,
}

impl Plane {
    pub fn new(id: VehicleId, source: Location, destination: Location, max_height: u32) -> Self {
        Self { id, source, destination, max_height }
    }

    #[inline]
    pub fn max_height(&self) -> u32 {
        self.max_height
    }
}

impl Movable for Plane {
    fn kind_name(&self) -> &'static str {
        VehicleKind::Plane.as_str()
    }

    fn id(&self) -> VehicleId {
        self.id
    }

    fn source(&self) -> &Location {
        &self.source
    }

    fn destination(&self) -> &Location {
        &self.destination
    }

    fn current_location(&self) -> String {
        self.source.to_string()
    }

    /// Fly the whole leg: source and destination swap.
    fn advance(&mut self) {
        mem::swap(&mut self.source, &mut self.destination);
        trace!(id = %self.id, at = %self.source, "plane landed");
    }
}

impl CapacityOrd for Plane {
    #[inline]
    fn capacity(&self) -> u32 {
        self.max_height
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "licence = {}, source = {}, destination = {}, maxHeight = {}",
            self.id, self.source, self.destination, self.max_height
        )
    }
}
