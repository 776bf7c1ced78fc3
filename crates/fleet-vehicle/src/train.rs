//! Trains: station-by-station movement, ordered by passenger capacity.

use std::fmt;
use std::mem;

use fleet_core::{FleetError, FleetResult, Location, VehicleId, VehicleKind};
use tracing::trace;

use crate::{CapacityOrd, Movable};

/// A train shuttling between two locations through a fixed number of
/// stations.
///
/// `current_station` is always in `0..total_stations`.  Station 0 is the
/// source.  The fields are private and `advance` is the only mutator, so the
/// range holds by construction.
///
/// Display form (stable field order):
/// `licence = <id>, source = <src>, destination = <dst>, station = <cur>,
/// totalStations = <n>, maxPassengers = <p>`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TrainRecord"))]
pub struct Train {
    id:              VehicleId,
    source:          Location,
    destination:     Location,
    total_stations:  u32,
    max_passengers:  u32,
    current_station: u32,
}

impl Train {
    /// Create a train standing at `source`.
    ///
    /// # Errors
    ///
    /// [`FleetError::NoStations`] if `total_stations` is 0.
    pub fn new(
        id:             VehicleId,
        source:         Location,
        destination:    Location,
        total_stations: u32,
        max_passengers: u32,
    ) -> FleetResult<Self> {
        if total_stations == 0 {
            return Err(FleetError::NoStations(id));
        }
        Ok(Self {
            id,
            source,
            destination,
            total_stations,
            max_passengers,
            current_station: 0,
        })
    }

    #[inline]
    pub fn total_stations(&self) -> u32 {
        self.total_stations
    }

    #[inline]
    pub fn max_passengers(&self) -> u32 {
        self.max_passengers
    }

    #[inline]
    pub fn current_station(&self) -> u32 {
        self.current_station
    }

    /// `true` while the train stands at the source of its current leg.
    #[inline]
    pub fn at_source(&self) -> bool {
        self.current_station == 0
    }
}

impl Movable for Train {
    fn kind_name(&self) -> &'static str {
        VehicleKind::Train.as_str()
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
        if self.at_source() {
            return self.source.to_string();
        }
        format!(
            "station {} between {} and {}.",
            self.current_station, self.source, self.destination
        )
    }

    /// Move to the next station; reaching `total_stations` completes the leg
    /// and reverses direction.
    fn advance(&mut self) {
        self.current_station += 1;
        if self.current_station == self.total_stations {
            mem::swap(&mut self.source, &mut self.destination);
            self.current_station = 0;
            trace!(id = %self.id, at = %self.source, "train reversed");
        }
    }
}

impl CapacityOrd for Train {
    #[inline]
    fn capacity(&self) -> u32 {
        self.max_passengers
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "licence = {}, source = {}, destination = {}, station = {}, totalStations = {}, maxPassengers = {}",
            self.id,
            self.source,
            self.destination,
            self.current_station,
            self.total_stations,
            self.max_passengers
        )
    }
}

// ── Deserialization ───────────────────────────────────────────────────────────

/// Unchecked wire form of a [`Train`]; converted with validation so that a
/// deserialized train still satisfies the station invariant.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TrainRecord {
    id:              VehicleId,
    source:          Location,
    destination:     Location,
    total_stations:  u32,
    max_passengers:  u32,
    #[serde(default)]
    current_station: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<TrainRecord> for Train {
    type Error = FleetError;

    fn try_from(r: TrainRecord) -> FleetResult<Self> {
        let mut train = Train::new(r.id, r.source, r.destination, r.total_stations, r.max_passengers)?;
        if r.current_station >= train.total_stations {
            return Err(FleetError::StationOutOfRange {
                id:      r.id,
                station: r.current_station,
                total:   r.total_stations,
            });
        }
        train.current_station = r.current_station;
        Ok(train)
    }
}
