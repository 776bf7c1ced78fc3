//! Fleet-wide attribute limits.

use crate::{FleetError, FleetResult, VehicleId, VehicleKind};

/// Default ceiling for a plane's maximum height.
pub const HEIGHT_LIMIT: u32 = 1_500;

/// Default ceiling for a train's passenger capacity.
pub const PASSENGER_LIMIT: u32 = 500;

/// Default ceiling for the number of stations on one train leg.
pub const STATION_LIMIT: u32 = 5;

// ── FleetConfig ───────────────────────────────────────────────────────────────

/// Upper bounds applied to vehicle attributes by drivers that admit vehicles
/// into a fleet.
///
/// Vehicles themselves never consult these limits; `Plane::new` and
/// `Train::new` accept any value.  Typically loaded from a JSON file by the
/// application crate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FleetConfig {
    /// Highest `max_height` a plane may declare.  Default: 1500.
    pub height_limit: u32,
    /// Highest `max_passengers` a train may declare.  Default: 500.
    pub passenger_limit: u32,
    /// Most stations a train leg may have.  Default: 5.
    pub station_limit: u32,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            height_limit:    HEIGHT_LIMIT,
            passenger_limit: PASSENGER_LIMIT,
            station_limit:   STATION_LIMIT,
        }
    }
}

impl FleetConfig {
    /// Reject configurations under which no vehicle could be admitted.
    pub fn validate(&self) -> FleetResult<()> {
        if self.station_limit == 0 {
            return Err(FleetError::Config("station_limit must be at least 1".into()));
        }
        Ok(())
    }

    pub fn check_height(&self, id: VehicleId, max_height: u32) -> FleetResult<()> {
        let kind = VehicleKind::Plane;
        check(kind, id, kind.capacity_field(), max_height, self.height_limit)
    }

    pub fn check_passengers(&self, id: VehicleId, max_passengers: u32) -> FleetResult<()> {
        let kind = VehicleKind::Train;
        check(kind, id, kind.capacity_field(), max_passengers, self.passenger_limit)
    }

    pub fn check_stations(&self, id: VehicleId, total_stations: u32) -> FleetResult<()> {
        check(VehicleKind::Train, id, "totalStations", total_stations, self.station_limit)
    }
}

fn check(
    kind:  VehicleKind,
    id:    VehicleId,
    field: &'static str,
    value: u32,
    limit: u32,
) -> FleetResult<()> {
    if value > limit {
        return Err(FleetError::LimitExceeded { kind, id, field, value, limit });
    }
    Ok(())
}
