//! Built-in fleet roster.

use anyhow::{Context, Result};
use fleet_core::FleetConfig;
use fleet_vehicle::{Movable, Vehicle};
use tracing::warn;

// Plane 12 exceeds the default height limit and train 9 the station limit;
// both are turned away at admission.
const ROSTER_JSON: &str = r#"[
    { "kind": "Plane", "id": 7,  "source": "Ben Gurion", "destination": "Heathrow", "max_height": 1200 },
    { "kind": "Plane", "id": 4,  "source": "Heathrow",   "destination": "Schiphol", "max_height": 300 },
    { "kind": "Plane", "id": 12, "source": "Schiphol",   "destination": "Ben Gurion", "max_height": 2000 },
    { "kind": "Plane", "id": 2,  "source": "Ben Gurion", "destination": "Larnaca",  "max_height": 800 },
    { "kind": "Train", "id": 3,  "source": "Haifa",      "destination": "Tel Aviv", "total_stations": 4, "max_passengers": 450 },
    { "kind": "Train", "id": 5,  "source": "Tel Aviv",   "destination": "Jerusalem", "total_stations": 3, "max_passengers": 120 },
    { "kind": "Train", "id": 9,  "source": "Beersheba",  "destination": "Haifa",    "total_stations": 8, "max_passengers": 300 }
]"#;

/// Parse the roster and keep only vehicles within `limits`.
pub fn load_roster(limits: &FleetConfig) -> Result<Vec<Vehicle>> {
    let roster: Vec<Vehicle> = serde_json::from_str(ROSTER_JSON).context("parsing built-in roster")?;

    let admitted = roster
        .into_iter()
        .filter(|v| match v.check(limits) {
            Ok(()) => true,
            Err(e) => {
                warn!(id = %v.id(), "rejected: {e}");
                false
            }
        })
        .collect();
    Ok(admitted)
}
