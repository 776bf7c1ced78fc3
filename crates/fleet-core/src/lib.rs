//! `fleet-core` — foundational types for the `rust_fleet` vehicle model.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It has no
//! `fleet-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`ids`]        | `VehicleId`                                           |
//! | [`location`]   | `Location` — named route endpoint                     |
//! | [`kind`]       | `VehicleKind` enum                                    |
//! | [`config`]     | `FleetConfig` attribute limits                        |
//! | [`rng`]        | `DriverRng` for external drivers                      |
//! | [`error`]      | `FleetError`, `FleetResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod kind;
pub mod location;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::FleetConfig;
pub use error::{FleetError, FleetResult};
pub use ids::VehicleId;
pub use kind::VehicleKind;
pub use location::Location;
pub use rng::DriverRng;
