//! `fleet-vehicle` — vehicles, their route state, and per-kind ordering.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`movable`]  | `Movable` — the capability every vehicle satisfies             |
//! | [`ordering`] | `CapacityOrd` — same-kind ordering by capacity attribute       |
//! | [`plane`]    | `Plane` — endpoint-only movement                               |
//! | [`train`]    | `Train` — station-by-station movement                          |
//! | [`vehicle`]  | `Vehicle` — closed tagged union over the two kinds             |
//!
//! # Movement model
//!
//! Each call to [`Movable::advance`] moves a vehicle one discrete step:
//!
//! 1. A `Plane` has no in-flight state; one step swaps source and
//!    destination.
//! 2. A `Train` walks `current_station` through `0..total_stations`.  When
//!    the counter would reach `total_stations` the leg is complete: source
//!    and destination swap and the counter resets to 0.
//!
//! Vehicles never coordinate with each other.  Whoever owns a vehicle
//! decides when to call `advance`.

pub mod movable;
pub mod ordering;
pub mod plane;
pub mod train;
pub mod vehicle;


pub use movable::Movable;
pub use ordering::CapacityOrd;
pub use plane::Plane;
pub use train::Train;
pub use vehicle::Vehicle;
