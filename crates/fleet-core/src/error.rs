//! Error type shared by the `fleet-*` crates.
//!
//! `fleet-report` wraps `FleetError` as one variant of its own error enum;
//! the vehicle crate returns it directly.

use thiserror::Error;

use crate::{VehicleId, VehicleKind};

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("location name must not be empty")]
    EmptyLocation,

    #[error("train {0} must have at least one station")]
    NoStations(VehicleId),

    /// Two vehicles of different kinds were compared by capacity.
    #[error("cannot compare {left_kind} {left_id} with {right_kind} {right_id}: ordering is only defined within one kind")]
    KindMismatch {
        left_kind:  VehicleKind,
        left_id:    VehicleId,
        right_kind: VehicleKind,
        right_id:   VehicleId,
    },

    /// A train's station counter fell outside `0..total`.
    #[error("train {id}: station {station} is outside 0..{total}")]
    StationOutOfRange {
        id:      VehicleId,
        station: u32,
        total:   u32,
    },

    #[error("{kind} {id}: {field} = {value} exceeds the limit of {limit}")]
    LimitExceeded {
        kind:  VehicleKind,
        id:    VehicleId,
        field: &'static str,
        value: u32,
        limit: u32,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `fleet-*` crates.
pub type FleetResult<T> = Result<T, FleetError>;
