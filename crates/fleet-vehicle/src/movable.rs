//! The `Movable` capability.

use fleet_core::{Location, VehicleId};

/// Observable contract every vehicle satisfies.
///
/// None of these methods perform I/O or fail.  `advance` is the only method
/// that mutates, and it only touches the vehicle's own fields.
pub trait Movable {
    /// Constant type name of the concrete variant (`"Plane"`, `"Train"`).
    fn kind_name(&self) -> &'static str;

    fn id(&self) -> VehicleId;

    /// Start of the current leg.
    fn source(&self) -> &Location;

    /// End of the current leg.
    fn destination(&self) -> &Location;

    /// Human-readable description of where the vehicle is right now.
    fn current_location(&self) -> String;

    /// Move exactly one discrete step along the route.
    fn advance(&mut self);
}

impl<M: Movable + ?Sized> Movable for &mut M {
    fn kind_name(&self) -> &'static str {
        (**self).kind_name()
    }

    fn id(&self) -> VehicleId {
        (**self).id()
    }

    fn source(&self) -> &Location {
        (**self).source()
    }

    fn destination(&self) -> &Location {
        (**self).destination()
    }

    fn current_location(&self) -> String {
        (**self).current_location()
    }

    fn advance(&mut self) {
        (**self).advance()
    }
}

impl<M: Movable + ?Sized> Movable for Box<M> {
    fn kind_name(&self) -> &'static str {
        (**self).kind_name()
    }

    fn id(&self) -> VehicleId {
        (**self).id()
    }

    fn source(&self) -> &Location {
        (**self).source()
    }

    fn destination(&self) -> &Location {
        (**self).destination()
    }

    fn current_location(&self) -> String {
        (**self).current_location()
    }

    fn advance(&mut self) {
        (**self).advance()
    }
}
