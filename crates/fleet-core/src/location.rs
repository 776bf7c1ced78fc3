//! Named route endpoints.
//!
//! A `Location` is an immutable value compared by name.  Vehicles hold their
//! own copies; nothing points back from a location to the vehicles using it.

use std::fmt;
use std::str::FromStr;

use crate::{FleetError, FleetResult};

/// A place a vehicle can depart from or travel to.
///
/// The display form is the name exactly as given, which is what fleet
/// reports print for source, destination and current position.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Location {
    name: String,
}

impl Location {
    /// Create a location.  Fails with [`FleetError::EmptyLocation`] if `name`
    /// is empty or only whitespace.
    pub fn new(name: impl Into<String>) -> FleetResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FleetError::EmptyLocation);
        }
        Ok(Self { name })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Location {
    type Err = FleetError;

    fn from_str(s: &str) -> FleetResult<Self> {
        Location::new(s)
    }
}

impl TryFrom<String> for Location {
    type Error = FleetError;

    fn try_from(name: String) -> FleetResult<Self> {
        Location::new(name)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> String {
        location.name
    }
}
