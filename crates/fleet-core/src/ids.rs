//! Strongly typed vehicle identifier.
//!
//! `VehicleId` is `Copy + Ord + Hash` so it can be used as a map key and
//! sorted without ceremony.  The inner integer is `pub` so callers can build
//! ids from literals (`VehicleId(7)`).

use std::fmt;

/// Licence number of a vehicle, assigned at construction and never changed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(pub u32);

impl VehicleId {
    #[inline(always)]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VehicleId {
    /// Bare number — this form appears verbatim in fleet report lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VehicleId {
    #[inline(always)]
    fn from(n: u32) -> Self {
        VehicleId(n)
    }
}

impl TryFrom<usize> for VehicleId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<VehicleId, Self::Error> {
        u32::try_from(n).map(VehicleId)
    }
}
