//! Same-kind ordering by capacity attribute.

use std::cmp::Ordering;

/// Total order between two vehicles of the same concrete kind.
///
/// Because `other` is `&Self`, comparing a plane with a train does not
/// compile.  For runtime-heterogeneous collections use
/// [`Vehicle::compare_capacity`][crate::Vehicle::compare_capacity], which
/// reports the mismatch as an error.
pub trait CapacityOrd {
    /// The kind-specific attribute used for ordering.
    fn capacity(&self) -> u32;

    /// Raw difference `self.capacity() - other.capacity()`.
    ///
    /// The sign gives the order; the magnitude is the attribute difference
    /// and is not normalised to `{-1, 0, 1}`.  Widened to `i64` so it cannot
    /// overflow.
    #[inline]
    fn compare_capacity(&self, other: &Self) -> i64 {
        i64::from(self.capacity()) - i64::from(other.capacity())
    }

    /// `compare_capacity` collapsed to an `Ordering`, for use with
    /// `sort_by`.
    #[inline]
    fn capacity_cmp(&self, other: &Self) -> Ordering {
        self.compare_capacity(other).cmp(&0)
    }
}
