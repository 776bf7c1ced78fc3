//! Deterministic RNG for external drivers.
//!
//! The vehicle model itself is fully deterministic; randomness only enters
//! through whatever driver decides which vehicle moves next.  `DriverRng`
//! gives those drivers a seeded, reproducible source so that two runs with
//! the same seed produce identical reports.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Driver-level RNG.  Single-threaded use only.
pub struct DriverRng(SmallRng);

impl DriverRng {
    pub fn new(seed: u64) -> Self {
        DriverRng(SmallRng::seed_from_u64(seed))
    }

    /// Pick an index in `0..len`.  Returns `None` when `len == 0`.
    #[inline]
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.0.gen_range(0..len))
    }
}
