//! Seeded simulation RNG.
//!
//! One process-wide generator, owned by the world and accessed only under
//! its lock.  Seeding once from `SimConfig::seed` makes every run with the
//! same seed identical, which the scenario tests rely on; the server binary
//! seeds from entropy instead.  Never replace this with per-thread lazily
//! initialised generators — determinism is part of the contract.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The world's random number generator.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
