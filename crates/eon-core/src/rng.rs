//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The whole run is driven by a single `SmallRng` seeded from the
//! command-line seed, so a run is reproducible from its seed alone.  Where a
//! component needs an independent stream (e.g. a side experiment that must
//! not perturb the traffic process), derive one with [`SimRng::child`]:
//!
//!   child_seed = parent_draw XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets uniformly across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::Distribution;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level deterministic RNG.
///
/// Used only in single-threaded contexts; the simulator never samples from
/// two places concurrently.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// seeding independent streams deterministically from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` adaptors.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a value from a `rand_distr` distribution (exponential,
    /// Poisson, …).
    #[inline]
    pub fn sample<T, D>(&mut self, dist: &D) -> T
    where
        D: Distribution<T>,
    {
        dist.sample(&mut self.0)
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

    /// Two distinct indices drawn uniformly from `0..n`.
    ///
    /// The second index is drawn from `0..n-1` and remapped past the first,
    /// so both are uniform and never equal.
    ///
    /// # Panics
    /// Panics if `n < 2`.
    pub fn distinct_pair(&mut self, n: usize) -> (usize, usize) {
        assert!(n >= 2, "distinct_pair needs at least two elements");
        let a = self.0.gen_range(0..n);
        let mut b = self.0.gen_range(0..n - 1);
        if b == a {
            b = n - 1;
        }
        (a, b)
    }
}
