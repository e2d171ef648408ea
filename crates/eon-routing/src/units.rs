//! The distance-adaptive modulation rule.
//!
//! Longer paths force a less efficient modulation format, which needs more
//! spectrum units to carry the same signal.  The rule is a staircase keyed
//! by the path cost normalised against the longest shortest path `L` of the
//! network:
//!
//! | `cost / L`  | required units |
//! |-------------|----------------|
//! | ≤ 3/16      | `n`            |
//! | ≤ 3/8       | `⌈11n/10⌉`     |
//! | ≤ 3/4       | `2n`           |
//! | ≤ 3/2       | `3n`           |
//! | ≤ 3         | `4n`           |
//! | beyond      | infeasible     |
//!
//! where `n` is the demand's requested unit count.

use std::collections::BTreeSet;

/// The modulation table, calibrated once per network by the longest
/// shortest path.
#[derive(Clone, Copy, Debug)]
pub struct AdaptiveUnits {
    longest_shortest_path: f64,
}

impl AdaptiveUnits {
    /// Calibrate the table.
    ///
    /// # Panics
    /// Panics if `longest_shortest_path` is not strictly positive.
    pub fn new(longest_shortest_path: f64) -> Self {
        assert!(
            longest_shortest_path > 0.0,
            "longest shortest path must be positive, got {longest_shortest_path}"
        );
        Self { longest_shortest_path }
    }

    /// The number of units a demand for `ncu` units needs on a path of the
    /// given cost, or `None` when no modulation format reaches that far.
    pub fn units(&self, ncu: u32, cost: f64) -> Option<u32> {
        let r = cost / self.longest_shortest_path;
        if r <= 3.0 / 16.0 {
            Some(ncu)
        } else if r <= 3.0 / 8.0 {
            Some(eleven_tenths(ncu))
        } else if r <= 3.0 / 4.0 {
            Some(2 * ncu)
        } else if r <= 3.0 / 2.0 {
            Some(3 * ncu)
        } else if r <= 3.0 {
            Some(4 * ncu)
        } else {
            None
        }
    }

    /// The maximum cost a path may have when the demand for `ncu` units is
    /// carried on `used` actual units — the boundary of the staircase
    /// bucket `used` falls in.  `None` when `used < ncu` (no format fits).
    pub fn reach(&self, ncu: u32, used: u32) -> Option<f64> {
        let l = self.longest_shortest_path;
        if used < ncu {
            None
        } else if used < eleven_tenths(ncu) {
            Some(3.0 / 16.0 * l)
        } else if used < 2 * ncu {
            Some(3.0 / 8.0 * l)
        } else if used < 3 * ncu {
            Some(3.0 / 4.0 * l)
        } else if used < 4 * ncu {
            Some(3.0 / 2.0 * l)
        } else {
            Some(3.0 * l)
        }
    }

    /// Every unit count some modulation format can require for a demand of
    /// `ncu` units, in ascending order.
    pub fn ncus(ncu: u32) -> BTreeSet<u32> {
        BTreeSet::from([ncu, eleven_tenths(ncu), 2 * ncu, 3 * ncu, 4 * ncu])
    }
}

#[inline]
fn eleven_tenths(n: u32) -> u32 {
    (11 * n).div_ceil(10)
}
