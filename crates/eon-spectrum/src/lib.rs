//! `eon-spectrum` — spectrum algebra for elastic optical links.
//!
//! The spectrum of a fiber link is a row of equally sized frequency units,
//! numbered from 0.  A signal occupies a *contiguous* run of units, and the
//! free capacity of a link is a set of such runs.  Two types model this:
//!
//! | Type         | Meaning                                               |
//! |--------------|-------------------------------------------------------|
//! | [`UnitRange`] | one contiguous half-open run `[min, max)`            |
//! | [`UnitSet`]   | sorted, disjoint, non-adjacent collection of runs    |
//!
//! The operations on [`UnitSet`] (insert with merging, subtractive remove,
//! intersection, width filtering, slot enumeration) are total: none of them
//! can fail, and all of them preserve the set invariants.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod range;
pub mod set;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use range::UnitRange;
pub use set::{UnitSet, intersection};
