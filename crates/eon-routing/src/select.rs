//! Spectrum selection policy.

use std::fmt;
use std::str::FromStr;

use eon_spectrum::{UnitRange, UnitSet};

/// How to pick the assigned range when a wider fragment qualifies.
///
/// Only [`First`](SpectrumSelection::First) (first-fit: the lowest-numbered
/// qualifying range) is implemented; the other policies are recognised so
/// that configuration can name them, and refused when the routing
/// configuration is built.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum SpectrumSelection {
    #[default]
    First,
    Fittest,
    Random,
}

impl fmt::Display for SpectrumSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SpectrumSelection::First => "first",
            SpectrumSelection::Fittest => "fittest",
            SpectrumSelection::Random => "random",
        };
        f.write_str(s)
    }
}

impl FromStr for SpectrumSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(SpectrumSelection::First),
            "fittest" => Ok(SpectrumSelection::Fittest),
            "random" => Ok(SpectrumSelection::Random),
            other => Err(format!(
                "unknown spectrum selection `{other}`; choose one of: first fittest random"
            )),
        }
    }
}

/// The lowest `width` units of `r` — first-fit within one fragment.
///
/// # Panics
/// Panics (debug) if `r` is narrower than `width`.
pub(crate) fn first_fit(r: UnitRange, width: u32) -> UnitRange {
    debug_assert!(r.count() >= width);
    UnitRange::new(r.min(), r.min() + width)
}

/// First-fit across a whole set: the lowest `width` units of the first
/// fragment wide enough.
///
/// # Panics
/// Panics if no fragment qualifies — callers filter the set by width first.
pub(crate) fn first_fit_in_set(su: &UnitSet, width: u32) -> UnitRange {
    let r = su
        .iter()
        .find(|r| r.count() >= width)
        .expect("no fragment wide enough for first-fit selection");
    first_fit(*r, width)
}
