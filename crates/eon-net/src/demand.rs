//! A request for spectrum between two nodes.

use std::fmt;

use eon_core::VertexId;

/// A demand: carry `ncu` contiguous spectrum units from `src` to `dst`.
///
/// `ncu` is the *requested* number of units; the distance-adaptive
/// modulation rule may require more on long paths.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Demand {
    pub src: VertexId,
    pub dst: VertexId,
    pub ncu: u32,
}

impl Demand {
    pub fn new(src: VertexId, dst: VertexId, ncu: u32) -> Self {
        Self { src, dst, ncu }
    }

    /// A demand is well-formed when the endpoints differ and at least one
    /// unit is requested.
    pub fn is_valid(&self) -> bool {
        self.src != self.dst && self.ncu >= 1
    }
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({} units)", self.src, self.dst, self.ncu)
    }
}
