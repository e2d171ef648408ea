//! Successor-label generation.

use eon_core::EdgeId;
use eon_net::Graph;
use eon_spectrum::{UnitSet, intersection};

use crate::label::Label;
use crate::units::AdaptiveUnits;

/// Builds the candidate labels for crossing one edge from one label.
///
/// For edge `e` and label `l` at one of `e`'s endpoints, the candidate cost
/// is `l.cost() + weight(e)`; the candidate spectrum is the intersection of
/// `l`'s range with the edge's free set, with every member narrower than
/// the modulation requirement at the candidate cost removed.  Each
/// surviving member becomes one candidate label.
///
/// No labels are produced — the creator's way of signalling "no label" to
/// the relax step — when the candidate cost is beyond the modulation reach
/// or past the optional cost cap.
pub struct LabelCreator<'a> {
    graph: &'a Graph,
    /// Requested contiguous units of the demand being routed.
    ncu: u32,
    adaptive: AdaptiveUnits,
    /// Optional hard cap on path cost.
    max_cost: Option<f64>,
}

impl<'a> LabelCreator<'a> {
    pub fn new(graph: &'a Graph, ncu: u32, adaptive: AdaptiveUnits, max_cost: Option<f64>) -> Self {
        Self { graph, ncu, adaptive, max_cost }
    }

    /// Candidate labels for crossing `e` from `l.target()`.
    pub fn candidates(&self, e: EdgeId, l: &Label) -> Vec<Label> {
        let cost = l.cost() + self.graph.weight(e);

        if self.max_cost.is_some_and(|cap| cost > cap) {
            return Vec::new();
        }
        let Some(required) = self.adaptive.units(self.ncu, cost) else {
            return Vec::new();
        };

        let mut su = intersection(&UnitSet::from(l.units()), self.graph.unit_set(e));
        su.remove_narrower_than(required);

        let target = self.graph.opposite(e, l.target());
        su.iter().map(|&u| Label::new(cost, u, e, target)).collect()
    }
}
