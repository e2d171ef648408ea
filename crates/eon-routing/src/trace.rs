//! Path reconstruction from the permanent store.

use eon_core::VertexId;
use eon_net::Graph;

use crate::label::Label;
use crate::permanent::Permanent;
use crate::search::SpectrumPath;
use crate::select;
use crate::units::AdaptiveUnits;

/// Rebuild the edge path ending at `dst` from the permanent store, and pick
/// the assigned range.
///
/// The first accepted label at `dst` is the solution: it was popped at the
/// global cost minimum, and equal-cost ties were already stored in
/// first-fit order.  The assigned range is the lowest sub-range of that
/// label's units with the width the modulation rule demands at the final
/// cost.
///
/// Walking back: for a label over edge `e`, the predecessor at `e`'s far
/// end is the label whose cost *plus* the edge weight equals this label's
/// cost and whose units cover the assigned range.  The comparison adds
/// rather than subtracts — the search only ever added, and with
/// floating-point costs `a + ec == c` is not the same test as
/// `a == c - ec`.
///
/// Returns `None` when `dst` was never settled.
pub fn trace(
    g: &Graph,
    p: &Permanent,
    dst: VertexId,
    start: &Label,
    ncu: u32,
    adaptive: AdaptiveUnits,
) -> Option<SpectrumPath> {
    let first = *p.frontier(dst).first()?;

    let width = adaptive
        .units(ncu, first.cost())
        .expect("accepted label beyond modulation reach");
    let chosen = select::first_fit(first.units(), width);

    let mut edges = Vec::new();
    let mut l = first;
    while l != *start {
        let e = l.edge();
        edges.push(e);

        let s = g.opposite(e, l.target());
        let ec = g.weight(e);
        l = *p
            .frontier(s)
            .iter()
            .find(|j| j.cost() + ec == l.cost() && j.units().includes(chosen))
            .expect("no predecessor label on a settled path");
    }

    edges.reverse();
    Some(SpectrumPath { units: chosen, edges })
}
