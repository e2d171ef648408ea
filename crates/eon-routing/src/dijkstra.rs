//! The label-setting driver.

use eon_core::VertexId;
use eon_net::Graph;

use crate::creator::LabelCreator;
use crate::label::Label;
use crate::permanent::Permanent;
use crate::tentative::Tentative;

/// Run the search from `start` until `dst` is settled or the tentative
/// store runs dry.
///
/// Every iteration moves the globally cheapest tentative label into the
/// permanent store — at that moment no other route to its (vertex, range)
/// can be cheaper, the usual Dijkstra argument lifted to the dominance
/// order — and relaxes the outgoing edges of its target.
///
/// `peak_labels` is updated with the largest number of labels held by both
/// stores at any point, for the per-search diagnostics.
pub fn dijkstra(
    g: &Graph,
    p: &mut Permanent,
    t: &mut Tentative,
    start: Label,
    creator: &LabelCreator<'_>,
    dst: VertexId,
    peak_labels: &mut usize,
) {
    // Boot the search.
    t.push(start);
    *peak_labels = (*peak_labels).max(t.len());

    while !t.is_empty() {
        let l = t.pop();
        p.push(l);

        // Stop when the destination is settled; its first accepted label is
        // the solution.
        if l.target() == dst {
            break;
        }

        for e in g.out_edges(l.target()) {
            relax(p, t, e, &l, creator);
            *peak_labels = (*peak_labels).max(p.len() + t.len());
        }
    }
}

/// Try to relax edge `e` given label `l`.
///
/// A candidate is kept only when nothing accepted or pending is better than
/// or equal to it; it then evicts every pending label it dominates before
/// entering the tentative store.  Purging first keeps the store small for
/// the insert, and `purge_worse` may assume the candidate itself is not a
/// member.
fn relax(
    p: &Permanent,
    t: &mut Tentative,
    e: eon_core::EdgeId,
    l: &Label,
    creator: &LabelCreator<'_>,
) {
    for candidate in creator.candidates(e, l) {
        if p.has_better_or_equal(&candidate) || t.has_better_or_equal(&candidate) {
            continue;
        }
        t.purge_worse(&candidate);
        t.push(candidate);
    }
}
