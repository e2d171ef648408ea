//! Single-criterion Dijkstra over a filtered view of the graph.
//!
//! The scalar search the cross-check variants build on: edges are admitted
//! by a caller-supplied predicate (spectrum filter, Yen's edge/vertex
//! bans), and an optional cost cap drops candidates past the modulation
//! reach.  One label per vertex, the classical invariant.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use eon_core::{EdgeId, VertexId};
use eon_net::Graph;

/// Cheapest admitted path from `src` to `dst`.
///
/// Returns the peak number of scalar labels held (for diagnostics) and, if
/// `dst` is reachable, the path cost with its edge sequence.
pub(crate) fn shortest_path_filtered(
    g: &Graph,
    src: VertexId,
    dst: VertexId,
    admit: impl Fn(EdgeId) -> bool,
    cost_cap: Option<f64>,
) -> (usize, Option<(f64, Vec<EdgeId>)>) {
    let n = g.vertex_count();
    let mut dist: Vec<Option<f64>> = vec![None; n];
    let mut prev_edge = vec![EdgeId::INVALID; n];
    let mut labels = 0usize;
    let mut peak = 0usize;

    dist[src.index()] = Some(0.0);
    labels += 1;

    // Min-heap: Reverse turns the max-heap around; the VertexId key makes
    // ties deterministic.
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, VertexId)>> = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), src)));
    peak = peak.max(labels + heap.len());

    while let Some(Reverse((cost, v))) = heap.pop() {
        if v == dst {
            return (peak, Some((cost.0, rebuild(g, &prev_edge, src, dst))));
        }
        // Skip stale heap entries.
        if dist[v.index()] != Some(cost.0) {
            continue;
        }
        for e in g.out_edges(v) {
            if !admit(e) {
                continue;
            }
            let next = cost.0 + g.weight(e);
            if cost_cap.is_some_and(|cap| next > cap) {
                continue;
            }
            let u = g.opposite(e, v);
            let better = match dist[u.index()] {
                None => {
                    labels += 1;
                    true
                }
                Some(d) => next < d,
            };
            if better {
                dist[u.index()] = Some(next);
                prev_edge[u.index()] = e;
                heap.push(Reverse((OrderedFloat(next), u)));
            }
        }
        peak = peak.max(labels + heap.len());
    }

    (peak, None)
}

fn rebuild(g: &Graph, prev_edge: &[EdgeId], src: VertexId, dst: VertexId) -> Vec<EdgeId> {
    let mut edges = Vec::new();
    let mut cur = dst;
    while cur != src {
        let e = prev_edge[cur.index()];
        debug_assert_ne!(e, EdgeId::INVALID);
        edges.push(e);
        cur = g.opposite(e, cur);
    }
    edges.reverse();
    edges
}
