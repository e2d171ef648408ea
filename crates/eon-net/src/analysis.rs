//! Topology analysis: shortest-path survey, connectivity, load metrics.
//!
//! The survey runs a plain single-criterion Dijkstra from every vertex over
//! the link weights, ignoring spectrum entirely.  Its outputs parameterise
//! the rest of a run: the longest shortest path calibrates the
//! distance-adaptive modulation table, and the mean hop count feeds the
//! offered-load formula of the traffic model.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use eon_core::VertexId;

use crate::error::{NetError, NetResult};
use crate::graph::Graph;

// ── Shortest-path survey ──────────────────────────────────────────────────────

/// Aggregates over the shortest paths between all ordered vertex pairs.
#[derive(Clone, Copy, Debug)]
pub struct PathSurvey {
    /// Mean number of links of a shortest path.
    pub mean_hops: f64,
    /// Largest number of links of any shortest path.
    pub max_hops: u32,
    /// Mean shortest-path cost.
    pub mean_length: f64,
    /// The longest shortest path — the weighted diameter.
    pub max_length: f64,
}

/// Survey the shortest paths between every ordered pair of distinct
/// vertices.
///
/// Returns [`NetError::Disconnected`] if any pair is unreachable.
pub fn survey_shortest_paths(g: &Graph) -> NetResult<PathSurvey> {
    let mut hop_sum = 0u64;
    let mut len_sum = 0.0;
    let mut max_hops = 0u32;
    let mut max_length = 0.0f64;
    let mut pairs = 0u64;

    for src in g.vertices() {
        let (dist, hops) = single_source(g, src);
        for dst in g.vertices() {
            if src == dst {
                continue;
            }
            let d = dist[dst.index()].ok_or(NetError::Disconnected)?;
            let h = hops[dst.index()];
            hop_sum += h as u64;
            len_sum += d;
            max_hops = max_hops.max(h);
            max_length = max_length.max(d);
            pairs += 1;
        }
    }

    if pairs == 0 {
        return Err(NetError::Disconnected);
    }

    Ok(PathSurvey {
        mean_hops: hop_sum as f64 / pairs as f64,
        max_hops,
        mean_length: len_sum / pairs as f64,
        max_length,
    })
}

/// Weight-only Dijkstra from `src`: per-vertex cost and hop count of one
/// shortest path.
fn single_source(g: &Graph, src: VertexId) -> (Vec<Option<f64>>, Vec<u32>) {
    let n = g.vertex_count();
    let mut dist: Vec<Option<f64>> = vec![None; n];
    let mut hops = vec![0u32; n];
    dist[src.index()] = Some(0.0);

    // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key VertexId gives deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, VertexId)>> = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), src)));

    while let Some(Reverse((cost, v))) = heap.pop() {
        // Skip stale heap entries.
        if dist[v.index()] != Some(cost.0) {
            continue;
        }
        for e in g.out_edges(v) {
            let u = g.opposite(e, v);
            let next = cost.0 + g.weight(e);
            let better = match dist[u.index()] {
                None => true,
                Some(d) => next < d,
            };
            if better {
                dist[u.index()] = Some(next);
                hops[u.index()] = hops[v.index()] + 1;
                heap.push(Reverse((OrderedFloat(next), u)));
            }
        }
    }

    (dist, hops)
}

// ── Connectivity ──────────────────────────────────────────────────────────────

/// `true` iff every vertex is reachable from vertex 0 (vacuously true for
/// the empty graph).
pub fn is_connected(g: &Graph) -> bool {
    let n = g.vertex_count();
    if n == 0 {
        return true;
    }
    let mut seen = vec![false; n];
    let mut stack = vec![VertexId(0)];
    seen[0] = true;
    let mut reached = 1;
    while let Some(v) = stack.pop() {
        for e in g.out_edges(v) {
            let u = g.opposite(e, v);
            if !seen[u.index()] {
                seen[u.index()] = true;
                reached += 1;
                stack.push(u);
            }
        }
    }
    reached == n
}

// ── Load metrics ──────────────────────────────────────────────────────────────

/// Mean link load: per link, the fraction of nominal units currently in
/// use, averaged over all links.
pub fn utilization(g: &Graph) -> f64 {
    let mut sum = 0.0;
    let mut n = 0u32;
    for e in g.edges() {
        let nominal = g.nou(e);
        if nominal == 0 {
            continue;
        }
        let free = g.unit_set(e).count();
        sum += (nominal - free) as f64 / nominal as f64;
        n += 1;
    }
    if n == 0 { 0.0 } else { sum / n as f64 }
}

/// Mean number of free fragments per link — a measure of spectrum
/// fragmentation.
pub fn mean_fragments(g: &Graph) -> f64 {
    if g.edge_count() == 0 {
        return 0.0;
    }
    let total: usize = g.edges().map(|e| g.unit_set(e).len()).sum();
    total as f64 / g.edge_count() as f64
}

/// Total nominal unit count over all links.
pub fn total_capacity(g: &Graph) -> f64 {
    g.edges().map(|e| g.nou(e) as f64).sum()
}
