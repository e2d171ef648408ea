//! The four search algorithms and their diagnostics.
//!
//! [`generic`] is the production algorithm.  The other three exist solely
//! for cross-checking its results; they never mutate the graph, so they are
//! pure functions over (graph, demand).

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;
use std::time::Duration;

use ordered_float::OrderedFloat;

use eon_core::{EdgeId, VertexId};
use eon_net::{Demand, Graph};
use eon_spectrum::{UnitRange, UnitSet, intersection};

use crate::creator::LabelCreator;
use crate::dijkstra::dijkstra;
use crate::label::Label;
use crate::permanent::Permanent;
use crate::select;
use crate::standard::shortest_path_filtered;
use crate::tentative::Tentative;
use crate::trace::trace;
use crate::units::AdaptiveUnits;
use crate::yen::KShortestPaths;

// ── Result type ───────────────────────────────────────────────────────────────

/// A routed demand: the assigned contiguous range and the edge sequence
/// from source to destination.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SpectrumPath {
    pub units: UnitRange,
    pub edges: Vec<EdgeId>,
}

// ── Algorithms ────────────────────────────────────────────────────────────────

/// The available search algorithms.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Algorithm {
    /// The generic label-setting search — the production algorithm.
    Dijkstra,
    /// Per-candidate-slot filtered scalar Dijkstra.
    Parallel,
    /// Exhaustive loopless path enumeration.
    BruteForce,
    /// Yen's k-shortest paths followed by spectrum selection.
    YenKsp,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Parallel => "parallel",
            Algorithm::BruteForce => "brute-force",
            Algorithm::YenKsp => "yen-ksp",
        };
        f.write_str(s)
    }
}

/// Per-search resource diagnostics, reported to the stats collaborator.
#[derive(Copy, Clone, Debug, Default)]
pub struct SearchMetrics {
    /// Wall time of the search (filled in by the facade dispatch).
    pub wall: Duration,
    /// Peak number of labels (or stored paths, for the enumerating
    /// variants) held at any point.
    pub peak_labels: usize,
    /// Peak number of edges held in containers.
    pub peak_edges: usize,
    /// Peak number of unit-set members held in containers.
    pub peak_units: usize,
}

// ── Generic label-setting search ──────────────────────────────────────────────

/// Run the generic search for `d`, starting from the candidate range `cu`.
pub fn generic(
    g: &Graph,
    d: &Demand,
    cu: UnitRange,
    adaptive: AdaptiveUnits,
    max_cost: Option<f64>,
) -> (SearchMetrics, Option<SpectrumPath>) {
    let n = g.vertex_count();
    let mut p = Permanent::new(n);
    let mut t = Tentative::new(n);
    let creator = LabelCreator::new(g, d.ncu, adaptive, max_cost);
    let start = Label::start(cu, d.src);

    let mut peak = 0usize;
    dijkstra(g, &mut p, &mut t, start, &creator, d.dst, &mut peak);
    let path = trace(g, &p, d.dst, &start, d.ncu, adaptive);

    // One edge and one range per label.
    let metrics = SearchMetrics {
        wall: Duration::default(),
        peak_labels: peak,
        peak_edges: peak,
        peak_units: peak,
    };
    (metrics, path)
}

// ── Parallel filtered search ──────────────────────────────────────────────────

/// For each admissible unit count, try every slot of that width in `cu`
/// over the spectrum-filtered graph; the first width that yields any path
/// wins, and among its slots the cheapest (first-fit on ties).
pub fn parallel(
    g: &Graph,
    d: &Demand,
    cu: UnitRange,
    adaptive: AdaptiveUnits,
    max_cost: Option<f64>,
) -> (SearchMetrics, Option<SpectrumPath>) {
    let mut metrics = SearchMetrics {
        // Every scalar search holds a single candidate range.
        peak_units: 1,
        ..SearchMetrics::default()
    };

    for width in AdaptiveUnits::ncus(d.ncu) {
        let Some(reach) = adaptive.reach(d.ncu, width) else {
            continue;
        };
        let cap = match max_cost {
            Some(ml) => reach.min(ml),
            None => reach,
        };

        let mut best: Option<(f64, UnitRange, Vec<EdgeId>)> = None;
        let band = UnitSet::from(cu);
        for slot in band.slots(width) {
            let (peak, found) = shortest_path_filtered(
                g,
                d.src,
                d.dst,
                |e| g.unit_set(e).includes_range(slot),
                Some(cap),
            );
            metrics.peak_labels = metrics.peak_labels.max(peak);
            metrics.peak_edges = metrics.peak_edges.max(peak);

            if let Some((cost, path)) = found {
                // Strict `<` keeps the lowest-numbered slot on cost ties.
                if best.as_ref().is_none_or(|(bc, _, _)| cost < *bc) {
                    best = Some((cost, slot, path));
                }
            }
        }

        if let Some((_, slot, edges)) = best {
            return (metrics, Some(SpectrumPath { units: slot, edges }));
        }
    }

    (metrics, None)
}

// ── Brute force ───────────────────────────────────────────────────────────────

/// A queued partial path: its cost, the spectrum still available along it,
/// its edges, and the vertex it currently ends at.  The tail vertex is
/// stored because the starting entry has no edges to derive it from.
struct BruteEntry {
    cost: f64,
    su: UnitSet,
    edges: Vec<EdgeId>,
    tail: VertexId,
}

impl PartialEq for BruteEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BruteEntry {}

impl Ord for BruteEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.su.cmp(&other.su))
            .then_with(|| self.edges.cmp(&other.edges))
            .then_with(|| self.tail.cmp(&other.tail))
    }
}

impl PartialOrd for BruteEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Exhaustive search: pop partial paths cheapest-first, extend over every
/// edge to a vertex not yet on the path, carrying the running intersection
/// of free spectrum.
pub fn brute_force(
    g: &Graph,
    d: &Demand,
    cu: UnitRange,
    adaptive: AdaptiveUnits,
    max_cost: Option<f64>,
) -> (SearchMetrics, Option<SpectrumPath>) {
    let mut metrics = SearchMetrics::default();

    // Current container contents, tracked for the peaks.
    let mut costs = 0usize;
    let mut edges_held = 0usize;
    let mut units_held = 0usize;

    let mut q: BinaryHeap<Reverse<BruteEntry>> = BinaryHeap::new();

    let start = BruteEntry {
        cost: 0.0,
        su: UnitSet::from(cu),
        edges: Vec::new(),
        tail: d.src,
    };
    costs += 1;
    units_held += start.su.len();
    q.push(Reverse(start));
    metrics.peak_labels = metrics.peak_labels.max(costs);
    metrics.peak_units = metrics.peak_units.max(units_held);

    while let Some(Reverse(entry)) = q.pop() {
        costs -= 1;
        edges_held -= entry.edges.len();
        units_held -= entry.su.len();

        if entry.tail == d.dst {
            let width = adaptive
                .units(d.ncu, entry.cost)
                .expect("queued path beyond modulation reach");
            let units = select::first_fit_in_set(&entry.su, width);
            return (metrics, Some(SpectrumPath { units, edges: entry.edges }));
        }

        for e in g.out_edges(entry.tail) {
            let t = g.opposite(e, entry.tail);
            // No loops: skip vertices already on the path.
            if vertex_in_path(g, &entry.edges, t) {
                continue;
            }

            let cost = entry.cost + g.weight(e);
            if max_cost.is_some_and(|cap| cost > cap) {
                continue;
            }
            let Some(required) = adaptive.units(d.ncu, cost) else {
                continue;
            };

            let mut su = intersection(&entry.su, g.unit_set(e));
            su.remove_narrower_than(required);
            if su.is_empty() {
                continue;
            }

            let mut edges = entry.edges.clone();
            edges.push(e);

            costs += 1;
            edges_held += edges.len();
            units_held += su.len();
            q.push(Reverse(BruteEntry { cost, su, edges, tail: t }));

            metrics.peak_labels = metrics.peak_labels.max(costs);
            metrics.peak_edges = metrics.peak_edges.max(edges_held);
            metrics.peak_units = metrics.peak_units.max(units_held);
        }
    }

    (metrics, None)
}

/// `true` iff `v` is an endpoint of any edge of `path`.
fn vertex_in_path(g: &Graph, path: &[EdgeId], v: VertexId) -> bool {
    path.iter().any(|&e| {
        let (a, b) = g.endpoints(e);
        a == v || b == v
    })
}

// ── Yen-KSP + spectrum check ──────────────────────────────────────────────────

/// Enumerate loopless paths cheapest-first (capped at `k` if given) and
/// return the first whose spectrum admits the demand.
pub fn yen_ksp(
    g: &Graph,
    d: &Demand,
    cu: UnitRange,
    adaptive: AdaptiveUnits,
    k: Option<u32>,
    max_cost: Option<f64>,
) -> (SearchMetrics, Option<SpectrumPath>) {
    let mut metrics = SearchMetrics::default();

    let mut paths = KShortestPaths::new(g, d.src, d.dst, k);
    while let Some((cost, edges)) = paths.next() {
        metrics.peak_labels = metrics.peak_labels.max(paths.stored_paths());
        metrics.peak_edges = metrics.peak_edges.max(paths.stored_edges());

        if max_cost.is_some_and(|cap| cost > cap) {
            break;
        }
        // Paths arrive in ascending cost, so past the last reach bucket
        // nothing later can qualify either.
        let Some(width) = adaptive.units(d.ncu, cost) else {
            break;
        };

        let mut su = intersection(&path_unit_set(g, &edges), &UnitSet::from(cu));
        su.remove_narrower_than(width);
        if !su.is_empty() {
            metrics.peak_units = metrics.peak_units.max(su.len());
            let units = select::first_fit_in_set(&su, width);
            return (metrics, Some(SpectrumPath { units, edges }));
        }
    }

    (metrics, None)
}

/// The spectrum available along a whole path: the intersection of the free
/// sets of its edges.
fn path_unit_set(g: &Graph, path: &[EdgeId]) -> UnitSet {
    let mut iter = path.iter();
    let Some(&first) = iter.next() else {
        return UnitSet::new();
    };
    let mut su = g.unit_set(first).clone();
    for &e in iter {
        su = intersection(&su, g.unit_set(e));
    }
    su
}
