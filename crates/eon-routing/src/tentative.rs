//! Candidate labels: per-vertex frontiers plus a global cost index.

use std::collections::BTreeSet;

use ordered_float::OrderedFloat;

use eon_core::VertexId;

use crate::label::Label;

/// The tentative store.
///
/// Each vertex owns an ordered set of candidate labels (the `(cost, units,
/// edge, target)` order, so the set front is the vertex's cheapest
/// candidate and ties already sit in first-fit order).  On top of the
/// per-vertex sets a process-wide index of `(front cost, vertex)` pairs
/// yields the globally cheapest tentative label in logarithmic time, with a
/// vertex→cost reverse map so a superseded front can be deleted from the
/// index.
///
/// # Invariants
///
/// - Per-vertex sets are antichains under label dominance (the driver
///   checks before pushing, and [`purge_worse`](Tentative::purge_worse)
///   evicts dominated members).
/// - The index holds exactly one entry per non-empty vertex set, carrying
///   that set's front cost; `fronts` mirrors the index.
#[derive(Debug)]
pub struct Tentative {
    frontiers: Vec<BTreeSet<Label>>,
    /// Global priority index: `(front cost, vertex)`, ordered.
    queue: BTreeSet<(OrderedFloat<f64>, VertexId)>,
    /// Reverse map: the cost under which each vertex currently sits in
    /// `queue`, if any.
    fronts: Vec<Option<f64>>,
    total: usize,
}

impl Tentative {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            frontiers: vec![BTreeSet::new(); vertex_count],
            queue: BTreeSet::new(),
            fronts: vec![None; vertex_count],
            total: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Total number of candidate labels across all vertices.
    pub fn len(&self) -> usize {
        self.total
    }

    /// The candidates at `v` in container order.
    #[inline]
    pub fn frontier(&self, v: VertexId) -> &BTreeSet<Label> {
        &self.frontiers[v.index()]
    }

    /// Insert `l`, updating the index if it becomes its vertex's front.
    ///
    /// The caller guarantees `l` is not already present (an equal label
    /// would have been caught by the dominance check).
    pub fn push(&mut self, l: Label) {
        let t = l.target();
        let c = l.cost();
        let frontier = &mut self.frontiers[t.index()];

        let becomes_front = frontier.first().is_none_or(|front| l < *front);
        let inserted = frontier.insert(l);
        debug_assert!(inserted, "pushed a duplicate tentative label");
        self.total += 1;

        if becomes_front {
            // Drop the superseded index entry for this vertex, if any.
            if let Some(old) = self.fronts[t.index()] {
                self.queue.remove(&(OrderedFloat(old), t));
            }
            self.queue.insert((OrderedFloat(c), t));
            self.fronts[t.index()] = Some(c);
        }
    }

    /// Extract the globally cheapest candidate.
    ///
    /// # Panics
    /// Panics if the store is empty.
    pub fn pop(&mut self) -> Label {
        let (cost, t) = self.queue.pop_first().expect("pop from an empty tentative store");
        let frontier = &mut self.frontiers[t.index()];
        let l = frontier.pop_first().expect("index entry for an empty frontier");
        debug_assert_eq!(l.cost(), cost.0);
        self.total -= 1;

        // Re-index the vertex under its next candidate, if it has one.
        match frontier.first() {
            Some(next) => {
                self.queue.insert((OrderedFloat(next.cost()), t));
                self.fronts[t.index()] = Some(next.cost());
            }
            None => self.fronts[t.index()] = None,
        }

        l
    }

    /// Is some candidate at `j`'s target better than or equal to `j`?
    ///
    /// Same early-exit walk as the permanent store: members are sorted by
    /// cost first, so once a member costs more than `j` nothing further can
    /// dominate it.
    pub fn has_better_or_equal(&self, j: &Label) -> bool {
        for i in self.frontier(j.target()) {
            if i.cost() > j.cost() {
                break;
            }
            if i.dominates(j) {
                return true;
            }
        }
        false
    }

    /// Evict every candidate at `j`'s target that `j` dominates.
    ///
    /// Walks the vertex set in *descending* cost order and stops at the
    /// first member cheaper than `j`: such a member, and everything below
    /// it, can only be better or incomparable.  The caller guarantees no
    /// member equals `j` (checked by `has_better_or_equal` beforehand), so
    /// dominance here is strictly "worse".  If the eviction removes the
    /// vertex's front, the index entry is repaired.
    pub fn purge_worse(&mut self, j: &Label) {
        let t = j.target();
        let frontier = &mut self.frontiers[t.index()];

        let victims: Vec<Label> = frontier
            .iter()
            .rev()
            .take_while(|i| i.cost() >= j.cost())
            .filter(|i| {
                debug_assert!(**i != *j, "equal labels must never reach purge_worse");
                j.dominates(i)
            })
            .copied()
            .collect();

        if victims.is_empty() {
            return;
        }

        for v in &victims {
            frontier.remove(v);
        }
        self.total -= victims.len();

        let new_front = frontier.first().map(Label::cost);
        if new_front != self.fronts[t.index()] {
            if let Some(old) = self.fronts[t.index()] {
                self.queue.remove(&(OrderedFloat(old), t));
            }
            if let Some(c) = new_front {
                self.queue.insert((OrderedFloat(c), t));
            }
            self.fronts[t.index()] = new_front;
        }
    }
}
