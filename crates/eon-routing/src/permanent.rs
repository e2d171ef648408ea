//! Accepted labels: one cost-sorted Pareto frontier per vertex.

use eon_core::VertexId;

use crate::label::Label;

/// The permanent store.  A vertex may hold many labels or none, so each
/// vertex owns a sequence; labels arrive through [`push`](Permanent::push)
/// in the order the driver pops them, which is ascending cost per vertex.
///
/// # Invariants
///
/// - No member of a frontier dominates another (antichain).
/// - Costs never decrease along a frontier.
///
/// Both hold because the driver only pushes labels that survived the
/// dominance checks against this store and popped at the global cost
/// minimum.
#[derive(Debug)]
pub struct Permanent {
    frontiers: Vec<Vec<Label>>,
    total: usize,
}

impl Permanent {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            frontiers: vec![Vec::new(); vertex_count],
            total: 0,
        }
    }

    /// Append `l` to its target's frontier.
    pub fn push(&mut self, l: Label) {
        debug_assert!(
            self.frontiers[l.target().index()]
                .last()
                .is_none_or(|prev| prev.cost() <= l.cost()),
            "permanent frontier costs must be non-decreasing"
        );
        self.total += 1;
        self.frontiers[l.target().index()].push(l);
    }

    /// The accepted labels at `v`, in arrival (ascending-cost) order.
    #[inline]
    pub fn frontier(&self, v: VertexId) -> &[Label] {
        &self.frontiers[v.index()]
    }

    /// Is some accepted label at `j`'s target better than or equal to `j`?
    ///
    /// Walks the frontier from the front, where dominating labels are most
    /// likely, and stops at the first member with strictly greater cost —
    /// beyond that point no member can dominate `j`.
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

    /// Total number of accepted labels across all vertices.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
