//! Sorted disjoint sets of contiguous unit ranges.

use std::fmt;

use crate::UnitRange;

/// An ordered set of pairwise disjoint, non-adjacent [`UnitRange`]s.
///
/// # Invariants
///
/// 1. Members are sorted ascending and separated by a strict gap: for
///    consecutive members `a`, `b`, always `a.max() < b.min()`.  A run that
///    would touch or overlap an existing member is merged on insert.
/// 2. No member is empty.
///
/// The derived ordering compares member sequences lexicographically, which
/// together with the `(min, max)` order of [`UnitRange`] keeps every sorted
/// container of sets in first-fit order.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitSet {
    ranges: Vec<UnitRange>,
}

impl UnitSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of member ranges (fragments), not units.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Total number of units over all members.
    pub fn count(&self) -> u32 {
        self.ranges.iter().map(|r| r.count()).sum()
    }

    /// Iterate the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &UnitRange> {
        self.ranges.iter()
    }

    /// The first (lowest-numbered) member, if any.
    pub fn first(&self) -> Option<UnitRange> {
        self.ranges.first().copied()
    }

    /// Insert `r`, merging it with every member it overlaps or touches.
    pub fn insert(&mut self, r: UnitRange) {
        if r.is_empty() {
            return;
        }
        // First member that ends at or after r starts — the merge window
        // opens here and covers every member starting no later than r ends.
        let i = self.ranges.partition_point(|m| (*m).max() < r.min());
        let mut merged = r;
        let mut j = i;
        while j < self.ranges.len() && self.ranges[j].min() <= merged.max() {
            let m = self.ranges[j];
            merged = UnitRange::new(merged.min().min(m.min()), merged.max().max(m.max()));
            j += 1;
        }
        self.ranges.splice(i..j, std::iter::once(merged));
    }

    /// Subtract `r`, splitting any member it cuts through.
    pub fn remove(&mut self, r: UnitRange) {
        if r.is_empty() {
            return;
        }
        let i = self.ranges.partition_point(|m| (*m).max() <= r.min());
        let mut residuals: Vec<UnitRange> = Vec::new();
        let mut j = i;
        while j < self.ranges.len() && self.ranges[j].min() < r.max() {
            let m = self.ranges[j];
            if m.min() < r.min() {
                residuals.push(UnitRange::new(m.min(), r.min()));
            }
            if r.max() < m.max() {
                residuals.push(UnitRange::new(r.max(), m.max()));
            }
            j += 1;
        }
        self.ranges.splice(i..j, residuals);
    }

    /// Drop every member narrower than `n` units.
    pub fn remove_narrower_than(&mut self, n: u32) {
        self.ranges.retain(|m| m.count() >= n);
    }

    /// `true` iff every member of `other` lies within some member of `self`.
    pub fn includes(&self, other: &UnitSet) -> bool {
        let mut i = 0;
        for y in &other.ranges {
            while i < self.ranges.len() && self.ranges[i].max() < (*y).max() {
                i += 1;
            }
            if i == self.ranges.len() || !self.ranges[i].includes(*y) {
                return false;
            }
        }
        true
    }

    /// `true` iff `r` lies within some member of `self`.
    pub fn includes_range(&self, r: UnitRange) -> bool {
        if r.is_empty() {
            return true;
        }
        let i = self.ranges.partition_point(|m| (*m).max() < r.max());
        i < self.ranges.len() && self.ranges[i].includes(r)
    }

    /// Enumerate, in ascending `min` order, every range of exactly `n`
    /// consecutive units that fits inside some member.
    ///
    /// A member of width `w ≥ n` contributes `w - n + 1` slots.
    pub fn slots(&self, n: u32) -> impl Iterator<Item = UnitRange> + '_ {
        self.ranges
            .iter()
            .filter(move |m| n > 0 && m.count() >= n)
            .flat_map(move |m| ((*m).min()..=(*m).max() - n).map(move |lo| UnitRange::new(lo, lo + n)))
    }
}

/// The largest set whose members are included in both `a` and `b`.
///
/// A linear two-pointer sweep over the two ordered member sequences; the
/// result has at most `a.len() + b.len()` members and satisfies both set
/// invariants.
pub fn intersection(a: &UnitSet, b: &UnitSet) -> UnitSet {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.ranges.len() && j < b.ranges.len() {
        let x = a.ranges[i];
        let y = b.ranges[j];
        let o = x.intersection(y);
        if !o.is_empty() {
            out.push(o);
        }
        // Advance whichever member ends first; the other may still overlap
        // the next member on this side.
        if x.max() <= y.max() {
            i += 1;
        } else {
            j += 1;
        }
    }
    UnitSet { ranges: out }
}

impl From<UnitRange> for UnitSet {
    fn from(r: UnitRange) -> Self {
        let mut set = UnitSet::new();
        set.insert(r);
        set
    }
}

impl FromIterator<UnitRange> for UnitSet {
    fn from_iter<I: IntoIterator<Item = UnitRange>>(iter: I) -> Self {
        let mut set = UnitSet::new();
        for r in iter {
            set.insert(r);
        }
        set
    }
}

impl fmt::Display for UnitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, r) in self.ranges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{r}")?;
        }
        write!(f, "}}")
    }
}
