//! Yen's k-shortest-paths enumeration.
//!
//! Produces loopless paths in ascending cost order, lazily: each `next()`
//! call spurs off the most recently accepted path and pops the cheapest
//! candidate.  Spectrum is not consulted here — the caller filters the
//! enumerated paths.

use std::collections::{BTreeSet, HashSet};

use ordered_float::OrderedFloat;

use eon_core::{EdgeId, VertexId};
use eon_net::Graph;

use crate::standard::shortest_path_filtered;

/// Iterator over the shortest paths from `src` to `dst`, cheapest first.
pub(crate) struct KShortestPaths<'a> {
    g: &'a Graph,
    src: VertexId,
    dst: VertexId,
    /// Optional cap on how many paths to produce.
    k: Option<u32>,
    yielded: u32,
    /// Accepted paths, in the order produced.
    a: Vec<(f64, Vec<EdgeId>)>,
    /// Candidate paths not yet accepted.
    b: BTreeSet<(OrderedFloat<f64>, Vec<EdgeId>)>,
    exhausted: bool,
}

impl<'a> KShortestPaths<'a> {
    pub fn new(g: &'a Graph, src: VertexId, dst: VertexId, k: Option<u32>) -> Self {
        Self {
            g,
            src,
            dst,
            k,
            yielded: 0,
            a: Vec::new(),
            b: BTreeSet::new(),
            exhausted: false,
        }
    }

    /// Paths currently held (accepted + candidates), for diagnostics.
    pub fn stored_paths(&self) -> usize {
        self.a.len() + self.b.len()
    }

    /// Edges currently held across all stored paths, for diagnostics.
    pub fn stored_edges(&self) -> usize {
        self.a.iter().map(|(_, p)| p.len()).sum::<usize>()
            + self.b.iter().map(|(_, p)| p.len()).sum::<usize>()
    }

    /// The vertices visited by `path` starting at `src`, in order.
    fn path_vertices(&self, path: &[EdgeId]) -> Vec<VertexId> {
        let mut vs = Vec::with_capacity(path.len() + 1);
        let mut cur = self.src;
        vs.push(cur);
        for &e in path {
            cur = self.g.opposite(e, cur);
            vs.push(cur);
        }
        vs
    }

    /// Generate spur candidates off the most recently accepted path.
    fn spur(&mut self) {
        let (_, prev) = self.a.last().cloned().expect("spur before the first path");
        let vertices = self.path_vertices(&prev);

        for i in 0..prev.len() {
            let spur_vertex = vertices[i];
            let root = &prev[..i];
            let root_cost: f64 = root.iter().map(|&e| self.g.weight(e)).sum();

            // Edges that would recreate an already accepted path sharing
            // this root.
            let mut banned_edges: HashSet<EdgeId> = HashSet::new();
            for (_, p) in &self.a {
                if p.len() > i && p[..i] == *root {
                    banned_edges.insert(p[i]);
                }
            }

            // Root vertices (before the spur vertex) keep the result
            // loopless.
            let banned_vertices: HashSet<VertexId> = vertices[..i].iter().copied().collect();

            let admit = |e: EdgeId| {
                if banned_edges.contains(&e) {
                    return false;
                }
                let (x, y) = self.g.endpoints(e);
                !banned_vertices.contains(&x) && !banned_vertices.contains(&y)
            };

            let (_, spur_path) = shortest_path_filtered(self.g, spur_vertex, self.dst, admit, None);
            if let Some((spur_cost, sp)) = spur_path {
                let mut full = root.to_vec();
                full.extend(sp);
                self.b.insert((OrderedFloat(root_cost + spur_cost), full));
            }
        }
    }
}

impl Iterator for KShortestPaths<'_> {
    type Item = (f64, Vec<EdgeId>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted || self.k.is_some_and(|k| self.yielded >= k) {
            return None;
        }

        let produced = if self.a.is_empty() {
            let (_, r) = shortest_path_filtered(self.g, self.src, self.dst, |_| true, None);
            r
        } else {
            self.spur();
            self.b.pop_first().map(|(c, p)| (c.0, p))
        };

        match produced {
            Some((cost, path)) => {
                self.a.push((cost, path.clone()));
                self.yielded += 1;
                Some((cost, path))
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}
