//! Undirected multigraph with per-link spectrum state.

use eon_core::{EdgeId, VertexId};
use eon_spectrum::{UnitRange, UnitSet};

// ── Edge record ───────────────────────────────────────────────────────────────

/// One fiber link.  Stored once; both endpoints' adjacency lists refer to it
/// by the same [`EdgeId`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Link {
    a: VertexId,
    b: VertexId,
    weight: f64,
    /// Nominal total number of spectrum units on the link.
    nou: u32,
    /// Currently free contiguous unit ranges.  Every member lies in
    /// `[0, nou)`.
    su: UnitSet,
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Undirected multigraph of optical nodes and fiber links.
///
/// Vertices are numbered densely from 0, so `VertexId` doubles as an index
/// into per-vertex arrays.  Do not construct directly; use
/// [`GraphBuilder`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    /// Node names as given by the topology source, indexed by `VertexId`.
    names: Vec<String>,
    /// Incident links of each vertex, in insertion order.
    adjacency: Vec<Vec<EdgeId>>,
    links: Vec<Link>,
}

impl Graph {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.names.len() as u32).map(VertexId)
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.links.len() as u32).map(EdgeId)
    }

    /// Iterator over the IDs of all links incident to `v`.
    #[inline]
    pub fn out_edges(&self, v: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.adjacency[v.index()].iter().copied()
    }

    /// Number of links incident to `v`.
    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacency[v.index()].len()
    }

    /// The two endpoints of `e`, in insertion order.
    #[inline]
    pub fn endpoints(&self, e: EdgeId) -> (VertexId, VertexId) {
        let l = &self.links[e.index()];
        (l.a, l.b)
    }

    /// The endpoint of `e` that is not `v`.
    ///
    /// This is what makes the descriptor direction-free: traversing `e`
    /// from either side names the same link, and the caller supplies the
    /// side it is coming from.
    #[inline]
    pub fn opposite(&self, e: EdgeId, v: VertexId) -> VertexId {
        let l = &self.links[e.index()];
        debug_assert!(v == l.a || v == l.b, "{v} is not an endpoint of {e}");
        if v == l.a { l.b } else { l.a }
    }

    // ── Link attributes ───────────────────────────────────────────────────

    #[inline]
    pub fn weight(&self, e: EdgeId) -> f64 {
        self.links[e.index()].weight
    }

    #[inline]
    pub fn nou(&self, e: EdgeId) -> u32 {
        self.links[e.index()].nou
    }

    #[inline]
    pub fn unit_set(&self, e: EdgeId) -> &UnitSet {
        &self.links[e.index()].su
    }

    /// Mutable access to a link's free-unit set.  Used by the routing
    /// facade to commit and release spectrum; the search itself never
    /// mutates the graph.
    #[inline]
    pub fn unit_set_mut(&mut self, e: EdgeId) -> &mut UnitSet {
        &mut self.links[e.index()].su
    }

    /// Set every link's nominal unit count to `units` and its free set to
    /// the full band `{[0, units)}`.
    pub fn set_units(&mut self, units: u32) {
        let full = UnitSet::from(UnitRange::new(0, units));
        for l in &mut self.links {
            l.nou = units;
            l.su = full.clone();
        }
    }

    // ── Names ─────────────────────────────────────────────────────────────

    pub fn vertex_name(&self, v: VertexId) -> &str {
        &self.names[v.index()]
    }

    /// Linear scan; topology files are small and this is never on a hot
    /// path.
    pub fn vertex_by_name(&self, name: &str) -> Option<VertexId> {
        self.names.iter().position(|n| n == name).map(|i| VertexId(i as u32))
    }

    /// Total path cost — the sum of the weights of `edges`.
    pub fn path_cost(&self, edges: &[EdgeId]) -> f64 {
        edges.iter().map(|&e| self.weight(e)).sum()
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use eon_net::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// let a = b.add_vertex("a");
/// let c = b.add_vertex("c");
/// b.add_link(a, c, 100.0);
/// let g = b.build();
/// assert_eq!(g.vertex_count(), 2);
/// assert_eq!(g.edge_count(), 1);
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its `VertexId` (sequential from 0).
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        let id = VertexId(self.graph.names.len() as u32);
        self.graph.names.push(name.into());
        self.graph.adjacency.push(Vec::new());
        id
    }

    /// Add an undirected link between `a` and `b` with the given weight.
    ///
    /// Parallel links between the same endpoints are permitted; each call
    /// creates a distinct edge.  The link starts with no spectrum
    /// (`nou == 0`, empty free set); call [`Graph::set_units`] or
    /// [`set_link_units`](Self::set_link_units) afterwards.
    ///
    /// # Panics
    /// Panics if the weight is negative or the endpoints coincide.
    pub fn add_link(&mut self, a: VertexId, b: VertexId, weight: f64) -> EdgeId {
        assert!(weight >= 0.0, "negative link weight {weight}");
        assert!(a != b, "self-loop at {a}");
        let id = EdgeId(self.graph.links.len() as u32);
        self.graph.links.push(Link {
            a,
            b,
            weight,
            nou: 0,
            su: UnitSet::new(),
        });
        self.graph.adjacency[a.index()].push(id);
        self.graph.adjacency[b.index()].push(id);
        id
    }

    /// Give one link its own unit count and free set — used by tests that
    /// need per-link spectra rather than the uniform [`Graph::set_units`].
    pub fn set_link_units(&mut self, e: EdgeId, nou: u32, su: UnitSet) {
        let l = &mut self.graph.links[e.index()];
        debug_assert!(su.iter().all(|r| (*r).max() <= nou));
        l.nou = nou;
        l.su = su;
    }

    pub fn build(self) -> Graph {
        self.graph
    }
}
