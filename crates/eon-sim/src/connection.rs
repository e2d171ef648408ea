//! One client's connection.

use eon_net::{Demand, Graph};
use eon_routing::{Routing, RoutingResult, SearchProbe, SpectrumPath};

/// The figures the stats collector wants about an established connection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConnectionStats {
    /// Path cost.
    pub length: f64,
    /// Number of links.
    pub links: usize,
    /// Assigned contiguous units.
    pub units: u32,
}

/// A connection: set up once, torn down once.  Between the two it pins its
/// assigned spectrum range on every link of its path.
#[derive(Debug, Default)]
pub struct Connection {
    demand: Option<Demand>,
    path: Option<SpectrumPath>,
    stats: Option<ConnectionStats>,
}

impl Connection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_established(&self) -> bool {
        self.path.is_some()
    }

    pub fn demand(&self) -> Option<&Demand> {
        self.demand.as_ref()
    }

    /// The stats of an established connection.
    ///
    /// # Panics
    /// Panics if the connection is not established.
    pub fn stats(&self) -> ConnectionStats {
        self.stats.expect("stats of an unestablished connection")
    }

    /// Try to establish the connection for `d`.  On failure the object (and
    /// the graph) is unchanged.
    ///
    /// # Panics
    /// Panics if the connection is already established.
    pub fn establish(
        &mut self,
        g: &mut Graph,
        routing: &Routing,
        d: Demand,
        probe: &mut dyn SearchProbe,
    ) -> RoutingResult<bool> {
        assert!(!self.is_established(), "establish on a live connection");

        if let Some(p) = routing.set_up_probed(g, &d, probe)? {
            self.stats = Some(ConnectionStats {
                length: g.path_cost(&p.edges),
                links: p.edges.len(),
                units: p.units.count(),
            });
            self.demand = Some(d);
            self.path = Some(p);
        }
        Ok(self.is_established())
    }

    /// Release the connection's spectrum.
    ///
    /// # Panics
    /// Panics if the connection is not established.
    pub fn tear_down(&mut self, g: &mut Graph) {
        let p = self.path.take().expect("tear down of an unestablished connection");
        Routing::tear_down(g, &p);
        self.demand = None;
        self.stats = None;
    }
}
