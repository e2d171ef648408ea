//! Observer callbacks for stats collection and progress reporting.

use eon_net::Graph;
use eon_routing::{Algorithm, SearchMetrics};

use crate::connection::ConnectionStats;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points of the
/// event loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The stats crate provides the real
/// collector; use [`NoopObserver`] when no measurement is wanted.
pub trait SimObserver {
    /// A demand was processed: `success` says whether it was established,
    /// and `conn` carries the figures of the new connection when it was.
    fn on_established(&mut self, _time: f64, _success: bool, _conn: Option<&ConnectionStats>) {}

    /// One routing algorithm finished a search.
    fn on_search(&mut self, _time: f64, _algorithm: Algorithm, _metrics: &SearchMetrics) {}

    /// An instantaneous measurement point: the network as it is right now,
    /// the number of live connections, and the capacity they serve.
    fn on_sample(&mut self, _time: f64, _graph: &Graph, _active: usize, _capacity_served: f64) {}

    /// The run is over.
    fn on_end(&mut self, _time: f64) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
