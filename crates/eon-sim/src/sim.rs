//! The simulation runner.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use eon_core::{ClientId, SimRng};
use eon_net::Graph;
use eon_routing::{Routing, SearchProbe};

use crate::connection::Connection;
use crate::error::{SimError, SimResult};
use crate::event::{EventKind, EventQueue};
use crate::observer::SimObserver;
use crate::traffic::Traffic;

// ── Configuration ─────────────────────────────────────────────────────────────

/// Top-level simulation parameters.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
    /// Simulation time limit; events past it are not processed.
    pub sim_time: f64,
    /// Instantaneous sampling starts here (lets transients die down before
    /// the statistics see them).
    pub kickoff: f64,
    /// Number of instantaneous measurements spread over the sampled span.
    pub samples: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 0, sim_time: 1.0, kickoff: 0.0, samples: 100 }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation: owns the network, the routing engine, the traffic model,
/// and the live connections.
///
/// Fields are `pub` where inspection after a run is useful (tests look at
/// the graph and the client table directly).
pub struct Sim {
    pub config: SimConfig,
    pub graph: Graph,
    pub routing: Routing,
    pub traffic: Traffic,
    /// Live connections by client ID.
    pub clients: FxHashMap<ClientId, Connection>,
    queue: EventQueue,
    rng: SimRng,
    now: f64,
    next_client: u32,
    sample_interval: f64,
}

impl Sim {
    pub fn new(
        config: SimConfig,
        graph: Graph,
        routing: Routing,
        traffic: Traffic,
    ) -> SimResult<Self> {
        if !(config.sim_time > 0.0) {
            return Err(SimError::Config(format!(
                "simulation time must be positive, got {}",
                config.sim_time
            )));
        }
        if !(0.0..config.sim_time).contains(&config.kickoff) {
            return Err(SimError::Config(format!(
                "kickoff {} outside [0, {})",
                config.kickoff, config.sim_time
            )));
        }
        if config.samples == 0 {
            return Err(SimError::Config("sample count must be positive".into()));
        }

        let mut queue = EventQueue::new();
        queue.push(0.0, EventKind::Arrival);
        queue.push(config.kickoff, EventKind::Sample);

        Ok(Self {
            sample_interval: (config.sim_time - config.kickoff) / config.samples as f64,
            rng: SimRng::new(config.seed),
            graph,
            routing,
            traffic,
            clients: FxHashMap::default(),
            queue,
            now: 0.0,
            next_client: 0,
            config,
        })
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    /// Capacity currently served: Σ over live connections of
    /// (path length · assigned units).
    pub fn capacity_served(&self) -> f64 {
        self.clients
            .values()
            .map(|c| {
                let s = c.stats();
                s.length * s.units as f64
            })
            .sum()
    }

    /// Run until the time limit.  Observer hooks fire as events process.
    pub fn run(&mut self, observer: &mut dyn SimObserver) -> SimResult<()> {
        while let Some(event) = self.queue.pop() {
            if event.time > self.config.sim_time {
                break;
            }
            self.now = event.time;
            match event.kind {
                EventKind::Arrival => self.arrival(observer)?,
                EventKind::Departure(id) => self.departure(id),
                EventKind::Sample => self.sample(observer),
            }
        }
        info!(
            time = self.now,
            live = self.clients.len(),
            "simulation finished"
        );
        observer.on_end(self.now);
        Ok(())
    }

    // ── Event handlers ────────────────────────────────────────────────────

    fn arrival(&mut self, observer: &mut dyn SimObserver) -> SimResult<()> {
        // The arrival process regenerates itself first, so a blocked client
        // never stalls the run.
        let dt = self.traffic.next_interarrival(&mut self.rng);
        self.queue.push(self.now + dt, EventKind::Arrival);

        let demand = self.traffic.next_demand(&self.graph, &mut self.rng);
        let mut conn = Connection::new();
        let mut probe = ObserverProbe { observer, time: self.now };
        let established = conn.establish(&mut self.graph, &self.routing, demand, &mut probe)?;

        if established {
            let stats = conn.stats();
            observer.on_established(self.now, true, Some(&stats));

            let id = ClientId(self.next_client);
            self.next_client += 1;
            self.clients.insert(id, conn);

            let holding = self.traffic.next_holding(&mut self.rng);
            self.queue.push(self.now + holding, EventKind::Departure(id));
            debug!(time = self.now, %id, %demand, "connection established");
        } else {
            observer.on_established(self.now, false, None);
            debug!(time = self.now, %demand, "demand blocked");
        }
        Ok(())
    }

    fn departure(&mut self, id: ClientId) {
        if let Some(mut conn) = self.clients.remove(&id) {
            conn.tear_down(&mut self.graph);
            debug!(time = self.now, %id, "connection torn down");
        }
    }

    fn sample(&mut self, observer: &mut dyn SimObserver) {
        observer.on_sample(self.now, &self.graph, self.clients.len(), self.capacity_served());
        self.queue.push(self.now + self.sample_interval, EventKind::Sample);
    }
}

/// Adapts the observer into the routing facade's diagnostics sink, stamping
/// each record with the event time.
struct ObserverProbe<'a> {
    observer: &'a mut dyn SimObserver,
    time: f64,
}

impl SearchProbe for ObserverProbe<'_> {
    fn record(&mut self, algorithm: eon_routing::Algorithm, metrics: &eon_routing::SearchMetrics) {
        self.observer.on_search(self.time, algorithm, metrics);
    }
}
