//! The stats collector: a [`SimObserver`] that accumulates a whole run.

use std::collections::BTreeMap;
use std::io::Write;

use eon_net::{Graph, mean_fragments, utilization};
use eon_routing::{Algorithm, SearchMetrics};
use eon_sim::{ConnectionStats, SimObserver};

use crate::accumulator::Accumulator;

/// One instantaneous measurement, kept for the CSV time series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleRow {
    pub time: f64,
    pub utilization: f64,
    pub active_connections: usize,
    pub capacity_served: f64,
    pub mean_fragments: f64,
}

/// Per-algorithm search diagnostics.
#[derive(Clone, Copy, Debug, Default)]
struct SearchStats {
    wall_secs: Accumulator,
    labels: Accumulator,
    edges: Accumulator,
    units: Accumulator,
}

/// Accumulates everything a run reports through the observer seam.
///
/// Every callback before `kickoff` is discarded — the warm-up transient is
/// not representative of the steady state the report describes.
pub struct StatsCollector {
    kickoff: f64,

    // Establishment outcomes.
    establishment: Accumulator,
    length: Accumulator,
    links: Accumulator,
    units: Accumulator,

    // Instantaneous samples.
    utilization: Accumulator,
    connections: Accumulator,
    capacity: Accumulator,
    fragments: Accumulator,
    samples: Vec<SampleRow>,

    // Per-algorithm search diagnostics.
    searches: BTreeMap<Algorithm, SearchStats>,
}

impl StatsCollector {
    pub fn new(kickoff: f64) -> Self {
        Self {
            kickoff,
            establishment: Accumulator::new(),
            length: Accumulator::new(),
            links: Accumulator::new(),
            units: Accumulator::new(),
            utilization: Accumulator::new(),
            connections: Accumulator::new(),
            capacity: Accumulator::new(),
            fragments: Accumulator::new(),
            samples: Vec::new(),
            searches: BTreeMap::new(),
        }
    }

    /// Probability that a demand was established, over the measured span.
    pub fn establishment_probability(&self) -> f64 {
        self.establishment.mean()
    }

    pub fn samples(&self) -> &[SampleRow] {
        &self.samples
    }

    /// Render the end-of-run report as `name value` lines.
    pub fn write_report(&self, population: &str, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "population {population}")?;
        writeln!(out, "utilization {}", self.utilization.mean())?;
        writeln!(out, "establishment-probability {}", self.establishment.mean())?;
        writeln!(out, "established-length {}", self.length.mean())?;
        writeln!(out, "established-links {}", self.links.mean())?;
        writeln!(out, "established-units {}", self.units.mean())?;
        writeln!(out, "active-connections {}", self.connections.mean())?;
        writeln!(out, "capacity-served {}", self.capacity.mean())?;
        writeln!(out, "fragments {}", self.fragments.mean())?;

        for (algorithm, s) in &self.searches {
            writeln!(out, "{algorithm}-searches {}", s.wall_secs.count())?;
            writeln!(out, "{algorithm}-wall-mean {}", s.wall_secs.mean())?;
            writeln!(out, "{algorithm}-wall-max {}", s.wall_secs.max())?;
            writeln!(out, "{algorithm}-labels-mean {}", s.labels.mean())?;
            writeln!(out, "{algorithm}-labels-max {}", s.labels.max())?;
            writeln!(out, "{algorithm}-edges-mean {}", s.edges.mean())?;
            writeln!(out, "{algorithm}-edges-max {}", s.edges.max())?;
            writeln!(out, "{algorithm}-units-mean {}", s.units.mean())?;
            writeln!(out, "{algorithm}-units-max {}", s.units.max())?;
        }
        Ok(())
    }
}

impl SimObserver for StatsCollector {
    fn on_established(&mut self, time: f64, success: bool, conn: Option<&ConnectionStats>) {
        if time < self.kickoff {
            return;
        }
        self.establishment.record(if success { 1.0 } else { 0.0 });
        if let Some(c) = conn {
            self.length.record(c.length);
            self.links.record(c.links as f64);
            self.units.record(c.units as f64);
        }
    }

    fn on_search(&mut self, time: f64, algorithm: Algorithm, metrics: &SearchMetrics) {
        if time < self.kickoff {
            return;
        }
        let s = self.searches.entry(algorithm).or_default();
        s.wall_secs.record(metrics.wall.as_secs_f64());
        s.labels.record(metrics.peak_labels as f64);
        s.edges.record(metrics.peak_edges as f64);
        s.units.record(metrics.peak_units as f64);
    }

    fn on_sample(&mut self, time: f64, graph: &Graph, active: usize, capacity_served: f64) {
        if time < self.kickoff {
            return;
        }
        let row = SampleRow {
            time,
            utilization: utilization(graph),
            active_connections: active,
            capacity_served,
            mean_fragments: mean_fragments(graph),
        };
        self.utilization.record(row.utilization);
        self.connections.record(active as f64);
        self.capacity.record(capacity_served);
        self.fragments.record(row.mean_fragments);
        self.samples.push(row);
    }
}
