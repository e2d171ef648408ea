//! The routing facade: configuration, set-up, tear-down, cross-checking.

use std::collections::BTreeSet;
use std::time::Instant;

use tracing::{debug, error};

use eon_net::{Demand, Graph};
use eon_spectrum::UnitRange;

use crate::error::{RoutingError, RoutingResult};
use crate::search::{self, Algorithm, SearchMetrics, SpectrumPath};
use crate::select::SpectrumSelection;
use crate::units::AdaptiveUnits;

// ── Diagnostics sink ──────────────────────────────────────────────────────────

/// Receives the per-search, per-algorithm diagnostics.
///
/// The stats collaborator implements this; [`NoopProbe`] is for callers
/// that don't measure.
pub trait SearchProbe {
    fn record(&mut self, algorithm: Algorithm, metrics: &SearchMetrics);
}

/// A [`SearchProbe`] that discards everything.
pub struct NoopProbe;

impl SearchProbe for NoopProbe {
    fn record(&mut self, _algorithm: Algorithm, _metrics: &SearchMetrics) {}
}

// ── Configuration ─────────────────────────────────────────────────────────────

/// Routing configuration, validated once by [`Routing::new`].
#[derive(Clone, Debug, Default)]
pub struct RoutingConfig {
    /// Spectrum selection policy.  Only `first` passes validation.
    pub selection: SpectrumSelection,
    /// Optional cap on the number of paths Yen's enumeration produces.
    pub k: Option<u32>,
    /// Optional hard cap on path cost, honoured by every algorithm.
    pub max_len: Option<f64>,
    /// Algorithms to run alongside the generic search and compare against
    /// it.
    pub cross_check: BTreeSet<Algorithm>,
}

// ── Routing ───────────────────────────────────────────────────────────────────

/// The routing engine for one network.
///
/// Holds the validated configuration and the modulation table; the graph is
/// passed into each call because the simulation owns it.  A successful
/// [`set_up`](Routing::set_up) commits by removing the assigned range from
/// every link of the path; [`tear_down`](Routing::tear_down) is its exact
/// inverse.  Between those two points a search never mutates the graph.
pub struct Routing {
    adaptive: AdaptiveUnits,
    config: RoutingConfig,
}

impl Routing {
    /// Validate `config` and build the engine.
    ///
    /// Fails fast on the spectrum selections that are declared but not
    /// implemented, and on a non-positive `k` — configuration mistakes
    /// should not wait for the first demand to surface.
    pub fn new(adaptive: AdaptiveUnits, config: RoutingConfig) -> RoutingResult<Self> {
        if config.selection != SpectrumSelection::First {
            return Err(RoutingError::UnimplementedSelection(config.selection));
        }
        if config.k == Some(0) {
            return Err(RoutingError::Config("K must be positive".into()));
        }
        let mut config = config;
        // Comparing the generic search against itself is pointless.
        config.cross_check.remove(&Algorithm::Dijkstra);
        Ok(Self { adaptive, config })
    }

    pub fn adaptive(&self) -> AdaptiveUnits {
        self.adaptive
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    // ── Set-up / tear-down ────────────────────────────────────────────────

    /// Route `d` and, on success, commit the assigned spectrum.
    ///
    /// The initial candidate range is `[0, m)` where `m` is the largest
    /// nominal unit count over the source's outgoing links — a conservative
    /// upper bound on what any single path could carry, so the starting
    /// label never over-constrains the search.
    ///
    /// `Ok(None)` means no feasible (path, range) exists; the graph is then
    /// unchanged.
    pub fn set_up(&self, g: &mut Graph, d: &Demand) -> RoutingResult<Option<SpectrumPath>> {
        self.set_up_probed(g, d, &mut NoopProbe)
    }

    /// [`set_up`](Routing::set_up) with a diagnostics sink.
    pub fn set_up_probed(
        &self,
        g: &mut Graph,
        d: &Demand,
        probe: &mut dyn SearchProbe,
    ) -> RoutingResult<Option<SpectrumPath>> {
        if !d.is_valid() {
            return Err(RoutingError::InvalidDemand(*d));
        }
        let nou = g.out_edges(d.src).map(|e| g.nou(e)).max().unwrap_or(0);
        self.set_up_from(g, d, UnitRange::new(0, nou), probe)
    }

    /// Route `d` starting from an explicit candidate range.
    pub fn set_up_from(
        &self,
        g: &mut Graph,
        d: &Demand,
        cu: UnitRange,
        probe: &mut dyn SearchProbe,
    ) -> RoutingResult<Option<SpectrumPath>> {
        if !d.is_valid() {
            return Err(RoutingError::InvalidDemand(*d));
        }

        let result = self.search(g, d, cu, Algorithm::Dijkstra, probe);

        for &alg in &self.config.cross_check {
            let other = self.search(g, d, cu, alg, probe);
            self.verify_agreement(g, d, alg, &result, &other);
        }

        if let Some(p) = &result {
            commit(g, p);
        }
        Ok(result)
    }

    /// Run one algorithm without touching the graph.
    pub fn search(
        &self,
        g: &Graph,
        d: &Demand,
        cu: UnitRange,
        algorithm: Algorithm,
        probe: &mut dyn SearchProbe,
    ) -> Option<SpectrumPath> {
        let started = Instant::now();
        let (mut metrics, result) = match algorithm {
            Algorithm::Dijkstra => search::generic(g, d, cu, self.adaptive, self.config.max_len),
            Algorithm::Parallel => search::parallel(g, d, cu, self.adaptive, self.config.max_len),
            Algorithm::BruteForce => {
                search::brute_force(g, d, cu, self.adaptive, self.config.max_len)
            }
            Algorithm::YenKsp => {
                search::yen_ksp(g, d, cu, self.adaptive, self.config.k, self.config.max_len)
            }
        };
        metrics.wall = started.elapsed();

        debug!(
            %algorithm,
            demand = %d,
            wall_us = metrics.wall.as_micros() as u64,
            peak_labels = metrics.peak_labels,
            found = result.is_some(),
            "search finished"
        );
        probe.record(algorithm, &metrics);
        result
    }

    /// Release the spectrum of `p` on every link of its path — the exact
    /// inverse of the commit done by a successful set-up.
    pub fn tear_down(g: &mut Graph, p: &SpectrumPath) {
        for &e in &p.edges {
            g.unit_set_mut(e).insert(p.units);
        }
    }

    // ── Cross-check ───────────────────────────────────────────────────────

    /// Abort unless `other` agrees with the generic result on existence,
    /// assigned width, and path cost.  Choosing different edges is fine.
    ///
    /// A disagreement means one of the algorithms is wrong; this is a bug
    /// detector, so it must not be survivable.
    fn verify_agreement(
        &self,
        g: &Graph,
        d: &Demand,
        algorithm: Algorithm,
        generic: &Option<SpectrumPath>,
        other: &Option<SpectrumPath>,
    ) {
        let agree = match (generic, other) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.units.count() == b.units.count()
                    && g.path_cost(&a.edges) == g.path_cost(&b.edges)
            }
            _ => false,
        };

        if !agree {
            error!(
                %algorithm,
                demand = %d,
                generic = %describe(g, generic),
                other = %describe(g, other),
                "cross-check mismatch"
            );
            eprintln!(
                "cross-check mismatch for {d}: dijkstra found {} but {algorithm} found {}",
                describe(g, generic),
                describe(g, other),
            );
            std::process::abort();
        }
    }
}

/// Remove the assigned range from every link of the path.
fn commit(g: &mut Graph, p: &SpectrumPath) {
    for &e in &p.edges {
        debug_assert!(g.unit_set(e).includes_range(p.units));
        g.unit_set_mut(e).remove(p.units);
    }
}

fn describe(g: &Graph, r: &Option<SpectrumPath>) -> String {
    match r {
        None => "nothing".into(),
        Some(p) => format!("{} units at cost {}", p.units.count(), g.path_cost(&p.edges)),
    }
}
