//! The traffic model: Poisson arrivals, exponential holding times,
//! Poisson-plus-one unit counts, uniform random endpoint pairs.

use rand_distr::{Exp, Poisson};

use eon_core::{SimRng, VertexId};
use eon_net::{Demand, Graph};

use crate::error::{SimError, SimResult};

/// Traffic parameters, all in simulation time units.
#[derive(Clone, Copy, Debug)]
pub struct TrafficConfig {
    /// Mean client inter-arrival time.
    pub mean_arrival: f64,
    /// Mean connection holding time.
    pub mean_holding: f64,
    /// Mean requested unit count (must be ≥ 1; the draw is Poisson
    /// shifted by one so a client never asks for zero units).
    pub mean_units: f64,
}

/// The mean inter-arrival time that offers `load` to a network: with mean
/// shortest-path hop count `mean_hops`, mean holding time `mht`, mean unit
/// count `mnu` and total capacity `capacity`,
///
///   mean_arrival = mean_hops · mht · mnu / (load · capacity)
pub fn mean_arrival_for_load(
    mean_hops: f64,
    mht: f64,
    mnu: f64,
    load: f64,
    capacity: f64,
) -> f64 {
    mean_hops * mht * mnu / (load * capacity)
}

/// Draws inter-arrival times, holding times, and demands.
pub struct Traffic {
    config: TrafficConfig,
    arrival: Exp<f64>,
    holding: Exp<f64>,
    /// `None` when `mean_units == 1`: the shifted Poisson has rate zero and
    /// every client asks for exactly one unit.
    units: Option<Poisson<f64>>,
}

impl Traffic {
    pub fn new(config: TrafficConfig) -> SimResult<Self> {
        if !(config.mean_arrival > 0.0) {
            return Err(SimError::Traffic(format!(
                "mean arrival time must be positive, got {}",
                config.mean_arrival
            )));
        }
        if !(config.mean_holding > 0.0) {
            return Err(SimError::Traffic(format!(
                "mean holding time must be positive, got {}",
                config.mean_holding
            )));
        }
        if !(config.mean_units >= 1.0) {
            return Err(SimError::Traffic(format!(
                "mean unit count must be at least 1, got {}",
                config.mean_units
            )));
        }

        let arrival = Exp::new(1.0 / config.mean_arrival)
            .map_err(|e| SimError::Traffic(e.to_string()))?;
        let holding = Exp::new(1.0 / config.mean_holding)
            .map_err(|e| SimError::Traffic(e.to_string()))?;
        let units = if config.mean_units > 1.0 {
            Some(Poisson::new(config.mean_units - 1.0).map_err(|e| SimError::Traffic(e.to_string()))?)
        } else {
            None
        };

        Ok(Self { config, arrival, holding, units })
    }

    pub fn config(&self) -> TrafficConfig {
        self.config
    }

    /// Time until the next client arrives.
    pub fn next_interarrival(&self, rng: &mut SimRng) -> f64 {
        rng.sample(&self.arrival)
    }

    /// How long the next connection holds.
    pub fn next_holding(&self, rng: &mut SimRng) -> f64 {
        rng.sample(&self.holding)
    }

    /// Draw a demand: distinct uniform endpoints, Poisson-plus-one units.
    pub fn next_demand(&self, g: &Graph, rng: &mut SimRng) -> Demand {
        let (src, dst) = rng.distinct_pair(g.vertex_count());
        let ncu = match &self.units {
            Some(dist) => rng.sample::<f64, _>(dist) as u32 + 1,
            None => 1,
        };
        Demand::new(VertexId(src as u32), VertexId(dst as u32), ncu)
    }
}
