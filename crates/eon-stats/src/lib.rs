//! `eon-stats` — measurement for simulation runs.
//!
//! [`StatsCollector`] plugs into the simulator's observer seam, accumulates
//! everything the run produces (establishment outcomes, connection figures,
//! per-algorithm search diagnostics, instantaneous network samples), and at
//! the end renders a `name value` report.  The sampled time series can also
//! be written to CSV for plotting.
//!
//! Measurements before the configured kickoff time are discarded, so warm-up
//! transients never pollute the averages.

pub mod accumulator;
pub mod collector;
pub mod csv_out;
pub mod error;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use accumulator::Accumulator;
pub use collector::{SampleRow, StatsCollector};
pub use csv_out::write_samples;
pub use error::{StatsError, StatsResult};
