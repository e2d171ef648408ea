//! `eon-sim` — discrete-event simulation of dynamic traffic on an elastic
//! optical network.
//!
//! # Event loop
//!
//! Continuous time, one priority queue, three event kinds:
//!
//! ```text
//! Arrival        → draw a demand, try to set it up, schedule the next
//!                  arrival (exponential inter-arrival) and — on success —
//!                  this connection's departure (exponential holding time)
//! Departure(id)  → tear the connection down, returning its spectrum
//! Sample         → hand instantaneous network metrics to the observer,
//!                  schedule the next sample
//! ```
//!
//! The graph is owned by the simulation and mutated only at connection
//! set-up and tear-down; a second demand always observes every side effect
//! of the first.  Runs are reproducible from the seed alone.
//!
//! # Modules
//!
//! | Module         | Contents                                         |
//! |----------------|--------------------------------------------------|
//! | [`event`]      | event kinds and the time-ordered queue           |
//! | [`traffic`]    | Poisson arrivals, holding times, demand drawing  |
//! | [`connection`] | one client's connection lifecycle                |
//! | [`observer`]   | callbacks for stats collection                   |
//! | [`sim`]        | the runner                                       |

pub mod connection;
pub mod error;
pub mod event;
pub mod observer;
pub mod sim;
pub mod traffic;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use connection::{Connection, ConnectionStats};
pub use error::{SimError, SimResult};
pub use event::{Event, EventKind, EventQueue};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, SimConfig};
pub use traffic::{Traffic, TrafficConfig, mean_arrival_for_load};
