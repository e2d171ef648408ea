//! `eon-routing` — routing and spectrum assignment for elastic optical
//! networks.
//!
//! Given a [`Graph`](eon_net::Graph) and a [`Demand`](eon_net::Demand), the
//! crate finds a path together with one contiguous range of spectrum units
//! that is free on every link of the path, wide enough for the
//! distance-adaptive modulation rule, and of minimum total cost — breaking
//! remaining ties towards the lowest-numbered range (first-fit).
//!
//! # The search
//!
//! The workhorse is a label-setting search in the style of Dijkstra, except
//! that a label is a pair (cost, unit range) and the dominance relation
//! between labels is a **partial** order: a cheaper label and a wider label
//! are incomparable.  The classical one-entry-per-vertex table therefore
//! becomes a per-vertex Pareto frontier ([`Permanent`], [`Tentative`]), and
//! the priority queue must yield the globally cheapest tentative label
//! while a vertex holds many ([`Tentative`]'s cost index).
//!
//! Three independent algorithms re-derive the same answer for
//! cross-checking: per-slot filtered scalar Dijkstra, exhaustive path
//! enumeration, and Yen's k-shortest-paths followed by spectrum selection.
//! The facade ([`Routing`]) runs whichever are enabled and aborts the
//! process if any of them disagrees with the label search on the chosen
//! width or the path cost.
//!
//! # Modules
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`units`]     | distance-adaptive modulation table                   |
//! | [`label`]     | the search label and its partial order               |
//! | [`permanent`] | accepted-label Pareto frontiers                      |
//! | [`tentative`] | candidate-label frontiers + global cost index        |
//! | [`creator`]   | successor-label generation along an edge             |
//! | [`dijkstra`]  | the pop/relax driver                                 |
//! | [`trace`]     | path reconstruction from the permanent store         |
//! | [`standard`]  | scalar Dijkstra over a filtered graph                |
//! | [`yen`]       | loopless k-shortest-paths enumeration                |
//! | [`search`]    | the four search algorithms and their diagnostics     |
//! | [`routing`]   | the facade: configuration, set-up, tear-down         |

pub mod creator;
pub mod dijkstra;
pub mod error;
pub mod label;
pub mod permanent;
pub mod routing;
pub mod search;
pub mod select;
pub mod standard;
pub mod tentative;
pub mod trace;
pub mod units;
pub mod yen;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use creator::LabelCreator;
pub use error::{RoutingError, RoutingResult};
pub use label::Label;
pub use permanent::Permanent;
pub use routing::{NoopProbe, Routing, RoutingConfig, SearchProbe};
pub use search::{Algorithm, SearchMetrics, SpectrumPath};
pub use select::SpectrumSelection;
pub use tentative::Tentative;
pub use units::AdaptiveUnits;
