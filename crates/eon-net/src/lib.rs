//! `eon-net` — the optical network model.
//!
//! # Data layout
//!
//! The network is an **undirected multigraph**: vertices are optical nodes,
//! edges are fiber links, and two nodes may be joined by any number of
//! parallel links.  Each edge carries three attributes:
//!
//! - `weight` — the link cost (typically its length),
//! - `nou`    — the nominal total number of spectrum units,
//! - `su`     — the [`UnitSet`](eon_spectrum::UnitSet) of currently free
//!   contiguous unit ranges.
//!
//! An [`EdgeId`](eon_core::EdgeId) is a *stable descriptor*: looking the
//! edge up from either endpoint yields the same ID, which is what lets the
//! routing core distinguish parallel links and trace paths back through
//! them.
//!
//! # Modules
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`graph`]    | `Graph`, `GraphBuilder`                             |
//! | [`demand`]   | `Demand` — (src, dst, requested units)              |
//! | [`dot`]      | Graphviz (DOT subset) loader                        |
//! | [`analysis`] | shortest-path survey, connectivity, load metrics    |

pub mod analysis;
pub mod demand;
pub mod dot;
pub mod error;
pub mod graph;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use analysis::{PathSurvey, is_connected, mean_fragments, survey_shortest_paths, total_capacity, utilization};
pub use demand::Demand;
pub use dot::{load_dot, parse_dot};
pub use error::{NetError, NetResult};
pub use graph::{Graph, GraphBuilder};
