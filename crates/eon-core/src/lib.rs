//! `eon-core` — foundational types for the `rust_eon` elastic optical
//! network simulator.
//!
//! This crate is a dependency of every other `eon-*` crate.  It
//! intentionally has no `eon-*` dependencies and minimal external ones
//! (only `rand`/`rand_distr` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                   |
//! |-----------|--------------------------------------------|
//! | [`ids`]   | `VertexId`, `EdgeId`, `ClientId`           |
//! | [`rng`]   | `SimRng` — deterministic simulation RNG    |
//! | [`error`] | `EonError`, `EonResult`                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EonError, EonResult};
pub use ids::{ClientId, EdgeId, VertexId};
pub use rng::SimRng;
