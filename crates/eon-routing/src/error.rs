use thiserror::Error;

use eon_net::Demand;

use crate::select::SpectrumSelection;

#[derive(Debug, Error)]
pub enum RoutingError {
    /// The demand violates a precondition (`src == dst` or `ncu == 0`).
    #[error("invalid demand: {0}")]
    InvalidDemand(Demand),

    /// Only first-fit selection is implemented; the others are refused when
    /// the configuration is built, never per demand.
    #[error("spectrum selection `{0}` is not implemented")]
    UnimplementedSelection(SpectrumSelection),

    #[error("routing configuration error: {0}")]
    Config(String),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
