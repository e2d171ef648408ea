use thiserror::Error;

use eon_routing::RoutingError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("traffic configuration error: {0}")]
    Traffic(String),

    #[error(transparent)]
    Routing(#[from] RoutingError),
}

pub type SimResult<T> = Result<T, SimError>;
