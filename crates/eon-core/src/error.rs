//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `EonError` via `From` impls, or keep them separate and wrap `EonError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

use crate::VertexId;

/// The top-level error type for `eon-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EonError {
    #[error("vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `eon-*` crates.
pub type EonResult<T> = Result<T, EonError>;
