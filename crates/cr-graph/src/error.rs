//! Graph-subsystem error type.

use thiserror::Error;

use cr_core::VertexId;

/// Errors produced by `cr-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {0} not found in graph")]
    VertexNotFound(VertexId),

    #[error("unknown location code {0:?}")]
    UnknownCode(String),

    /// The predecessor chain for `dest` ended at `found` instead of at the
    /// `expected` source.  The engine was not re-run for that source after
    /// the last run or mutation.
    #[error("predecessor chain for {dest} ends at {found}, expected source {expected}")]
    StalePredecessors {
        expected: VertexId,
        dest:     VertexId,
        found:    VertexId,
    },

    #[error("graph parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
