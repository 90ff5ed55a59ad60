//! Planner error type.

use thiserror::Error;

use cr_core::CoreError;

/// Errors produced by `cr-plan`.
///
/// Unreachable destinations and rejected park-and-walk queries are *not*
/// errors; they are ordinary planning outcomes.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("invalid plan configuration: {0}")]
    InvalidConfig(String),

    #[error("restriction parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
