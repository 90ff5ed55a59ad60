//! Core error type.
//!
//! Downstream crates wrap this in their own enums where a parse failure can
//! surface (configuration, batch files).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid vertex id {0:?}")]
    InvalidVertexId(String),
}
