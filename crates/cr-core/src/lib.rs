//! `cr-core` — foundational types for the `cityroute` workspace.
//!
//! This crate is a dependency of every other `cr-*` crate.  It has no `cr-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module           | Contents                                             |
//! |------------------|------------------------------------------------------|
//! | [`ids`]          | `VertexId` (external), `VertexIdx`, `EdgeIdx` (arena) |
//! | [`mode`]         | `TravelMode` enum                                    |
//! | [`availability`] | `Availability` (Blocked / Normal / Required)         |
//! | [`error`]        | `CoreError`                                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `VertexId`.              |

pub mod availability;
pub mod error;
pub mod ids;
pub mod mode;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use availability::Availability;
pub use error::CoreError;
pub use ids::{EdgeIdx, VertexId, VertexIdx};
pub use mode::TravelMode;
