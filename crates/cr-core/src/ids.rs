//! Strongly typed identifier wrappers.
//!
//! Two families live here:
//!
//! - [`VertexId`] is the *external* identity of a city location, as it
//!   appears in the locations file and in user queries.  Values are
//!   arbitrary and need not be dense.
//! - [`VertexIdx`] and [`EdgeIdx`] are *arena* slots inside a graph.  They are
//!   dense, stable for the lifetime of the graph (removed slots become
//!   tombstones and are never reused), and meaningless outside the graph that
//!   issued them.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

// ── External ids ──────────────────────────────────────────────────────────────

/// Identity of a city location.  Unique within one graph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VertexId(pub u32);

impl fmt::Display for VertexId {
    /// Bare number, so routes print as `1,2,3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VertexId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(VertexId)
            .map_err(|_| CoreError::InvalidVertexId(s.to_owned()))
    }
}

// ── Arena indices ─────────────────────────────────────────────────────────────

/// Slot of a vertex in a graph's vertex arena.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct VertexIdx(pub u32);

/// Slot of a directed edge in a graph's edge arena.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct EdgeIdx(pub u32);

impl VertexIdx {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl EdgeIdx {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v#{}", self.0)
    }
}

impl fmt::Display for EdgeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e#{}", self.0)
    }
}
