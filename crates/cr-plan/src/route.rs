//! Planning results.
//!
//! # "No route" encoding
//!
//! An unreachable destination is a [`Route`] with no vertices and
//! `cost: None`.  A zero-cost route (source equals destination, or all
//! zero-weight edges) has `cost: Some(0)` and is distinct from "no route".

use std::cmp::Reverse;
use std::fmt;

use serde::Serialize;

use cr_core::VertexId;

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered vertex sequence and its total cost in minutes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Vertices from source to destination, both included.
    pub vertices: Vec<VertexId>,
    pub cost:     Option<u32>,
}

impl Route {
    /// The "no route" value.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build from engine output.  A path without a cost, or a cost without a
    /// path, collapses to [`Route::none`].
    pub fn from_parts(vertices: Vec<VertexId>, cost: Option<u32>) -> Self {
        match cost {
            Some(c) if !vertices.is_empty() => Self { vertices, cost: Some(c) },
            _ => Self::none(),
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices strictly between the endpoints.
    pub fn interior(&self) -> &[VertexId] {
        match self.vertices.len() {
            0..=2 => &[],
            n => &self.vertices[1..n - 1],
        }
    }

    /// Join `self` (ending at `w`) with `next` (starting at `w`), dropping
    /// the repeated `w`.  Either side being "no route", or a total cost past
    /// `u32::MAX`, gives "no route".
    pub fn concat(mut self, next: Route) -> Route {
        let (Some(a), Some(b)) = (self.cost, next.cost) else {
            return Route::none();
        };
        let Some(cost) = a.checked_add(b) else {
            log::warn!("joined route cost overflows u32");
            return Route::none();
        };
        if self.vertices.last() != next.vertices.first() {
            return Route::none();
        }
        self.vertices.extend(next.vertices.into_iter().skip(1));
        Route { vertices: self.vertices, cost: Some(cost) }
    }
}

// ── Plain driving ─────────────────────────────────────────────────────────────

/// Best driving route plus an alternative that shares no interior vertex
/// with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrivingPlan {
    pub best:        Route,
    pub alternative: Route,
}

// ── Park and walk ─────────────────────────────────────────────────────────────

/// One drive-then-walk itinerary through a parking vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkAndWalk {
    pub driving_route: Vec<VertexId>,
    pub parking:       VertexId,
    pub walking_route: Vec<VertexId>,
    pub driving_time:  u32,
    pub walking_time:  u32,
}

/// Candidate kept when nothing fits the walking budget.
pub type ApproximateSolution = ParkAndWalk;

impl ParkAndWalk {
    pub fn total_time(&self) -> u32 {
        self.driving_time.saturating_add(self.walking_time)
    }

    /// Ordering key: lower total first, then more walking first.
    pub(crate) fn rank(&self) -> (u32, Reverse<u32>) {
        (self.total_time(), Reverse(self.walking_time))
    }
}

/// Why a park-and-walk query was refused before any search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rejection {
    UnknownVertex(VertexId),
    ParkingEndpoint,
    AdjacentEndpoints,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::UnknownVertex(id) => write!(f, "Location {id} does not exist."),
            Rejection::ParkingEndpoint => {
                f.write_str("Source or destination cannot be parking nodes.")
            }
            Rejection::AdjacentEndpoints => {
                f.write_str("Source and destination cannot be adjacent nodes.")
            }
        }
    }
}

/// Result of a park-and-walk query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParkAndWalkOutcome {
    /// Cheapest itinerary whose walking leg fits the budget.
    Found(ParkAndWalk),
    /// The graph has no parking vertex.
    NoParking,
    /// No itinerary fits the budget; up to two over-budget suggestions,
    /// best first.
    Approximate {
        max_walk_time: u32,
        candidates:    Vec<ApproximateSolution>,
    },
    Rejected(Rejection),
}

// ── Dispatch ──────────────────────────────────────────────────────────────────

/// Mode-specific result of [`RoutePlanner::execute`](crate::RoutePlanner::execute).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PlanOutcome {
    Driving(DrivingPlan),
    Restricted(Route),
    DrivingWalking(ParkAndWalkOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanReport {
    pub source:      VertexId,
    pub destination: VertexId,
    pub outcome:     PlanOutcome,
}
