//! `cr-plan` — route planning over a [`CityGraph`](cr_graph::CityGraph).
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`planner`]      | `RoutePlanner` (driving, restricted, park-and-walk)        |
//! | [`route`]        | `Route`, `DrivingPlan`, `ParkAndWalk`, outcomes            |
//! | [`restrictions`] | `Restrictions` and their text parsers                      |
//! | [`config`]       | `PlanConfig`, `PlanMode`                                   |
//! | [`error`]        | `PlanError`, `PlanResult<T>`                               |
//!
//! # Mutation model
//!
//! Planning applies restrictions (blocked vertices, removed segments, a
//! required waypoint) directly to the graph and never rolls them back.  Load
//! a fresh graph for each independent scenario.

pub mod config;
pub mod error;
pub mod planner;
pub mod restrictions;
pub mod route;


pub use config::{PlanConfig, PlanMode};
pub use error::{PlanError, PlanResult};
pub use planner::RoutePlanner;
pub use restrictions::{parse_segment_list, parse_vertex_list, Restrictions};
pub use route::{
    ApproximateSolution, DrivingPlan, ParkAndWalk, ParkAndWalkOutcome, PlanOutcome, PlanReport,
    Rejection, Route,
};
