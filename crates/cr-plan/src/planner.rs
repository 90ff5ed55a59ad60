//! Route planner: orchestrates engine runs for the three planning modes.
//!
//! | Entry point                  | Engine runs                               |
//! |------------------------------|-------------------------------------------|
//! | `plan_driving`               | 2 (best, then alternative)                |
//! | `plan_restricted_driving`    | 1, or 2 with a required waypoint          |
//! | `plan_driving_walking`       | 0 if rejected, else 1 + one per parking   |
//!
//! Every run overwrites the distance state on the graph, so each path is
//! reconstructed immediately after the run that produced it.

use cr_core::{Availability, TravelMode, VertexId};
use cr_graph::{cost, reconstruct_path, shortest_paths_from, CityGraph};

use crate::route::{
    ApproximateSolution, DrivingPlan, ParkAndWalk, ParkAndWalkOutcome, PlanOutcome, PlanReport,
    Rejection, Route,
};
use crate::{PlanConfig, PlanMode, PlanResult, Restrictions};

/// Over-budget candidates kept for the fallback message.
const MAX_APPROXIMATE: usize = 2;

/// Plans routes on one graph.  Holds the graph mutably for its lifetime.
pub struct RoutePlanner<'g> {
    graph:       &'g mut CityGraph,
    engine_runs: usize,
}

impl<'g> RoutePlanner<'g> {
    pub fn new(graph: &'g mut CityGraph) -> Self {
        Self { graph, engine_runs: 0 }
    }

    pub fn graph(&self) -> &CityGraph {
        self.graph
    }

    /// Shortest-path runs issued so far.
    pub fn engine_runs(&self) -> usize {
        self.engine_runs
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Run the planner entry point selected by `config`.
    ///
    /// Driving with any restriction set runs restricted driving; driving
    /// without restrictions runs the best-plus-alternative search.
    pub fn execute(&mut self, config: &PlanConfig) -> PlanResult<PlanReport> {
        config.validate()?;
        let (source, destination) = (config.source, config.destination);

        let outcome = match config.mode {
            PlanMode::Driving if config.restrictions.is_empty() => {
                PlanOutcome::Driving(self.plan_driving(source, destination))
            }
            PlanMode::Driving => PlanOutcome::Restricted(
                self.plan_restricted_driving(source, destination, &config.restrictions),
            ),
            PlanMode::DrivingWalking => {
                let max_walk_time = config.max_walk_time.unwrap_or_default();
                PlanOutcome::DrivingWalking(self.plan_driving_walking(
                    source,
                    destination,
                    max_walk_time,
                    &config.restrictions,
                ))
            }
        };

        Ok(PlanReport { source, destination, outcome })
    }

    // ── Plain driving ─────────────────────────────────────────────────────

    /// Best driving route, then an alternative found after blocking every
    /// interior vertex of the best one.
    ///
    /// The blocks stay on the graph afterwards.
    pub fn plan_driving(&mut self, source: VertexId, dest: VertexId) -> DrivingPlan {
        let best = self.leg(source, dest, TravelMode::Driving);

        for &id in best.interior() {
            self.graph.set_availability(id, Availability::Blocked);
        }
        let alternative = self.leg(source, dest, TravelMode::Driving);

        DrivingPlan { best, alternative }
    }

    // ── Restricted driving ────────────────────────────────────────────────

    /// Apply `restrictions`, then route through the graph's required
    /// waypoint if one is set.
    pub fn plan_restricted_driving(
        &mut self,
        source: VertexId,
        dest: VertexId,
        restrictions: &Restrictions,
    ) -> Route {
        restrictions.apply(self.graph);

        match self.graph.required_waypoint() {
            Some(waypoint) => {
                let tail = self.leg(waypoint, dest, TravelMode::Driving);
                let head = self.leg(source, waypoint, TravelMode::Driving);
                head.concat(tail)
            }
            None => self.leg(source, dest, TravelMode::Driving),
        }
    }

    // ── Driving + walking ─────────────────────────────────────────────────

    /// Drive from `source` to a parking vertex, then walk to `dest`.
    ///
    /// Picks the itinerary with the lowest total time whose walking leg is
    /// at most `max_walk_time`, preferring more walking on a tie.  When none
    /// fits, returns up to two over-budget candidates ranked the same way.
    pub fn plan_driving_walking(
        &mut self,
        source: VertexId,
        dest: VertexId,
        max_walk_time: u32,
        restrictions: &Restrictions,
    ) -> ParkAndWalkOutcome {
        if restrictions.include_vertex.is_some() {
            log::warn!("include vertex ignored in driving-walking mode");
        }
        restrictions.apply_avoidance(self.graph);

        // ── Validating ────────────────────────────────────────────────────
        if let Some(rejection) = self.check_endpoints(source, dest) {
            log::debug!("park-and-walk {source}->{dest} rejected: {rejection}");
            return ParkAndWalkOutcome::Rejected(rejection);
        }

        // ── Enumerating ───────────────────────────────────────────────────
        let parking = self.graph.parking_vertices();
        if parking.is_empty() {
            return ParkAndWalkOutcome::NoParking;
        }

        // One driving run serves every parking vertex.
        self.run(source, TravelMode::Driving);
        let driving_legs: Vec<(VertexId, Route)> = parking
            .iter()
            .map(|&p| {
                let route = Route::from_parts(
                    reconstruct_path(self.graph, source, p),
                    cost(self.graph, p),
                );
                (p, route)
            })
            .collect();

        let mut within = Vec::new();
        let mut over = Vec::new();
        for (p, drive) in driving_legs {
            if drive.is_none() {
                log::debug!("parking {p} unreachable by car from {source}");
                continue;
            }
            let walk = self.leg(p, dest, TravelMode::Walking);
            let (Some(driving_time), Some(walking_time)) = (drive.cost, walk.cost) else {
                log::debug!("{dest} unreachable on foot from parking {p}");
                continue;
            };
            let candidate = ParkAndWalk {
                driving_route: drive.vertices,
                parking: p,
                walking_route: walk.vertices,
                driving_time,
                walking_time,
            };
            if walking_time <= max_walk_time {
                within.push(candidate);
            } else {
                over.push(candidate);
            }
        }

        // ── Selecting ─────────────────────────────────────────────────────
        if let Some(best) = within.into_iter().min_by_key(ParkAndWalk::rank) {
            return ParkAndWalkOutcome::Found(best);
        }
        ParkAndWalkOutcome::Approximate { max_walk_time, candidates: best_approximate(over) }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn check_endpoints(&self, source: VertexId, dest: VertexId) -> Option<Rejection> {
        for id in [source, dest] {
            if !self.graph.contains(id) {
                return Some(Rejection::UnknownVertex(id));
            }
        }
        let is_parking = |id| self.graph.find_vertex(id).is_some_and(|v| v.parking);
        if is_parking(source) || is_parking(dest) {
            return Some(Rejection::ParkingEndpoint);
        }
        if self.graph.are_adjacent(source, dest) {
            return Some(Rejection::AdjacentEndpoints);
        }
        None
    }

    /// Run the engine from `source` in `mode`.  An unknown source is logged
    /// and leaves every vertex unreached.
    fn run(&mut self, source: VertexId, mode: TravelMode) {
        self.graph.set_mode(mode);
        self.engine_runs += 1;
        if let Err(e) = shortest_paths_from(self.graph, source) {
            log::warn!("{e}, treating as unreachable");
        }
        self.graph.set_mode(TravelMode::Driving);
    }

    /// One run plus reconstruction for a single destination.
    fn leg(&mut self, source: VertexId, dest: VertexId, mode: TravelMode) -> Route {
        self.run(source, mode);
        Route::from_parts(reconstruct_path(self.graph, source, dest), cost(self.graph, dest))
    }
}

/// Lowest-ranked `MAX_APPROXIMATE` candidates, best first.
fn best_approximate(mut over: Vec<ApproximateSolution>) -> Vec<ApproximateSolution> {
    over.sort_by_key(ParkAndWalk::rank);
    over.truncate(MAX_APPROXIMATE);
    over
}
