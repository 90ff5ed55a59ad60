//! Text output for planning results.
//!
//! Every report opens with `Source:` and `Destination:` lines, followed by
//! mode-specific `Key:Value` lines.  A route renders as its ids joined by
//! commas with the cost in parentheses (`1,2,3(10)`), or `None`.

use std::io::{self, Write};

use cr_core::VertexId;
use cr_plan::{DrivingPlan, ParkAndWalk, ParkAndWalkOutcome, PlanOutcome, PlanReport, Route};

pub fn write_report<W: Write>(report: &PlanReport, mut out: W) -> io::Result<()> {
    writeln!(out, "Source:{}", report.source)?;
    writeln!(out, "Destination:{}", report.destination)?;

    match &report.outcome {
        PlanOutcome::Driving(plan) => write_driving(plan, &mut out),
        PlanOutcome::Restricted(route) => {
            writeln!(out, "RestrictedDrivingRoute:{}", route_text(route))
        }
        PlanOutcome::DrivingWalking(outcome) => write_park_and_walk(outcome, &mut out),
    }
}

fn write_driving<W: Write>(plan: &DrivingPlan, out: &mut W) -> io::Result<()> {
    writeln!(out, "BestDrivingRoute:{}", route_text(&plan.best))?;
    writeln!(out, "AlternativeDrivingRoute:{}", route_text(&plan.alternative))
}

fn write_park_and_walk<W: Write>(outcome: &ParkAndWalkOutcome, out: &mut W) -> io::Result<()> {
    match outcome {
        ParkAndWalkOutcome::Found(found) => write_itinerary(found, "", out),
        ParkAndWalkOutcome::NoParking => {
            write_empty_itinerary(out)?;
            writeln!(out, "Message:No parking nodes available.")
        }
        ParkAndWalkOutcome::Approximate { max_walk_time, candidates } => {
            write_empty_itinerary(out)?;
            writeln!(
                out,
                "Message:No possible route with max. walking time of {max_walk_time} minutes."
            )?;
            for (i, candidate) in candidates.iter().enumerate() {
                write_itinerary(candidate, &(i + 1).to_string(), out)?;
            }
            Ok(())
        }
        ParkAndWalkOutcome::Rejected(reason) => writeln!(out, "Message:{reason}"),
    }
}

/// Four itinerary lines, each key suffixed with `suffix`.
fn write_itinerary<W: Write>(p: &ParkAndWalk, suffix: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "DrivingRoute{suffix}:{}", path_text(&p.driving_route, p.driving_time))?;
    writeln!(out, "ParkingNode{suffix}:{}", p.parking)?;
    writeln!(out, "WalkingRoute{suffix}:{}", path_text(&p.walking_route, p.walking_time))?;
    writeln!(out, "TotalTime{suffix}:{}", p.total_time())
}

fn write_empty_itinerary<W: Write>(out: &mut W) -> io::Result<()> {
    for key in ["DrivingRoute", "ParkingNode", "WalkingRoute", "TotalTime"] {
        writeln!(out, "{key}:")?;
    }
    Ok(())
}

pub fn route_text(route: &Route) -> String {
    match route.cost {
        Some(cost) if !route.is_none() => path_text(&route.vertices, cost),
        _ => "None".to_owned(),
    }
}

fn path_text(vertices: &[VertexId], cost: u32) -> String {
    let ids: Vec<String> = vertices.iter().map(VertexId::to_string).collect();
    format!("{}({cost})", ids.join(","))
}
