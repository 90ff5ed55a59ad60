//! Route restrictions and their text forms.
//!
//! | Field             | Text form        | Effect on the graph                   |
//! |-------------------|------------------|---------------------------------------|
//! | `avoid_vertices`  | `5,8`            | Vertex marked `Blocked`               |
//! | `avoid_segments`  | `(1,2),(3,7)`    | Every edge `a → b` and `b → a` removed |
//! | `include_vertex`  | `4`              | Graph's required waypoint             |
//!
//! Ids that do not exist in the graph are logged and skipped; the remaining
//! restrictions still apply.

use serde::{Deserialize, Serialize};

use cr_core::{Availability, VertexId};
use cr_graph::CityGraph;

use crate::{PlanError, PlanResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restrictions {
    #[serde(default)]
    pub avoid_vertices: Vec<VertexId>,
    #[serde(default)]
    pub avoid_segments: Vec<(VertexId, VertexId)>,
    #[serde(default)]
    pub include_vertex: Option<VertexId>,
}

impl Restrictions {
    pub fn is_empty(&self) -> bool {
        self.avoid_vertices.is_empty()
            && self.avoid_segments.is_empty()
            && self.include_vertex.is_none()
    }

    /// Apply all three kinds of restriction.
    pub fn apply(&self, graph: &mut CityGraph) {
        self.apply_avoidance(graph);
        if let Some(id) = self.include_vertex {
            if !graph.set_required_waypoint(Some(id)) {
                log::warn!("include vertex {id} not in graph, ignored");
            }
        }
    }

    /// Apply blocked vertices and removed segments only.
    pub fn apply_avoidance(&self, graph: &mut CityGraph) {
        for &id in &self.avoid_vertices {
            if !graph.set_availability(id, Availability::Blocked) {
                log::warn!("avoid vertex {id} not in graph, ignored");
            }
        }
        for &(a, b) in &self.avoid_segments {
            if !graph.remove_segment(a, b) {
                log::warn!("avoid segment ({a},{b}) not in graph, ignored");
            }
        }
    }
}

// ── Text parsers ──────────────────────────────────────────────────────────────

/// Parse a vertex list such as `5,8` or `5 8`.  Blank input is an empty list.
pub fn parse_vertex_list(s: &str) -> PlanResult<Vec<VertexId>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map(|tok| tok.parse::<VertexId>().map_err(PlanError::from))
        .collect()
}

/// Parse a segment list such as `(1,2),(3,7)`.  Blank input is an empty list.
pub fn parse_segment_list(s: &str) -> PlanResult<Vec<(VertexId, VertexId)>> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    let mut rest = compact.as_str();
    let mut segments = Vec::new();

    while !rest.is_empty() {
        let body = rest
            .strip_prefix('(')
            .ok_or_else(|| PlanError::Parse(format!("expected '(' at {rest:?}")))?;
        let close = body
            .find(')')
            .ok_or_else(|| PlanError::Parse(format!("unclosed segment in {s:?}")))?;
        let (a, b) = body[..close]
            .split_once(',')
            .ok_or_else(|| PlanError::Parse(format!("segment {:?} needs two ids", &body[..close])))?;
        segments.push((a.parse::<VertexId>()?, b.parse::<VertexId>()?));

        rest = &body[close + 1..];
        rest = rest.strip_prefix(',').unwrap_or(rest);
    }
    Ok(segments)
}
