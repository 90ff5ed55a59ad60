//! CSV graph loader.
//!
//! # Locations file
//!
//! One row per vertex.  `Parking` is `1` for a valid parking location.
//!
//! ```csv
//! Location,Id,Code,Parking
//! Downtown,1,DT,0
//! Riverside Garage,2,RG,1
//! ```
//!
//! # Distances file
//!
//! One row per undirected road segment, endpoints given by code.  Each row
//! becomes a pair of directed edges linked as reverses.  `X` marks a segment
//! that cannot be travelled in that mode.
//!
//! ```csv
//! Location1,Location2,Driving,Walking
//! DT,RG,4,12
//! RG,PK,X,7
//! ```
//!
//! Fields are trimmed.  Ids and codes are each unique: a row repeating
//! either is logged and skipped.  A segment that names an unknown code fails
//! the load.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use cr_core::VertexId;

use crate::graph::CityGraph;
use crate::GraphError;

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Id")]
    id:       u32,
    #[serde(rename = "Code")]
    code:     String,
    #[serde(rename = "Parking")]
    parking:  u8,
}

#[derive(Deserialize)]
struct DistanceRecord {
    #[serde(rename = "Location1")]
    from:    String,
    #[serde(rename = "Location2")]
    to:      String,
    #[serde(rename = "Driving")]
    driving: String,
    #[serde(rename = "Walking")]
    walking: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a graph from a locations file and a distances file.
pub fn load_graph(locations: &Path, distances: &Path) -> Result<CityGraph, GraphError> {
    let loc = std::fs::File::open(locations).map_err(GraphError::Io)?;
    let dist = std::fs::File::open(distances).map_err(GraphError::Io)?;
    load_graph_readers(loc, dist)
}

/// Like [`load_graph`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded datasets.
pub fn load_graph_readers<L: Read, D: Read>(
    locations: L,
    distances: D,
) -> Result<CityGraph, GraphError> {
    let mut graph = CityGraph::new();
    let mut by_code: FxHashMap<String, VertexId> = FxHashMap::default();

    // ── Vertices ──────────────────────────────────────────────────────────
    for result in reader(locations).deserialize::<LocationRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        let id = VertexId(row.id);
        if let Some(&owner) = by_code.get(&row.code) {
            log::warn!("duplicate location code {} (id {id}, already id {owner}), row skipped", row.code);
            continue;
        }
        if !graph.add_vertex(id) {
            log::warn!("duplicate location id {id} ({}), row skipped", row.code);
            continue;
        }
        by_code.insert(row.code.clone(), id);
        graph.set_location(id, row.location, row.code, row.parking != 0);
    }

    // ── Segments ──────────────────────────────────────────────────────────
    let mut segments = 0usize;
    for result in reader(distances).deserialize::<DistanceRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        let from = code_to_id(&by_code, &row.from)?;
        let to = code_to_id(&by_code, &row.to)?;
        let driving = parse_weight(&row.driving)?;
        let walking = parse_weight(&row.walking)?;
        graph.add_bidirectional_edge(from, to, driving, walking);
        segments += 1;
    }

    log::info!(
        "loaded {} locations ({} parking), {segments} segments",
        graph.vertex_count(),
        graph.parking_vertices().len(),
    );
    Ok(graph)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source)
}

fn code_to_id(by_code: &FxHashMap<String, VertexId>, code: &str) -> Result<VertexId, GraphError> {
    by_code
        .get(code)
        .copied()
        .ok_or_else(|| GraphError::UnknownCode(code.to_owned()))
}

/// `X` → impassable, otherwise a non-negative integer.
fn parse_weight(s: &str) -> Result<Option<u32>, GraphError> {
    match s {
        "X" | "x" => Ok(None),
        n => n.parse::<u32>().map(Some).map_err(|_| {
            GraphError::Parse(format!("invalid travel time {n:?}: expected minutes or \"X\""))
        }),
    }
}
