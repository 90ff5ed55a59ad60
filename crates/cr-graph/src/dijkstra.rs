//! Mode-aware single-source shortest paths.
//!
//! [`shortest_paths_from`] runs Dijkstra's algorithm from one source to every
//! vertex and leaves the result on the graph: each vertex's distance and
//! predecessor edge.  [`reconstruct_path`] and [`cost`] read that state back
//! for any destination, so the planner can issue many destination queries
//! against one run.
//!
//! # Relaxation rule
//!
//! The graph's [`TravelMode`](cr_core::TravelMode) is read once per run and
//! selects the edge weight.  An edge is skipped when its weight in that mode
//! is impassable or when either endpoint is
//! [`Blocked`](cr_core::Availability::Blocked).  `Required` vertices are not
//! special here; the planner enforces them by chaining two runs.
//!
//! Every cost up to `u32::MAX` is representable.  A relaxation whose sum
//! would exceed it is skipped with a warning.

use cr_core::VertexId;

use crate::graph::CityGraph;
use crate::queue::MutablePriorityQueue;
use crate::{GraphError, GraphResult};

/// Compute shortest paths from `source` to every vertex, in the graph's
/// current mode.
///
/// Every vertex is reset to unreached before the search, including when
/// `source` does not exist (in which case the error is returned and all
/// vertices stay unreached).
pub fn shortest_paths_from(graph: &mut CityGraph, source: VertexId) -> GraphResult<()> {
    let mode = graph.mode();

    for v in graph.vertices.iter_mut().flatten() {
        v.dist = None;
        v.pred = None;
    }

    let src = graph.vertex_idx(source).ok_or(GraphError::VertexNotFound(source))?;
    if let Some(v) = graph.vertices[src.index()].as_mut() {
        v.dist = Some(0);
    }

    let mut queue = MutablePriorityQueue::with_capacity(graph.vertex_slots());
    queue.insert(src, 0);
    let mut settled = 0usize;

    while let Some((u, du)) = queue.extract_min() {
        settled += 1;

        // Blocked vertices are never relaxed from.
        let out_len = match graph.vertices[u.index()].as_ref() {
            Some(v) if !v.availability.is_blocked() => v.out.len(),
            _ => continue,
        };

        for i in 0..out_len {
            let Some(e) = graph.vertices[u.index()].as_ref().map(|v| v.out[i]) else {
                break;
            };
            let Some(edge) = graph.edges[e.index()].as_ref() else {
                continue;
            };
            let Some(w) = edge.weight(mode) else {
                continue;
            };
            let to = edge.dest;
            let Some(target) = graph.vertices[to.index()].as_mut() else {
                continue;
            };
            if target.availability.is_blocked() {
                continue;
            }

            let Some(candidate) = du.checked_add(w) else {
                log::warn!("{mode} cost from {source} to {} overflows u32, edge skipped", target.id);
                continue;
            };
            match target.dist {
                None => {
                    target.dist = Some(candidate);
                    target.pred = Some(e);
                    queue.insert(to, candidate);
                }
                Some(d) if candidate < d => {
                    target.dist = Some(candidate);
                    target.pred = Some(e);
                    queue.decrease_key(to, candidate);
                }
                Some(_) => {}
            }
        }
    }

    log::debug!("{mode} search from {source}: {settled} vertices settled");
    Ok(())
}

/// Vertex ids on the shortest path `source → dest` from the most recent run,
/// both endpoints included.
///
/// Empty when `dest` or `source` is missing or unreached.  A predecessor
/// chain that does not end at `source` (the last run was from a different
/// source, or a predecessor edge has since been removed) is logged as an
/// error and also yields an empty path.
pub fn reconstruct_path(graph: &CityGraph, source: VertexId, dest: VertexId) -> Vec<VertexId> {
    match try_reconstruct_path(graph, source, dest) {
        Ok(path) => path,
        Err(e) => {
            log::error!("{e}");
            Vec::new()
        }
    }
}

/// Like [`reconstruct_path`] but returns
/// [`GraphError::StalePredecessors`] instead of logging it.
pub fn try_reconstruct_path(
    graph: &CityGraph,
    source: VertexId,
    dest: VertexId,
) -> GraphResult<Vec<VertexId>> {
    let Some(mut cur) = graph.find_vertex(dest).filter(|v| v.distance().is_some()) else {
        return Ok(Vec::new());
    };
    if graph.find_vertex(source).and_then(|v| v.distance()).is_none() {
        return Ok(Vec::new());
    }

    let mut path = vec![cur.id];
    // A valid chain visits each vertex at most once.
    let max_steps = graph.vertex_count();
    while let Some(e) = cur.predecessor() {
        let Some(prev) = graph.edge(e).and_then(|edge| graph.vertex(edge.orig)) else {
            break;
        };
        cur = prev;
        path.push(cur.id);
        if path.len() > max_steps {
            break;
        }
    }
    path.reverse();

    if path[0] != source {
        return Err(GraphError::StalePredecessors { expected: source, dest, found: path[0] });
    }
    Ok(path)
}

/// Distance to `dest` from the most recent run, or `None` if unreached or
/// missing.
pub fn cost(graph: &CityGraph, dest: VertexId) -> Option<u32> {
    graph.find_vertex(dest).and_then(|v| v.distance())
}
