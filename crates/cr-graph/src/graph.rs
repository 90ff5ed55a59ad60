//! City graph representation.
//!
//! # Data layout
//!
//! Vertices and edges live in two arenas owned by [`CityGraph`]:
//!
//! ```text
//! vertices: Vec<Option<Vertex>>   indexed by VertexIdx
//! edges:    Vec<Option<Edge>>     indexed by EdgeIdx
//! ```
//!
//! A vertex lists the `EdgeIdx`s of its outgoing and incoming edges; an edge
//! refers to its endpoints by `VertexIdx`.  Removal turns a slot into `None`
//! and never reuses it, so indices held elsewhere (predecessor edges from an
//! earlier engine run, reverse links) either still point at the same object
//! or visibly point at nothing.
//!
//! External [`VertexId`]s are resolved through a hash index.  Lookup by
//! location code is a linear scan.

use rustc_hash::FxHashMap;

use cr_core::{Availability, EdgeIdx, TravelMode, VertexId, VertexIdx};

// ── Vertex ────────────────────────────────────────────────────────────────────

/// A city location.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub id:           VertexId,
    /// Human-readable location name.
    pub location:     String,
    /// Short code, unique per graph.  Edges in the distances file refer to
    /// vertices by code.
    pub code:         String,
    /// Valid transfer point between a driving and a walking leg.
    pub parking:      bool,
    pub availability: Availability,

    // ── Engine scratch (overwritten by every run) ─────────────────────────
    pub(crate) dist:  Option<u32>,
    pub(crate) pred:  Option<EdgeIdx>,

    pub(crate) out:      Vec<EdgeIdx>,
    pub(crate) incoming: Vec<EdgeIdx>,
}

impl Vertex {
    fn new(id: VertexId) -> Self {
        Self {
            id,
            location:     String::new(),
            code:         String::new(),
            parking:      false,
            availability: Availability::Normal,
            dist:         None,
            pred:         None,
            out:          Vec::new(),
            incoming:     Vec::new(),
        }
    }

    /// Cost from the source of the most recent engine run, or `None` if that
    /// run did not reach this vertex.
    #[inline]
    pub fn distance(&self) -> Option<u32> {
        self.dist
    }

    /// Edge through which the most recent engine run reached this vertex.
    #[inline]
    pub fn predecessor(&self) -> Option<EdgeIdx> {
        self.pred
    }

    pub fn out_degree(&self) -> usize {
        self.out.len()
    }

    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }
}

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A directed road segment with one weight per travel mode.
///
/// A weight of `None` means the segment is impassable in that mode.
#[derive(Debug, Clone)]
pub struct Edge {
    pub orig:    VertexIdx,
    pub dest:    VertexIdx,
    /// Driving time in minutes.
    pub driving: Option<u32>,
    /// Walking time in minutes.
    pub walking: Option<u32>,
    /// Opposite direction, when the edge was added bidirectionally.
    pub reverse: Option<EdgeIdx>,
}

impl Edge {
    /// Weight consulted by the engine in `mode`.
    #[inline]
    pub fn weight(&self, mode: TravelMode) -> Option<u32> {
        match mode {
            TravelMode::Driving => self.driving,
            TravelMode::Walking => self.walking,
        }
    }
}

// ── CityGraph ─────────────────────────────────────────────────────────────────

/// Directed multigraph of city locations with dual driving/walking weights.
#[derive(Debug, Default, Clone)]
pub struct CityGraph {
    pub(crate) vertices: Vec<Option<Vertex>>,
    pub(crate) edges:    Vec<Option<Edge>>,
    index:               FxHashMap<VertexId, VertexIdx>,
    live_edges:          usize,
    mode:                TravelMode,
    required:            Option<VertexId>,
}

impl CityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of vertex slots ever allocated, including tombstones.  Upper
    /// bound for every `VertexIdx` this graph has issued.
    pub fn vertex_slots(&self) -> usize {
        self.vertices.len()
    }

    // ── Routing flags ─────────────────────────────────────────────────────

    /// Weight field the engine reads on its next run.
    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: TravelMode) {
        self.mode = mode;
    }

    /// Waypoint that restricted driving routes must pass through.
    pub fn required_waypoint(&self) -> Option<VertexId> {
        self.required
    }

    /// Set (or clear) the required waypoint.  The vertex is marked
    /// [`Availability::Required`]; returns `false` if it does not exist.
    pub fn set_required_waypoint(&mut self, id: Option<VertexId>) -> bool {
        match id {
            None => {
                self.required = None;
                true
            }
            Some(id) => {
                if !self.set_availability(id, Availability::Required) {
                    return false;
                }
                self.required = Some(id);
                true
            }
        }
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn vertex_idx(&self, id: VertexId) -> Option<VertexIdx> {
        self.index.get(&id).copied()
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn find_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertex_idx(id).and_then(|idx| self.vertex(idx))
    }

    /// Linear scan by location code.
    pub fn find_by_code(&self, code: &str) -> Option<&Vertex> {
        self.vertices().find(|v| v.code == code)
    }

    /// Vertex at an arena slot, `None` for tombstones and foreign indices.
    pub fn vertex(&self, idx: VertexIdx) -> Option<&Vertex> {
        self.vertices.get(idx.index()).and_then(Option::as_ref)
    }

    /// Edge at an arena slot, `None` once the edge has been removed.
    pub fn edge(&self, idx: EdgeIdx) -> Option<&Edge> {
        self.edges.get(idx.index()).and_then(Option::as_ref)
    }

    /// Live vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.iter().flatten()
    }

    /// Outgoing edges of `id`; empty if the vertex does not exist.
    pub fn out_edges(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.find_vertex(id)
            .map(|v| v.out.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(|&e| self.edge(e))
    }

    /// `true` if a directed edge `a → b` or `b → a` exists.
    pub fn are_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        let (Some(ai), Some(bi)) = (self.vertex_idx(a), self.vertex_idx(b)) else {
            return false;
        };
        self.out_edges(a).any(|e| e.dest == bi) || self.out_edges(b).any(|e| e.dest == ai)
    }

    /// Ids of all parking vertices, in insertion order.
    pub fn parking_vertices(&self) -> Vec<VertexId> {
        self.vertices().filter(|v| v.parking).map(|v| v.id).collect()
    }

    // ── Mutation: vertices ────────────────────────────────────────────────

    /// Add a vertex with default attributes.  Returns `false` (and changes
    /// nothing) if `id` is already present.
    pub fn add_vertex(&mut self, id: VertexId) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        let idx = VertexIdx(self.vertices.len() as u32);
        self.vertices.push(Some(Vertex::new(id)));
        self.index.insert(id, idx);
        true
    }

    /// Set the display and parking attributes of an existing vertex.
    pub fn set_location(
        &mut self,
        id: VertexId,
        location: impl Into<String>,
        code: impl Into<String>,
        parking: bool,
    ) -> bool {
        let Some(v) = self.vertex_mut(id) else {
            return false;
        };
        v.location = location.into();
        v.code = code.into();
        v.parking = parking;
        true
    }

    /// Returns `false` if the vertex does not exist.
    pub fn set_availability(&mut self, id: VertexId, availability: Availability) -> bool {
        match self.vertex_mut(id) {
            Some(v) => {
                v.availability = availability;
                true
            }
            None => false,
        }
    }

    /// Remove a vertex and every edge into or out of it.
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        let Some(idx) = self.index.remove(&id) else {
            return false;
        };
        let Some(v) = self.vertices[idx.index()].take() else {
            return false;
        };
        // Self-loops appear in both lists; `detach_edge` tolerates the repeat.
        for e in v.out.into_iter().chain(v.incoming) {
            self.detach_edge(e);
        }
        if self.required == Some(id) {
            self.required = None;
        }
        true
    }

    // ── Mutation: edges ───────────────────────────────────────────────────

    /// Add a directed edge.  Returns `None` if either endpoint is absent.
    pub fn add_edge(
        &mut self,
        source: VertexId,
        dest: VertexId,
        driving: Option<u32>,
        walking: Option<u32>,
    ) -> Option<EdgeIdx> {
        let from = self.vertex_idx(source)?;
        let to = self.vertex_idx(dest)?;
        Some(self.push_edge(from, to, driving, walking))
    }

    /// Add `source → dest` and `dest → source` with the same weights and link
    /// them as mutual reverses.
    pub fn add_bidirectional_edge(
        &mut self,
        source: VertexId,
        dest: VertexId,
        driving: Option<u32>,
        walking: Option<u32>,
    ) -> bool {
        let (Some(a), Some(b)) = (self.vertex_idx(source), self.vertex_idx(dest)) else {
            return false;
        };
        let e1 = self.push_edge(a, b, driving, walking);
        let e2 = self.push_edge(b, a, driving, walking);
        if let Some(edge) = self.edges[e1.index()].as_mut() {
            edge.reverse = Some(e2);
        }
        if let Some(edge) = self.edges[e2.index()].as_mut() {
            edge.reverse = Some(e1);
        }
        true
    }

    /// Remove every directed edge `source → dest` (all parallel copies).
    /// Returns `true` if at least one edge was removed.
    pub fn remove_edge(&mut self, source: VertexId, dest: VertexId) -> bool {
        let (Some(from), Some(to)) = (self.vertex_idx(source), self.vertex_idx(dest)) else {
            return false;
        };
        let matching: Vec<EdgeIdx> = self.vertices[from.index()]
            .as_ref()
            .map(|v| {
                v.out
                    .iter()
                    .copied()
                    .filter(|&e| self.edge(e).is_some_and(|edge| edge.dest == to))
                    .collect()
            })
            .unwrap_or_default();
        for &e in &matching {
            self.detach_edge(e);
        }
        !matching.is_empty()
    }

    /// Remove the undirected segment `a – b`: every edge in either direction.
    pub fn remove_segment(&mut self, a: VertexId, b: VertexId) -> bool {
        let forward = self.remove_edge(a, b);
        let backward = self.remove_edge(b, a);
        forward || backward
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        let idx = self.vertex_idx(id)?;
        self.vertices[idx.index()].as_mut()
    }

    fn push_edge(
        &mut self,
        from: VertexIdx,
        to: VertexIdx,
        driving: Option<u32>,
        walking: Option<u32>,
    ) -> EdgeIdx {
        let e = EdgeIdx(self.edges.len() as u32);
        self.edges.push(Some(Edge { orig: from, dest: to, driving, walking, reverse: None }));
        if let Some(v) = self.vertices[from.index()].as_mut() {
            v.out.push(e);
        }
        if let Some(v) = self.vertices[to.index()].as_mut() {
            v.incoming.push(e);
        }
        self.live_edges += 1;
        e
    }

    /// Tombstone an edge and unlink it from both endpoints and its reverse.
    fn detach_edge(&mut self, e: EdgeIdx) {
        let Some(edge) = self.edges[e.index()].take() else {
            return;
        };
        self.live_edges -= 1;
        if let Some(v) = self.vertices[edge.orig.index()].as_mut() {
            v.out.retain(|&x| x != e);
        }
        if let Some(v) = self.vertices[edge.dest.index()].as_mut() {
            v.incoming.retain(|&x| x != e);
        }
        if let Some(rev) = edge.reverse.and_then(|r| self.edges[r.index()].as_mut()) {
            rev.reverse = None;
        }
    }
}
