//! `cr-graph` — city graph store and shortest-path engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`graph`]    | `CityGraph` (vertex/edge arenas), `Vertex`, `Edge`          |
//! | [`queue`]    | `MutablePriorityQueue` (indexed min-heap with decrease-key) |
//! | [`dijkstra`] | `shortest_paths_from`, `reconstruct_path`, `cost`           |
//! | [`loader`]   | `load_graph`, `load_graph_readers` (CSV)                    |
//! | [`dot`]      | `isolated_vertices`, `write_dot` (Graphviz)                 |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                              |
//!
//! # Engine state
//!
//! Distances and predecessor edges are stored on the graph's vertices and
//! overwritten by every engine run.  All engine entry points take
//! `&mut CityGraph`, so runs on one graph are serialized by the borrow
//! checker.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `cr-core` types.        |

pub mod dijkstra;
pub mod dot;
pub mod error;
pub mod graph;
pub mod loader;
pub mod queue;


pub use dijkstra::{cost, reconstruct_path, shortest_paths_from, try_reconstruct_path};
pub use dot::{isolated_vertices, write_dot};
pub use error::{GraphError, GraphResult};
pub use graph::{CityGraph, Edge, Vertex};
pub use loader::{load_graph, load_graph_readers};
pub use queue::MutablePriorityQueue;
