//! Graphviz export and connectivity diagnostics.

use std::io::{self, Write};

use cr_core::VertexId;

use crate::graph::CityGraph;

/// Vertices with no edge in or out.
pub fn isolated_vertices(graph: &CityGraph) -> Vec<VertexId> {
    graph
        .vertices()
        .filter(|v| v.out_degree() == 0 && v.in_degree() == 0)
        .map(|v| v.id)
        .collect()
}

/// Write `graph` as a Graphviz digraph named `name`.
///
/// Every directed edge is one `a -> b` line.  Isolated vertices are written
/// as white self-loops so they still appear in the rendering.
pub fn write_dot<W: Write>(graph: &CityGraph, name: &str, mut out: W) -> io::Result<()> {
    writeln!(out, "digraph {name} {{")?;
    writeln!(out, "label     = \"Graph: {name}\";")?;
    writeln!(out, "labelloc  = top;")?;
    writeln!(out, "labeljust = left;")?;
    writeln!(out, "fontname  = calibri;")?;
    writeln!(out, "fontsize  = 16;")?;
    writeln!(out)?;

    for v in graph.vertices() {
        if v.out_degree() == 0 && v.in_degree() == 0 {
            writeln!(out, "  {0} -> {0} [color = \"white\"];", v.id)?;
            continue;
        }
        for e in graph.out_edges(v.id) {
            if let Some(dest) = graph.vertex(e.dest) {
                writeln!(out, "  {} -> {};", v.id, dest.id)?;
            }
        }
    }

    writeln!(out, "}}")?;
    out.flush()
}
