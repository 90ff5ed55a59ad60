//! cityroute — command-line front end for the city route planner.
//!
//! Loads a graph from the locations and distances CSV files, runs one
//! planning request, and prints the report.  Set `RUST_LOG=debug` to see
//! per-run engine diagnostics.
//!
//! ```text
//! cityroute plan   --locations L.csv --distances D.csv --mode driving --source 1 --destination 8
//! cityroute preset --locations L.csv --distances D.csv --config plan.json
//! cityroute batch  --locations L.csv --distances D.csv --input input.txt --output output.txt
//! cityroute dot    --locations L.csv --distances D.csv --name city
//! ```

mod batch;
mod report;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use cr_core::VertexId;
use cr_graph::{CityGraph, isolated_vertices, load_graph, write_dot};
use cr_plan::{
    PlanConfig, PlanMode, Restrictions, RoutePlanner, parse_segment_list, parse_vertex_list,
};

/// shortest driving and park-and-walk routes through a city graph
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct CityRouteApp {
    #[command(subcommand)]
    op: Operation,
}

#[derive(Args)]
struct GraphArgs {
    /// Locations CSV (`Location,Id,Code,Parking`).
    #[arg(long)]
    locations: PathBuf,
    /// Distances CSV (`Location1,Location2,Driving,Walking`).
    #[arg(long)]
    distances: PathBuf,
    /// Write the report here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Operation {
    /// plan a single route from command-line arguments
    Plan {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(long, default_value_t = PlanMode::Driving)]
        mode: PlanMode,
        #[arg(long)]
        source: VertexId,
        #[arg(long)]
        destination: VertexId,
        /// Walking budget in minutes (driving-walking only).
        #[arg(long)]
        max_walk_time: Option<u32>,
        /// Vertex ids to avoid, e.g. "5,8".
        #[arg(long, default_value = "")]
        avoid_nodes: String,
        /// Segments to avoid, e.g. "(1,2),(3,7)".
        #[arg(long, default_value = "")]
        avoid_segments: String,
        /// Vertex the route must pass through (driving only).
        #[arg(long)]
        include_node: Option<VertexId>,
    },
    /// plan a route described by a JSON plan configuration
    Preset {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(long)]
        config: PathBuf,
    },
    /// plan a route described by a Key:Value batch file
    Batch {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(long)]
        input: PathBuf,
    },
    /// export the graph as Graphviz
    Dot {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(long, default_value = "city")]
        name: String,
    },
}

impl Operation {
    fn run(self) -> Result<()> {
        match self {
            Operation::Plan {
                graph,
                mode,
                source,
                destination,
                max_walk_time,
                avoid_nodes,
                avoid_segments,
                include_node,
            } => {
                let restrictions = Restrictions {
                    avoid_vertices: parse_vertex_list(&avoid_nodes)?,
                    avoid_segments: parse_segment_list(&avoid_segments)?,
                    include_vertex: include_node,
                };
                let config = PlanConfig { mode, source, destination, max_walk_time, restrictions };
                plan(&graph, &config)
            }
            Operation::Preset { graph, config } => {
                let config = PlanConfig::from_json_path(&config)
                    .with_context(|| format!("invalid plan config {}", config.display()))?;
                plan(&graph, &config)
            }
            Operation::Batch { graph, input } => {
                let config = batch::read_batch_path(&input)?;
                plan(&graph, &config)
            }
            Operation::Dot { graph, name } => {
                let city = load(&graph)?;
                let isolated = isolated_vertices(&city);
                if !isolated.is_empty() {
                    log::info!("{} isolated vertices", isolated.len());
                }
                let mut out = open_output(graph.output.as_deref())?;
                write_dot(&city, &name, &mut out)?;
                out.flush()?;
                Ok(())
            }
        }
    }
}

fn load(args: &GraphArgs) -> Result<CityGraph> {
    load_graph(&args.locations, &args.distances).with_context(|| {
        format!(
            "cannot load graph from {} and {}",
            args.locations.display(),
            args.distances.display()
        )
    })
}

fn plan(args: &GraphArgs, config: &PlanConfig) -> Result<()> {
    let mut city = load(args)?;
    let mut planner = RoutePlanner::new(&mut city);
    let report = planner.execute(config)?;
    log::debug!("{} engine runs", planner.engine_runs());

    let mut out = open_output(args.output.as_deref())?;
    report::write_report(&report, &mut out)?;
    out.flush()?;
    Ok(())
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => {
            let file =
                File::create(p).with_context(|| format!("cannot create {}", p.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let app = CityRouteApp::parse();
    app.op.run()
}
