//! Batch-file input.
//!
//! A batch file is a list of `Key:Value` lines:
//!
//! ```text
//! Mode:driving-walking
//! Source:8
//! Destination:5
//! MaxWalkTime:18
//! AvoidNodes:
//! AvoidSegments:(1,2),(3,7)
//! ```
//!
//! Keys may come in any order.  Blank values mean "not given".

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};

use cr_core::VertexId;
use cr_plan::{PlanConfig, PlanMode, Restrictions, parse_segment_list, parse_vertex_list};

pub fn read_batch_path(path: &Path) -> Result<PlanConfig> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("cannot open batch file {}", path.display()))?;
    read_batch(std::io::BufReader::new(file))
}

pub fn read_batch<R: BufRead>(reader: R) -> Result<PlanConfig> {
    let mut mode = None;
    let mut source = None;
    let mut destination = None;
    let mut max_walk_time = None;
    let mut restrictions = Restrictions::default();

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| anyhow!("line {}: expected Key:Value, got {line:?}", n + 1))?;
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        match key.trim() {
            "Mode" => mode = Some(value.parse::<PlanMode>()?),
            "Source" => source = Some(parse_id(value, "Source")?),
            "Destination" => destination = Some(parse_id(value, "Destination")?),
            "MaxWalkTime" => {
                max_walk_time = Some(
                    value
                        .parse::<u32>()
                        .with_context(|| format!("MaxWalkTime {value:?} is not a number"))?,
                );
            }
            "AvoidNodes" => restrictions.avoid_vertices = parse_vertex_list(value)?,
            "AvoidSegments" => restrictions.avoid_segments = parse_segment_list(value)?,
            "IncludeNode" => restrictions.include_vertex = Some(parse_id(value, "IncludeNode")?),
            other => log::warn!("unknown batch key {other:?} ignored"),
        }
    }

    let mode = mode.context("batch file has no Mode line")?;
    let source = source.context("batch file has no Source line")?;
    let destination = destination.context("batch file has no Destination line")?;

    if mode == PlanMode::DrivingWalking && restrictions.include_vertex.take().is_some() {
        log::warn!("IncludeNode ignored in driving-walking mode");
    }

    let config = PlanConfig { mode, source, destination, max_walk_time, restrictions };
    config.validate()?;
    Ok(config)
}

fn parse_id(value: &str, key: &str) -> Result<VertexId> {
    if value.contains(',') {
        bail!("{key} takes a single id, got {value:?}");
    }
    Ok(value.parse::<VertexId>()?)
}
