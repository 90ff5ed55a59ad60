//! Plan configuration.
//!
//! A `PlanConfig` fully describes one planning request.  It can be built in
//! code, parsed from a batch file by the CLI, or loaded from JSON:
//!
//! ```json
//! {
//!   "mode": "driving-walking",
//!   "source": 1,
//!   "destination": 8,
//!   "max_walk_time": 30,
//!   "restrictions": { "avoid_vertices": [5], "avoid_segments": [[1, 2]] }
//! }
//! ```

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use cr_core::VertexId;

use crate::{PlanError, PlanResult, Restrictions};

/// Which planner entry point a request uses.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PlanMode {
    #[serde(rename = "driving")]
    Driving,
    #[serde(rename = "driving-walking")]
    DrivingWalking,
}

impl PlanMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PlanMode::Driving        => "driving",
            PlanMode::DrivingWalking => "driving-walking",
        }
    }
}

impl std::fmt::Display for PlanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanMode {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "driving" | "Driving" => Ok(PlanMode::Driving),
            "driving-walking" | "Driving-walking" => Ok(PlanMode::DrivingWalking),
            other => Err(PlanError::InvalidConfig(format!(
                "unknown mode {other:?}: expected \"driving\" or \"driving-walking\""
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    pub mode:          PlanMode,
    pub source:        VertexId,
    pub destination:   VertexId,
    /// Walking budget in minutes.  Required for `driving-walking`.
    #[serde(default)]
    pub max_walk_time: Option<u32>,
    #[serde(default)]
    pub restrictions:  Restrictions,
}

impl PlanConfig {
    pub fn driving(source: VertexId, destination: VertexId) -> Self {
        Self {
            mode: PlanMode::Driving,
            source,
            destination,
            max_walk_time: None,
            restrictions: Restrictions::default(),
        }
    }

    pub fn driving_walking(source: VertexId, destination: VertexId, max_walk_time: u32) -> Self {
        Self {
            mode: PlanMode::DrivingWalking,
            max_walk_time: Some(max_walk_time),
            ..Self::driving(source, destination)
        }
    }

    pub fn with_restrictions(mut self, restrictions: Restrictions) -> Self {
        self.restrictions = restrictions;
        self
    }

    pub fn from_json_path(path: &Path) -> PlanResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(file)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> PlanResult<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Check mode-specific requirements.
    pub fn validate(&self) -> PlanResult<()> {
        match self.mode {
            PlanMode::DrivingWalking if self.max_walk_time.is_none() => Err(
                PlanError::InvalidConfig("driving-walking needs max_walk_time".into()),
            ),
            PlanMode::DrivingWalking if self.restrictions.include_vertex.is_some() => Err(
                PlanError::InvalidConfig("driving-walking does not take include_vertex".into()),
            ),
            _ => Ok(()),
        }
    }
}
