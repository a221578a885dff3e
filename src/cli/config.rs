//! Run configuration shared across CLI commands

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    pipeline::{EvaluationConfig, TrainingConfig},
    q_learning::AgentConfig,
};

/// Everything a run needs, loadable from a JSON file.
///
/// Missing sections and fields fall back to their defaults, so a file may
/// set only what it changes:
///
/// ```json
/// { "agent": { "exploration_rate": 0.2 }, "training": { "episodes": 50000 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub agent: AgentConfig,
    pub training: TrainingConfig,
    pub evaluation: EvaluationConfig,
}

impl RunConfig {
    /// Load a run configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open config file {}", path.display()),
            source,
        })?;
        let config: RunConfig = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.agent.validate()
    }
}
