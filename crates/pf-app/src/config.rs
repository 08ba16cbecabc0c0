//! Study configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Circuit compiled when nothing else is configured.
pub const DEFAULT_CIRCUIT: &str = r"C:\Program Files\OpenDSS\Examples\Manual\Example1.DSS";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineBackend {
    /// Recorded circuit results (`pf_engine::ReplayEngine`).
    #[default]
    Replay,
    /// A live engine linked into the process.
    Native,
}

/// Optional persistence targets. Nothing is written unless a target is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for `report.json` plus the CSV tables.
    pub csv_dir: Option<PathBuf>,
    /// Standalone HTML file with both charts.
    pub html: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    pub circuit: PathBuf,
    pub engine: EngineBackend,
    pub output: OutputConfig,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            circuit: PathBuf::from(DEFAULT_CIRCUIT),
            engine: EngineBackend::default(),
            output: OutputConfig::default(),
        }
    }
}

impl StudyConfig {
    /// Load a config from a YAML file. Missing fields take their defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_yaml::from_str(&content).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// `load` when a path is given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> AppResult<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
