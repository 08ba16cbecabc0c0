//! Recorded circuit results.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cursor::LineElement;
use crate::engine::NodeVoltage;
use crate::error::{EngineError, EngineResult};

/// Everything a study reads from a solved circuit.
///
/// ```yaml
/// circuit: example1
/// converged: true
/// nodes:
///   - { name: sourcebus.1, vmag_pu: 1.0 }
/// lines:
///   - { name: l1, phases: 3, currents_mag_ang: [10.0, 0.0, 10.0, -120.0, 10.0, 120.0] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitSnapshot {
    pub circuit: String,
    #[serde(default)]
    pub converged: bool,
    #[serde(default)]
    pub nodes: Vec<NodeVoltage>,
    #[serde(default)]
    pub lines: Vec<LineElement>,
}

impl CircuitSnapshot {
    /// Build a snapshot from the engine's parallel name/magnitude arrays.
    pub fn from_parts(
        circuit: impl Into<String>,
        converged: bool,
        node_names: Vec<String>,
        vmag_pu: Vec<f64>,
        lines: Vec<LineElement>,
    ) -> EngineResult<Self> {
        if node_names.len() != vmag_pu.len() {
            return Err(EngineError::MisalignedArrays {
                names: node_names.len(),
                values: vmag_pu.len(),
            });
        }

        let nodes = node_names
            .into_iter()
            .zip(vmag_pu)
            .map(|(name, vmag_pu)| NodeVoltage { name, vmag_pu })
            .collect();

        Ok(Self {
            circuit: circuit.into(),
            converged,
            nodes,
            lines,
        })
    }

    /// Load a snapshot from a YAML file.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| EngineError::CircuitRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::CircuitParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
