//! Result data types.

use pf_core::{Current, PerUnit, Phase, amps, per_unit};
use serde::{Deserialize, Serialize};

/// One row of the voltage table: a single engine node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeVoltageRecord {
    pub bus: String,
    pub voltage_pu: f64,
    pub phase: Phase,
}

impl NodeVoltageRecord {
    pub fn voltage(&self) -> PerUnit {
        per_unit(self.voltage_pu)
    }
}

/// One row of the current table: one phase of one line element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineCurrentRecord {
    pub line: String,
    pub current_a: f64,
    pub phase: Phase,
}

impl LineCurrentRecord {
    pub fn current(&self) -> Current {
        amps(self.current_a)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyManifest {
    /// Path handed to the engine's compile command.
    pub circuit_path: String,
    /// Circuit name reported by the engine.
    pub circuit: String,
    pub timestamp: String,
    pub converged: bool,
    pub voltage_records: usize,
    pub current_records: usize,
}

impl StudyManifest {
    /// Manifest stamped with the current UTC time.
    pub fn now(
        circuit_path: impl Into<String>,
        circuit: impl Into<String>,
        converged: bool,
        voltage_records: usize,
        current_records: usize,
    ) -> Self {
        Self {
            circuit_path: circuit_path.into(),
            circuit: circuit.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            converged,
            voltage_records,
            current_records,
        }
    }
}
