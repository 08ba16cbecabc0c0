//! Replay backend: serves recorded circuit results through the engine interface.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::command::DssCommand;
use crate::cursor::{LineCursor, LineElement};
use crate::engine::{NodeVoltage, PowerFlowEngine};
use crate::error::{EngineError, EngineResult};
use crate::snapshot::CircuitSnapshot;

/// Engine backend that replays [`CircuitSnapshot`]s.
///
/// `compile "<path>"` looks the path up among registered circuits first and
/// otherwise loads it from disk as snapshot YAML. `solve` marks the active circuit
/// solved; the recorded `converged` flag then becomes visible. Results cannot be
/// read before a solve, mirroring a live engine that has nothing to report yet.
#[derive(Debug, Default)]
pub struct ReplayEngine {
    registry: HashMap<PathBuf, CircuitSnapshot>,
    active: Option<CircuitSnapshot>,
    solved: bool,
    line_index: Option<usize>,
}

impl ReplayEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an in-memory circuit under `path`.
    pub fn with_circuit(mut self, path: impl Into<PathBuf>, snapshot: CircuitSnapshot) -> Self {
        self.register(path, snapshot);
        self
    }

    pub fn register(&mut self, path: impl Into<PathBuf>, snapshot: CircuitSnapshot) {
        self.registry.insert(path.into(), snapshot);
    }

    fn compile(&mut self, path: &Path) -> EngineResult<()> {
        let snapshot = match self.registry.get(path) {
            Some(snapshot) => snapshot.clone(),
            None => CircuitSnapshot::load(path)?,
        };
        tracing::debug!(
            circuit = %snapshot.circuit,
            nodes = snapshot.nodes.len(),
            lines = snapshot.lines.len(),
            "circuit compiled"
        );
        self.active = Some(snapshot);
        self.solved = false;
        self.line_index = None;
        Ok(())
    }

    fn solve(&mut self) -> EngineResult<()> {
        let circuit = self.active()?;
        tracing::debug!(circuit = %circuit.circuit, converged = circuit.converged, "solved");
        self.solved = true;
        Ok(())
    }

    fn active(&self) -> EngineResult<&CircuitSnapshot> {
        self.active.as_ref().ok_or(EngineError::NoActiveCircuit)
    }

    fn solved_circuit(&self) -> EngineResult<&CircuitSnapshot> {
        let circuit = self.active()?;
        if !self.solved {
            return Err(EngineError::NotSolved {
                circuit: circuit.circuit.clone(),
            });
        }
        Ok(circuit)
    }

    fn ordinal(index: usize) -> i32 {
        i32::try_from(index + 1).unwrap_or(i32::MAX)
    }
}

impl LineCursor for ReplayEngine {
    fn first(&mut self) -> EngineResult<i32> {
        let count = self.active()?.lines.len();
        self.line_index = (count > 0).then_some(0);
        Ok(self.line_index.map_or(0, Self::ordinal))
    }

    fn next(&mut self) -> EngineResult<i32> {
        let count = self.active()?.lines.len();
        self.line_index = self.line_index.map(|i| i + 1).filter(|i| *i < count);
        Ok(self.line_index.map_or(0, Self::ordinal))
    }

    fn active_line(&self) -> EngineResult<LineElement> {
        let circuit = self.solved_circuit()?;
        self.line_index
            .and_then(|i| circuit.lines.get(i))
            .cloned()
            .ok_or(EngineError::NoActiveElement)
    }
}

impl PowerFlowEngine for ReplayEngine {
    fn name(&self) -> &str {
        "replay"
    }

    fn command(&mut self, command: &str) -> EngineResult<()> {
        tracing::debug!(command, "engine command");
        match DssCommand::parse(command)? {
            DssCommand::Compile { path } => self.compile(&path),
            DssCommand::Solve => self.solve(),
        }
    }

    fn converged(&self) -> EngineResult<bool> {
        let circuit = self.active()?;
        Ok(self.solved && circuit.converged)
    }

    fn circuit_name(&self) -> EngineResult<String> {
        Ok(self.active()?.circuit.clone())
    }

    fn node_voltages(&self) -> EngineResult<Vec<NodeVoltage>> {
        Ok(self.solved_circuit()?.nodes.clone())
    }
}
