//! Engine session trait.

use serde::{Deserialize, Serialize};

use crate::command::DssCommand;
use crate::cursor::LineCursor;
use crate::error::EngineResult;

/// One node of the solved circuit: its engine name (`"bus.terminal"`) and
/// voltage magnitude in per-unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeVoltage {
    pub name: String,
    pub vmag_pu: f64,
}

/// An explicit session with a power-flow engine.
///
/// Implementations own whatever connection the backend needs; callers hold the
/// handle for the lifetime of a study. The engine is driven through text commands
/// and queried read-only afterwards. Queries never change the solved state, so
/// reading results twice yields the same data.
pub trait PowerFlowEngine: LineCursor {
    /// Backend name (for logging).
    fn name(&self) -> &str;

    /// Send one command in the engine's scripting dialect.
    fn command(&mut self, command: &str) -> EngineResult<()>;

    /// Send a typed command.
    fn execute(&mut self, command: &DssCommand) -> EngineResult<()> {
        self.command(&command.to_string())
    }

    /// Whether the last solve reached a converged solution.
    fn converged(&self) -> EngineResult<bool>;

    /// Name of the active circuit.
    fn circuit_name(&self) -> EngineResult<String>;

    /// Every node of the active circuit with its per-unit voltage magnitude, in
    /// engine order. Names and magnitudes are fetched together.
    fn node_voltages(&self) -> EngineResult<Vec<NodeVoltage>>;
}
