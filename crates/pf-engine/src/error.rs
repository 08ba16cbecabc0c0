//! Engine errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised while commanding or querying the simulation engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine could not be reached or initialised.
    #[error("Engine unavailable: {message}")]
    Unavailable { message: String },

    /// The command verb is not part of the supported dialect.
    #[error("Unsupported command: {command}")]
    UnsupportedCommand { command: String },

    /// The verb is known but its arguments are not usable.
    #[error("Invalid command '{command}': {reason}")]
    InvalidCommand {
        command: String,
        reason: &'static str,
    },

    #[error("No active circuit, compile a circuit first")]
    NoActiveCircuit,

    #[error("Circuit '{circuit}' has not been solved")]
    NotSolved { circuit: String },

    #[error("No active line element")]
    NoActiveElement,

    #[error("Failed to read circuit definition: {path}")]
    CircuitRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse circuit definition {path}: {message}")]
    CircuitParse { path: PathBuf, message: String },

    /// Parallel node-name / magnitude arrays disagree in length.
    #[error("Misaligned result arrays: {names} node names vs {values} magnitudes")]
    MisalignedArrays { names: usize, values: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EngineError::Unavailable {
            message: "library not loaded".into(),
        };
        assert!(err.to_string().contains("library not loaded"));

        let err = EngineError::MisalignedArrays {
            names: 3,
            values: 2,
        };
        assert!(err.to_string().contains("3 node names vs 2"));
    }
}
