//! Error types for the pf-app service layer.

use std::path::PathBuf;

use pf_engine::EngineError;

/// Application error type that wraps errors from the backend crates and provides
/// a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("Power flow did not converge for circuit '{circuit}'")]
    NonConvergence { circuit: String },

    #[error("Results error: {0}")]
    Results(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pf-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Unavailable { message } => AppError::EngineUnavailable(message),
            other => AppError::Engine(other.to_string()),
        }
    }
}

impl From<pf_results::ResultsError> for AppError {
    fn from(err: pf_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}

impl From<pf_charts::ChartError> for AppError {
    fn from(err: pf_charts::ChartError) -> Self {
        AppError::Chart(err.to_string())
    }
}
