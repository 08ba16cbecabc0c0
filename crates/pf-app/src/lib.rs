//! Shared application service layer for the power-flow result viewer.
//!
//! This crate provides a unified interface for both CLI and GUI frontends,
//! centralizing configuration, engine selection, the study pipeline
//! (compile, solve, convergence check, extraction) and output persistence.

pub mod config;
pub mod engine_service;
pub mod error;
pub mod study_service;

// Re-export key types for convenience
pub use config::{DEFAULT_CIRCUIT, EngineBackend, OutputConfig, StudyConfig};
pub use engine_service::open_engine;
pub use error::{AppError, AppResult};
pub use study_service::{
    PersistedOutputs, StudyOutcome, StudyResults, extract_currents, extract_voltages,
    persist_outputs, run_configured_study, run_study,
};
