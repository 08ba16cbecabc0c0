//! pf-results: tabular study results, console summary and persistence.

pub mod current;
pub mod export;
pub mod store;
pub mod summary;
pub mod types;
pub mod voltage;

pub use current::{CurrentTable, line_records};
pub use store::ReportStore;
pub use summary::reference_phase_table;
pub use types::*;
pub use voltage::VoltageTable;

use std::path::PathBuf;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error(transparent)]
    Core(#[from] pf_core::CoreError),

    #[error("Engine error: {0}")]
    Engine(#[from] pf_engine::EngineError),

    #[error("Invalid magnitude for '{entry}': {value}")]
    InvalidMagnitude { entry: String, value: f64 },

    #[error("Line '{line}' reports {phases} phases but only {len} current entries")]
    CurrentArrayTooShort {
        line: String,
        phases: usize,
        len: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Report not found in {dir}")]
    ReportNotFound { dir: PathBuf },
}
