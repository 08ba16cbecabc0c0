//! Engine session creation.

use pf_engine::{PowerFlowEngine, ReplayEngine};

use crate::config::EngineBackend;
use crate::error::{AppError, AppResult};

/// Open an engine session for `backend`.
///
/// The session is owned by the caller and lives for one study.
pub fn open_engine(backend: EngineBackend) -> AppResult<Box<dyn PowerFlowEngine>> {
    match backend {
        EngineBackend::Replay => {
            tracing::debug!("opening replay engine");
            Ok(Box::new(ReplayEngine::new()))
        }
        EngineBackend::Native => Err(AppError::EngineUnavailable(
            "no native power-flow engine is linked into this build; use the replay backend"
                .to_string(),
        )),
    }
}
