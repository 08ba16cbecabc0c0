//! Study pipeline: compile, solve, convergence check, extraction, persistence.

use std::path::{Path, PathBuf};

use pf_charts::{ChartSpec, current_profile, html, voltage_profile};
use pf_engine::{DssCommand, LineCursor, Lines, PowerFlowEngine};
use pf_results::store::StudyReport;
use pf_results::{
    CurrentTable, ReportStore, StudyManifest, VoltageTable, reference_phase_table,
};

use crate::config::{OutputConfig, StudyConfig};
use crate::engine_service::open_engine;
use crate::error::{AppError, AppResult};

pub const CONVERGED_MESSAGE: &str = "El flujo de potencia converge";
pub const NOT_CONVERGED_MESSAGE: &str = "La simulación NO convergió.";

/// Tables extracted from a converged solve.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyResults {
    pub circuit_path: PathBuf,
    pub circuit: String,
    pub voltages: VoltageTable,
    pub currents: CurrentTable,
}

impl StudyResults {
    /// Reference-phase console table.
    pub fn reference_summary(&self) -> String {
        reference_phase_table(&self.voltages)
    }

    /// Voltage profile followed by current profile.
    pub fn charts(&self) -> Vec<ChartSpec> {
        vec![
            voltage_profile(&self.voltages),
            current_profile(&self.currents),
        ]
    }

    pub fn report(&self) -> StudyReport {
        StudyReport {
            manifest: StudyManifest::now(
                self.circuit_path.display().to_string(),
                self.circuit.clone(),
                true,
                self.voltages.len(),
                self.currents.len(),
            ),
            voltages: self.voltages.clone(),
            currents: self.currents.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StudyOutcome {
    Converged(StudyResults),
    /// The solve finished without a converged solution; nothing was extracted.
    NotConverged {
        circuit_path: PathBuf,
        circuit: String,
    },
}

impl StudyOutcome {
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged(_))
    }

    pub fn results(&self) -> Option<&StudyResults> {
        match self {
            Self::Converged(results) => Some(results),
            Self::NotConverged { .. } => None,
        }
    }

    pub fn into_results(self) -> AppResult<StudyResults> {
        match self {
            Self::Converged(results) => Ok(results),
            Self::NotConverged { circuit, .. } => Err(AppError::NonConvergence { circuit }),
        }
    }

    /// Console text: convergence notice plus, when converged, the reference-phase table.
    pub fn console_report(&self) -> String {
        match self {
            Self::Converged(results) => {
                format!("{}\n{}", CONVERGED_MESSAGE, results.reference_summary())
            }
            Self::NotConverged { .. } => format!("{}\n", NOT_CONVERGED_MESSAGE),
        }
    }

    /// Charts to render; none without a converged solution.
    pub fn charts(&self) -> Vec<ChartSpec> {
        self.results().map(StudyResults::charts).unwrap_or_default()
    }
}

/// Compile `circuit_path`, solve, and extract both tables if the solve converged.
///
/// Non-convergence is not an error: it is logged and reported as
/// [`StudyOutcome::NotConverged`], and no results are read from the engine.
pub fn run_study<E>(engine: &mut E, circuit_path: &Path) -> AppResult<StudyOutcome>
where
    E: PowerFlowEngine + ?Sized,
{
    let span = tracing::info_span!("study", circuit = %circuit_path.display(), engine = engine.name());
    let _enter = span.enter();

    engine.execute(&DssCommand::compile(circuit_path))?;
    engine.execute(&DssCommand::Solve)?;
    let circuit = engine.circuit_name()?;

    if !engine.converged()? {
        tracing::warn!(%circuit, "power flow did not converge, skipping extraction");
        return Ok(StudyOutcome::NotConverged {
            circuit_path: circuit_path.to_path_buf(),
            circuit,
        });
    }
    tracing::info!(%circuit, "power flow converged");

    let voltages = extract_voltages(&*engine)?;
    let currents = extract_currents(engine)?;
    tracing::info!(
        voltage_records = voltages.len(),
        current_records = currents.len(),
        "results extracted"
    );

    Ok(StudyOutcome::Converged(StudyResults {
        circuit_path: circuit_path.to_path_buf(),
        circuit,
        voltages,
        currents,
    }))
}

/// Open the configured engine and run the study on the configured circuit.
pub fn run_configured_study(config: &StudyConfig) -> AppResult<StudyOutcome> {
    let mut engine = open_engine(config.engine)?;
    run_study(engine.as_mut(), &config.circuit)
}

/// Voltage table of the solved circuit.
pub fn extract_voltages<E>(engine: &E) -> AppResult<VoltageTable>
where
    E: PowerFlowEngine + ?Sized,
{
    Ok(VoltageTable::build(&engine.node_voltages()?)?)
}

/// Current table from one full sweep of the line cursor.
pub fn extract_currents<E>(engine: &mut E) -> AppResult<CurrentTable>
where
    E: LineCursor + ?Sized,
{
    Ok(CurrentTable::collect(Lines::new(engine))?)
}

/// Files written by [`persist_outputs`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedOutputs {
    pub report_dir: Option<PathBuf>,
    pub html: Option<PathBuf>,
}

/// Write the configured outputs. Targets left unset are skipped.
pub fn persist_outputs(
    results: &StudyResults,
    output: &OutputConfig,
) -> AppResult<PersistedOutputs> {
    let mut written = PersistedOutputs::default();

    if let Some(dir) = &output.csv_dir {
        let store = ReportStore::new(dir.clone())?;
        store.save(&results.report())?;
        written.report_dir = Some(store.root_dir().to_path_buf());
    }

    if let Some(path) = &output.html {
        html::write_document(path, &results.charts())?;
        written.html = Some(path.clone());
    }

    Ok(written)
}
