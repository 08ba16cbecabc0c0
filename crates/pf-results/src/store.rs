//! Study report storage.
//!
//! A report directory holds `report.json` (manifest plus both tables) and a CSV
//! file per table for spreadsheet use.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::current::CurrentTable;
use crate::export::{write_current_csv, write_voltage_csv};
use crate::types::StudyManifest;
use crate::voltage::VoltageTable;
use crate::{ResultsError, ResultsResult};

const REPORT_FILE: &str = "report.json";
pub const VOLTAGE_CSV: &str = "voltages.csv";
pub const CURRENT_CSV: &str = "currents.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyReport {
    pub manifest: StudyManifest,
    pub voltages: VoltageTable,
    pub currents: CurrentTable,
}

#[derive(Clone)]
pub struct ReportStore {
    root_dir: PathBuf,
}

impl ReportStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn has_report(&self) -> bool {
        self.root_dir.join(REPORT_FILE).exists()
    }

    pub fn save(&self, report: &StudyReport) -> ResultsResult<()> {
        let json = serde_json::to_string_pretty(report)?;
        fs::write(self.root_dir.join(REPORT_FILE), json)?;
        write_voltage_csv(&self.root_dir.join(VOLTAGE_CSV), &report.voltages)?;
        write_current_csv(&self.root_dir.join(CURRENT_CSV), &report.currents)?;
        tracing::info!(dir = %self.root_dir.display(), "study report saved");
        Ok(())
    }

    pub fn load(&self) -> ResultsResult<StudyReport> {
        let path = self.root_dir.join(REPORT_FILE);
        if !path.exists() {
            return Err(ResultsError::ReportNotFound {
                dir: self.root_dir.clone(),
            });
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
