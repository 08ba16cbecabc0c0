//! Current table: one row per (line, phase).

use std::collections::{BTreeSet, HashSet};

use pf_core::{Phase, ensure_magnitude};
use pf_engine::{EngineResult, LineElement};
use serde::{Deserialize, Serialize};

use crate::types::LineCurrentRecord;
use crate::{ResultsError, ResultsResult};

/// Per-phase current magnitudes of one line element.
///
/// Reads magnitudes at even offsets of the interleaved magnitude/angle array for
/// the first `phases` conductors (terminal 1). Angles and any other terminal's
/// entries are ignored.
pub fn line_records(line: &LineElement) -> ResultsResult<Vec<LineCurrentRecord>> {
    let needed = line.phases.saturating_mul(2);
    let Some(terminal) = line.currents_mag_ang.get(..needed) else {
        return Err(ResultsError::CurrentArrayTooShort {
            line: line.name.clone(),
            phases: line.phases,
            len: line.currents_mag_ang.len(),
        });
    };

    terminal
        .iter()
        .step_by(2)
        .enumerate()
        .map(|(position, &magnitude)| -> ResultsResult<LineCurrentRecord> {
            let current_a = ensure_magnitude(magnitude, "line current").map_err(|_| {
                ResultsError::InvalidMagnitude {
                    entry: line.name.clone(),
                    value: magnitude,
                }
            })?;
            Ok(LineCurrentRecord {
                line: line.name.clone(),
                current_a,
                phase: Phase::from_position(position)?,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentTable {
    records: Vec<LineCurrentRecord>,
}

impl CurrentTable {
    /// Sweep line elements (typically a `pf_engine::Lines` iterator) and collect
    /// their per-phase records, element by element then phase by phase.
    pub fn collect<I>(lines: I) -> ResultsResult<Self>
    where
        I: IntoIterator<Item = EngineResult<LineElement>>,
    {
        let mut records = Vec::new();
        let mut elements = 0usize;
        for line in lines {
            let line = line?;
            records.extend(line_records(&line)?);
            elements += 1;
        }
        tracing::debug!(elements, records = records.len(), "current table built");
        Ok(Self { records })
    }

    pub fn records(&self) -> &[LineCurrentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct line names in order of first appearance.
    pub fn lines(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.line.as_str())
            .filter(|line| seen.insert(*line))
            .collect()
    }

    /// Distinct phases, ascending.
    pub fn phases(&self) -> Vec<Phase> {
        self.records
            .iter()
            .map(|r| r.phase)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
