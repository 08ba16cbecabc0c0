//! Voltage table: one row per engine node.

use std::collections::{BTreeSet, HashSet};

use pf_core::{NodeName, Phase, ensure_magnitude};
use pf_engine::NodeVoltage;
use serde::{Deserialize, Serialize};

use crate::types::NodeVoltageRecord;
use crate::{ResultsError, ResultsResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoltageTable {
    records: Vec<NodeVoltageRecord>,
}

impl VoltageTable {
    /// Build one record per node, in engine order.
    ///
    /// Repeated buses are kept as separate rows. The first malformed name or
    /// invalid magnitude aborts the build with an error naming the entry.
    pub fn build(nodes: &[NodeVoltage]) -> ResultsResult<Self> {
        let records = nodes
            .iter()
            .map(Self::record_for)
            .collect::<ResultsResult<Vec<_>>>()?;
        tracing::debug!(records = records.len(), "voltage table built");
        Ok(Self { records })
    }

    pub fn record_for(node: &NodeVoltage) -> ResultsResult<NodeVoltageRecord> {
        let NodeName { bus, phase } = NodeName::parse(&node.name)?;
        let voltage_pu = ensure_magnitude(node.vmag_pu, "node voltage").map_err(|_| {
            ResultsError::InvalidMagnitude {
                entry: node.name.clone(),
                value: node.vmag_pu,
            }
        })?;
        Ok(NodeVoltageRecord {
            bus,
            voltage_pu,
            phase,
        })
    }

    pub fn records(&self) -> &[NodeVoltageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows on the reference phase (phase 1).
    pub fn reference_phase(&self) -> impl Iterator<Item = &NodeVoltageRecord> {
        self.records.iter().filter(|r| r.phase.is_reference())
    }

    /// Distinct buses in order of first appearance.
    pub fn buses(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.bus.as_str())
            .filter(|bus| seen.insert(*bus))
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
