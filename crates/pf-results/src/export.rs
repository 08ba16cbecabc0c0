//! CSV output of the voltage and current tables.

use std::fs;
use std::path::Path;

use crate::current::CurrentTable;
use crate::voltage::VoltageTable;
use crate::ResultsResult;

/// Quote a field when it contains a separator, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn voltage_csv(table: &VoltageTable) -> String {
    let mut out = String::from("bus,voltage_pu,phase\n");
    for r in table.records() {
        out.push_str(&format!(
            "{},{},{}\n",
            csv_field(&r.bus),
            r.voltage_pu,
            r.phase.label()
        ));
    }
    out
}

pub fn current_csv(table: &CurrentTable) -> String {
    let mut out = String::from("line,current_a,phase\n");
    for r in table.records() {
        out.push_str(&format!(
            "{},{},{}\n",
            csv_field(&r.line),
            r.current_a,
            r.phase.label()
        ));
    }
    out
}

pub fn write_voltage_csv(path: &Path, table: &VoltageTable) -> ResultsResult<()> {
    fs::write(path, voltage_csv(table))?;
    Ok(())
}

pub fn write_current_csv(path: &Path, table: &CurrentTable) -> ResultsResult<()> {
    fs::write(path, current_csv(table))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_engine::{LineElement, NodeVoltage};

    #[test]
    fn voltage_rows_use_phase_labels() {
        let table = VoltageTable::build(&[NodeVoltage {
            name: "b1.2".into(),
            vmag_pu: 0.9981,
        }])
        .unwrap();
        assert_eq!(voltage_csv(&table), "bus,voltage_pu,phase\nb1,0.9981,Fase 2\n");
    }

    #[test]
    fn current_rows_quote_awkward_names() {
        let table = CurrentTable::collect([Ok(LineElement {
            name: "tie,a".into(),
            phases: 1,
            currents_mag_ang: vec![12.5, 0.0],
        })])
        .unwrap();
        assert_eq!(
            current_csv(&table),
            "line,current_a,phase\n\"tie,a\",12.5,Fase 1\n"
        );
    }
}
