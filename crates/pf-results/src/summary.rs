//! Console summary of reference-phase voltages.

use crate::voltage::VoltageTable;

const COLUMN_WIDTH: usize = 20;
const RULE_WIDTH: usize = 45;

/// Fixed-width `Bus | Tensión Fase A (pu)` table of the reference-phase rows.
pub fn reference_phase_table(table: &VoltageTable) -> String {
    let mut out = format!(
        "{:<w$} | {:<w$}\n",
        "Bus",
        "Tensión Fase A (pu)",
        w = COLUMN_WIDTH
    );
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for record in table.reference_phase() {
        out.push_str(&format!(
            "{:<w$} | {:.4} pu\n",
            record.bus,
            record.voltage_pu,
            w = COLUMN_WIDTH
        ));
    }
    out
}
