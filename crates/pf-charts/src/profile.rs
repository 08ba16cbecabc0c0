//! Voltage and current profiles of a solved circuit.

use std::collections::HashMap;

use pf_core::{Phase, as_amps, as_per_unit};
use pf_results::{CurrentTable, VoltageTable};

use crate::model::{Axis, ChartKind, ChartSpec, Color, DataPoint, ReferenceLine, Series};
use crate::palette::{qualitative, voltage_phase_color};

/// Upper voltage limit drawn on the voltage profile, per-unit.
pub const UPPER_LIMIT_PU: f64 = 1.05;
/// Lower voltage limit drawn on the voltage profile, per-unit.
pub const LOWER_LIMIT_PU: f64 = 0.95;

const X_TICK_ANGLE_DEG: f64 = -45.0;

/// Scatter of node voltages per bus, one series per phase, with the 0.95/1.05 pu
/// limits as dashed reference lines.
pub fn voltage_profile(table: &VoltageTable) -> ChartSpec {
    let categories = table.buses();
    let series = series_by_phase(
        &categories,
        &table.phases(),
        table
            .records()
            .iter()
            .map(|r| (r.bus.as_str(), r.phase, as_per_unit(r.voltage()))),
        |_, phase| voltage_phase_color(phase),
    );

    ChartSpec {
        title: "Perfil de Tensiones por Fase en OpenDSS".to_string(),
        kind: ChartKind::Scatter,
        x_axis: Axis::new("Nombre del Bus").with_tick_angle(X_TICK_ANGLE_DEG),
        y_axis: Axis::new("Voltaje (p.u.)"),
        categories: categories.into_iter().map(str::to_string).collect(),
        series,
        reference_lines: vec![
            limit_line(UPPER_LIMIT_PU, "Límite Superior"),
            limit_line(LOWER_LIMIT_PU, "Límite Inferior"),
        ],
    }
}

/// Grouped bars of line current per line, one series per phase.
pub fn current_profile(table: &CurrentTable) -> ChartSpec {
    let categories = table.lines();
    let series = series_by_phase(
        &categories,
        &table.phases(),
        table
            .records()
            .iter()
            .map(|r| (r.line.as_str(), r.phase, as_amps(r.current()))),
        |slot, _| qualitative(slot),
    );

    ChartSpec {
        title: "Corrientes por Fase en cada Línea".to_string(),
        kind: ChartKind::GroupedBar,
        x_axis: Axis::new("Nombre de la Línea").with_tick_angle(X_TICK_ANGLE_DEG),
        y_axis: Axis::new("Amperios (A)"),
        categories: categories.into_iter().map(str::to_string).collect(),
        series,
        reference_lines: Vec::new(),
    }
}

fn limit_line(value: f64, label: &str) -> ReferenceLine {
    ReferenceLine {
        value,
        label: label.to_string(),
        color: Color::ORANGE,
        dashed: true,
    }
}

/// Split `(category, phase, value)` rows into one series per phase.
fn series_by_phase<'a>(
    categories: &[&'a str],
    phases: &[Phase],
    rows: impl Iterator<Item = (&'a str, Phase, f64)>,
    color_of: impl Fn(usize, Phase) -> Color,
) -> Vec<Series> {
    let category_index: HashMap<&str, usize> = categories
        .iter()
        .enumerate()
        .map(|(i, c)| (*c, i))
        .collect();

    let mut series: Vec<Series> = phases
        .iter()
        .enumerate()
        .map(|(slot, &phase)| Series {
            name: phase.label(),
            phase,
            color: color_of(slot, phase),
            points: Vec::new(),
        })
        .collect();

    for (category, phase, value) in rows {
        let (Some(&category), Some(s)) = (
            category_index.get(category),
            series.iter_mut().find(|s| s.phase == phase),
        ) else {
            continue;
        };
        s.points.push(DataPoint { category, value });
    }
    series
}
