//! Chart data model.

use pf_core::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const GREY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Scatter,
    /// Bars of one category placed side by side, one slot per series.
    GroupedBar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub label: String,
    /// Tick label rotation in degrees (negative = counter-clockwise).
    pub tick_angle_deg: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tick_angle_deg: 0.0,
        }
    }

    pub fn with_tick_angle(mut self, deg: f64) -> Self {
        self.tick_angle_deg = deg;
        self
    }
}

/// A y value at a categorical x position (index into `ChartSpec::categories`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub category: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub phase: Phase,
    pub color: Color,
    pub points: Vec<DataPoint>,
}

/// Horizontal line at a fixed y value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub value: f64,
    pub label: String,
    pub color: Color,
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Distinct x values in first-appearance order.
    pub categories: Vec<String>,
    /// One series per phase, ascending.
    pub series: Vec<Series>,
    pub reference_lines: Vec<ReferenceLine>,
}

impl ChartSpec {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// y extent covering every point and reference line, padded by 5 %.
    ///
    /// Bar charts always include zero.
    pub fn y_range(&self) -> (f64, f64) {
        let values = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.value))
            .chain(self.reference_lines.iter().map(|l| l.value))
            .chain((self.kind == ChartKind::GroupedBar).then_some(0.0));

        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

        if !min.is_finite() || !max.is_finite() {
            return (0.0, 1.0);
        }
        let span = max - min;
        let pad = if span > 0.0 {
            span * 0.05
        } else {
            max.abs().max(1.0) * 0.05
        };
        let lo = if self.kind == ChartKind::GroupedBar && min >= 0.0 {
            0.0
        } else {
            min - pad
        };
        (lo, max + pad)
    }
}

/// Total width of one category's bar group, in category units.
pub const GROUP_WIDTH: f64 = 0.8;

/// Center and width (category units, category `c` centred on `c`) of the bar in
/// `slot` out of `slots` side-by-side bars.
pub fn grouped_bar_slot(category: usize, slot: usize, slots: usize) -> (f64, f64) {
    let width = GROUP_WIDTH / slots.max(1) as f64;
    let left = category as f64 - GROUP_WIDTH / 2.0;
    (left + width * (slot as f64 + 0.5), width)
}
