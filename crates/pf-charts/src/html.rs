//! Standalone HTML rendering (inline SVG, no scripts) for viewing charts in a browser.

use std::fmt::Write as _;
use std::path::Path;

use crate::model::{ChartKind, ChartSpec, grouped_bar_slot};
use crate::{ChartError, ChartResult};

const WIDTH: f64 = 960.0;
const HEIGHT: f64 = 560.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 170.0;
const MARGIN_TOP: f64 = 56.0;
const MARGIN_BOTTOM: f64 = 140.0;
const Y_TICKS: usize = 6;
const POINT_RADIUS: f64 = 5.0;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn tick_decimals(span: f64) -> usize {
    match span {
        s if s < 1.0 => 3,
        s if s < 10.0 => 2,
        s if s < 100.0 => 1,
        _ => 0,
    }
}

/// Pixel mapping of one chart's plot area.
struct Frame {
    categories: usize,
    y_min: f64,
    y_max: f64,
}

impl Frame {
    fn plot_width() -> f64 {
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height() -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    fn band(&self) -> f64 {
        Self::plot_width() / self.categories.max(1) as f64
    }

    /// x in category units (category `c` centred on `c`).
    fn x(&self, category_units: f64) -> f64 {
        MARGIN_LEFT + self.band() * (category_units + 0.5)
    }

    fn y(&self, value: f64) -> f64 {
        let span = (self.y_max - self.y_min).max(f64::EPSILON);
        MARGIN_TOP + Self::plot_height() * (1.0 - (value - self.y_min) / span)
    }
}

/// SVG markup for one chart.
pub fn render_svg(chart: &ChartSpec) -> String {
    let (y_min, y_max) = chart.y_range();
    let frame = Frame {
        categories: chart.categories.len(),
        y_min,
        y_max,
    };
    let bottom = MARGIN_TOP + Frame::plot_height();
    let right = MARGIN_LEFT + Frame::plot_width();

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif" font-size="12">"#
    );
    let _ = writeln!(
        svg,
        r#"<rect x="0" y="0" width="{WIDTH}" height="{HEIGHT}" fill="white"/>"#
    );
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="28" text-anchor="middle" font-size="18">{}</text>"#,
        WIDTH / 2.0,
        escape(&chart.title)
    );

    // grid + y ticks
    let decimals = tick_decimals(y_max - y_min);
    for i in 0..Y_TICKS {
        let value = y_min + (y_max - y_min) * i as f64 / (Y_TICKS - 1) as f64;
        let y = frame.y(value);
        let _ = writeln!(
            svg,
            r##"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{right}" y2="{y:.1}" stroke="#e5e5e5"/>"##
        );
        let _ = writeln!(
            svg,
            r#"<text x="{}" y="{:.1}" text-anchor="end">{:.*}</text>"#,
            MARGIN_LEFT - 8.0,
            y + 4.0,
            decimals,
            value
        );
    }

    // axes
    let _ = writeln!(
        svg,
        r##"<line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{bottom}" stroke="#444"/>"##
    );
    let _ = writeln!(
        svg,
        r##"<line x1="{MARGIN_LEFT}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="#444"/>"##
    );

    // category ticks
    let anchor = if chart.x_axis.tick_angle_deg < 0.0 {
        "end"
    } else {
        "middle"
    };
    for (i, category) in chart.categories.iter().enumerate() {
        let x = frame.x(i as f64);
        let y = bottom + 14.0;
        let _ = writeln!(
            svg,
            r#"<text x="{x:.1}" y="{y:.1}" text-anchor="{anchor}" transform="rotate({} {x:.1} {y:.1})">{}</text>"#,
            chart.x_axis.tick_angle_deg,
            escape(category)
        );
    }

    // axis labels
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
        MARGIN_LEFT + Frame::plot_width() / 2.0,
        HEIGHT - 12.0,
        escape(&chart.x_axis.label)
    );
    let label_y = MARGIN_TOP + Frame::plot_height() / 2.0;
    let _ = writeln!(
        svg,
        r#"<text x="20" y="{label_y:.1}" text-anchor="middle" transform="rotate(-90 20 {label_y:.1})">{}</text>"#,
        escape(&chart.y_axis.label)
    );

    // data
    let slots = chart.series.len();
    for (slot, series) in chart.series.iter().enumerate() {
        let fill = series.color.hex();
        for point in &series.points {
            let tooltip = format!(
                "{} | {} | {}",
                chart.categories.get(point.category).map_or("", |c| c.as_str()),
                series.name,
                point.value
            );
            match chart.kind {
                ChartKind::Scatter => {
                    let _ = writeln!(
                        svg,
                        r#"<circle cx="{:.1}" cy="{:.1}" r="{POINT_RADIUS}" fill="{fill}"><title>{}</title></circle>"#,
                        frame.x(point.category as f64),
                        frame.y(point.value),
                        escape(&tooltip)
                    );
                }
                ChartKind::GroupedBar => {
                    let (center, width) = grouped_bar_slot(point.category, slot, slots);
                    let x0 = frame.x(center - width / 2.0);
                    let x1 = frame.x(center + width / 2.0);
                    let y_top = frame.y(point.value.max(0.0));
                    let y_base = frame.y(0.0_f64.max(y_min));
                    let _ = writeln!(
                        svg,
                        r#"<rect x="{x0:.1}" y="{y_top:.1}" width="{:.1}" height="{:.1}" fill="{fill}"><title>{}</title></rect>"#,
                        x1 - x0,
                        (y_base - y_top).max(0.0),
                        escape(&tooltip)
                    );
                }
            }
        }
    }

    // reference lines
    for line in &chart.reference_lines {
        let y = frame.y(line.value);
        let dash = if line.dashed {
            r#" stroke-dasharray="6 4""#
        } else {
            ""
        };
        let _ = writeln!(
            svg,
            r#"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{right}" y2="{y:.1}" stroke="{}" stroke-width="1.5"{dash}/>"#,
            line.color.hex()
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" fill="{}">{}</text>"#,
            right - 4.0,
            y - 4.0,
            line.color.hex(),
            escape(&line.label)
        );
    }

    // legend
    for (i, series) in chart.series.iter().enumerate() {
        let y = MARGIN_TOP + 20.0 * i as f64;
        let _ = writeln!(
            svg,
            r#"<rect x="{:.1}" y="{y:.1}" width="12" height="12" fill="{}"/><text x="{:.1}" y="{:.1}">{}</text>"#,
            right + 20.0,
            series.color.hex(),
            right + 38.0,
            y + 10.0,
            escape(&series.name)
        );
    }

    svg.push_str("</svg>\n");
    svg
}

/// Complete HTML page with one SVG per chart.
pub fn render_document(charts: &[ChartSpec]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n",
    );
    let title = charts
        .first()
        .map_or("Resultados", |c| c.title.as_str());
    let _ = writeln!(html, "<title>{}</title>", escape(title));
    html.push_str("</head>\n<body style=\"background:#fafafa\">\n");
    for chart in charts {
        html.push_str("<figure>\n");
        html.push_str(&render_svg(chart));
        html.push_str("</figure>\n");
    }
    html.push_str("</body>\n</html>\n");
    html
}

pub fn write_document(path: &Path, charts: &[ChartSpec]) -> ChartResult<()> {
    std::fs::write(path, render_document(charts)).map_err(|e| ChartError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), charts = charts.len(), "chart document written");
    Ok(())
}
