use egui::Color32;
use egui_plot::{Bar, BarChart, GridMark, HLine, Legend, LineStyle, Plot, Points};
use pf_charts::{ChartKind, ChartSpec, Color, grouped_bar_slot};

const POINT_RADIUS: f32 = 4.0;

/// Draws one [`ChartSpec`] with `egui_plot`. Categories sit at integer x
/// positions and are named through the x axis formatter.
pub struct ChartView {
    id: &'static str,
    spec: ChartSpec,
}

impl ChartView {
    pub fn new(id: &'static str, spec: ChartSpec) -> Self {
        Self { id, spec }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.heading(&self.spec.title);

        if self.spec.series.is_empty() {
            ui.label("No data to plot");
        }

        let categories = self.spec.categories.clone();
        let (y_min, y_max) = self.spec.y_range();

        Plot::new(self.id)
            .legend(Legend::default())
            .x_axis_label(self.spec.x_axis.label.clone())
            .y_axis_label(self.spec.y_axis.label.clone())
            .x_axis_formatter(move |mark: GridMark, _range| {
                category_label(&categories, mark.value)
                    .map(str::to_string)
                    .unwrap_or_default()
            })
            .include_y(y_min)
            .include_y(y_max)
            .show(ui, |plot_ui| {
                match self.spec.kind {
                    ChartKind::Scatter => {
                        for series in &self.spec.series {
                            let points: Vec<[f64; 2]> = series
                                .points
                                .iter()
                                .map(|p| [p.category as f64, p.value])
                                .collect();
                            plot_ui.points(
                                Points::new(points)
                                    .name(&series.name)
                                    .color(to_color32(series.color))
                                    .radius(POINT_RADIUS),
                            );
                        }
                    }
                    ChartKind::GroupedBar => {
                        let slots = self.spec.series.len();
                        for (slot, series) in self.spec.series.iter().enumerate() {
                            let bars: Vec<Bar> = series
                                .points
                                .iter()
                                .map(|p| {
                                    let (center, width) = grouped_bar_slot(p.category, slot, slots);
                                    Bar::new(center, p.value).width(width)
                                })
                                .collect();
                            plot_ui.bar_chart(
                                BarChart::new(bars)
                                    .name(&series.name)
                                    .color(to_color32(series.color)),
                            );
                        }
                    }
                }

                for line in &self.spec.reference_lines {
                    let style = if line.dashed {
                        LineStyle::dashed_loose()
                    } else {
                        LineStyle::Solid
                    };
                    plot_ui.hline(
                        HLine::new(line.value)
                            .name(&line.label)
                            .color(to_color32(line.color))
                            .style(style),
                    );
                }
            });
    }
}

fn to_color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Category name for an x grid mark; only integer marks inside the category
/// range carry a label.
fn category_label(categories: &[String], x: f64) -> Option<&str> {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return None;
    }
    categories.get(rounded as usize).map(String::as_str)
}
