use crate::views::ChartView;
use pf_app::{StudyConfig, StudyOutcome, run_configured_study};
use pf_charts::{current_profile, voltage_profile};
use std::path::PathBuf;

pub struct PowerFlowApp {
    circuit: PathBuf,
    /// Console text of the study (convergence notice and reference-phase table),
    /// or the error that stopped it.
    report: String,
    voltage_view: Option<ChartView>,
    current_view: Option<ChartView>,
    active_view: ViewTab,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewTab {
    Voltages,
    Currents,
    Summary,
}

impl PowerFlowApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config_path: Option<PathBuf>) -> Self {
        let config = match StudyConfig::load_or_default(config_path.as_deref()) {
            Ok(config) => config,
            Err(e) => return Self::failed(PathBuf::new(), e.to_string()),
        };

        match run_configured_study(&config) {
            Ok(outcome) => Self::from_outcome(config.circuit, outcome),
            Err(e) => Self::failed(config.circuit, e.to_string()),
        }
    }

    fn from_outcome(circuit: PathBuf, outcome: StudyOutcome) -> Self {
        // Console table is printed before any chart is built
        let report = outcome.console_report();
        print!("{}", report);
        let (voltage_view, current_view, active_view) = match &outcome {
            StudyOutcome::Converged(results) => (
                Some(ChartView::new(
                    "voltage_profile",
                    voltage_profile(&results.voltages),
                )),
                Some(ChartView::new(
                    "current_profile",
                    current_profile(&results.currents),
                )),
                ViewTab::Voltages,
            ),
            StudyOutcome::NotConverged { .. } => (None, None, ViewTab::Summary),
        };

        Self {
            circuit,
            report,
            voltage_view,
            current_view,
            active_view,
        }
    }

    fn failed(circuit: PathBuf, message: String) -> Self {
        tracing::error!(%message, "study failed");
        Self {
            circuit,
            report: format!("Error: {}", message),
            voltage_view: None,
            current_view: None,
            active_view: ViewTab::Summary,
        }
    }
}

impl eframe::App for PowerFlowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Circuit:");
                ui.monospace(self.circuit.display().to_string());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.active_view, ViewTab::Voltages, "Voltages");
                ui.selectable_value(&mut self.active_view, ViewTab::Currents, "Currents");
                ui.selectable_value(&mut self.active_view, ViewTab::Summary, "Summary");
            });
            ui.separator();

            let chart = match self.active_view {
                ViewTab::Voltages => Some(&self.voltage_view),
                ViewTab::Currents => Some(&self.current_view),
                ViewTab::Summary => None,
            };

            match chart {
                Some(Some(view)) => view.show(ui),
                Some(None) | None => {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        ui.monospace(&self.report);
                    });
                }
            }
        });
    }
}
