#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::PowerFlowApp;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Power Flow Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "Power Flow Viewer",
        options,
        Box::new(|cc| Ok(Box::new(PowerFlowApp::new(cc, config_path)))),
    )
}
