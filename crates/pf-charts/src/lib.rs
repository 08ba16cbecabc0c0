//! pf-charts: chart descriptions for study results and a standalone HTML renderer.
//!
//! Charts are plain data ([`ChartSpec`]); front ends decide how to draw them. The
//! interactive viewer maps them onto `egui_plot`, [`html`] writes SVG for a browser.

pub mod html;
pub mod model;
pub mod palette;
pub mod profile;

pub use model::{
    Axis, ChartKind, ChartSpec, Color, DataPoint, GROUP_WIDTH, ReferenceLine, Series,
    grouped_bar_slot,
};
pub use profile::{LOWER_LIMIT_PU, UPPER_LIMIT_PU, current_profile, voltage_profile};

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error("Failed to write chart document {path}")]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}
