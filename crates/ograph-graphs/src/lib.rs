//! Growth-curve chart rendering for the ograph service

pub mod renderer;
pub mod types;

pub use renderer::{CurveChartRenderer, GraphRenderer, LOG_SCALE_THRESHOLD};
pub use types::*;
