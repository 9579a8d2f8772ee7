// src/gui/mod.rs
pub mod chart;

pub use chart::{render_chart, ChartModel};
