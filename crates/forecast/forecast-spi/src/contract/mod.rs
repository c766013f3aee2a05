//! Contract module containing trait definitions for forecast operations

mod chart_renderer;
mod confidence_interval_computer;

pub use chart_renderer::ChartRenderer;
pub use confidence_interval_computer::ConfidenceIntervalComputer;
