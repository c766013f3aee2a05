//! Model module containing data structures

mod chart_data;
mod confidence_interval;
mod forecast_result;

pub use chart_data::ChartData;
pub use confidence_interval::ConfidenceInterval;
pub use forecast_result::{ForecastResult, IntervalBounds, ModelInfo};
