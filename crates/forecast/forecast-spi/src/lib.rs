//! Forecast Service Provider Interface
//!
//! Defines the persisted forecast result, the forecast error type and the
//! contracts for interval computation and chart rendering.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{ChartRenderer, ConfidenceIntervalComputer};
pub use error::{ForecastError, Result};
pub use model::{ChartData, ConfidenceInterval, ForecastResult, IntervalBounds, ModelInfo};
