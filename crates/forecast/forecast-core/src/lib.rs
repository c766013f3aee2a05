//! Forecast Core
//!
//! Core implementations for the forecast run: the seasonal-forcing and
//! fallback fitting policy, prediction intervals, JSON report output and
//! chart rendering.

pub mod chart;
pub mod confidence;
pub mod fitting;
pub mod report;

// Re-export SPI traits for implementations
pub use forecast_spi::{
    ChartData, ChartRenderer, ConfidenceInterval, ConfidenceIntervalComputer, ForecastError,
    ForecastResult, IntervalBounds, ModelInfo, Result,
};

// Re-export main types
pub use chart::PngChartRenderer;
pub use confidence::{normal_quantile, z_score, StandardErrorComputer};
pub use fitting::{effective_seasonal_order, fit_with_fallback, FitOutcome};
pub use report::{read_forecast, write_forecast};
