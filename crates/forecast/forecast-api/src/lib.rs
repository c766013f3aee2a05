//! Forecast Consumer API
//!
//! Configuration and orchestration for monthly revenue forecasts.
//!
//! This crate provides:
//! - [`ForecastConfig`] and its builder
//! - [`ForecastRunner`], which runs load, prepare, fit, forecast and report
//! - Re-exports from SPI and core for convenience
//!
//! ```rust,no_run
//! use forecast_api::prelude::*;
//!
//! let config = ForecastConfig::builder()
//!     .input_path("samples/data_chunks.json")
//!     .output_path("samples/forecast_result.json")
//!     .no_chart()
//!     .build()?;
//! let report = ForecastRunner::new(config).run()?;
//! println!("{}: {:.2}", report.result.forecast_date, report.result.point_forecast);
//! # Ok::<(), forecast_api::ForecastError>(())
//! ```

pub mod config;
pub mod runner;

pub use config::{ForecastConfig, ForecastConfigBuilder};
pub use runner::{ForecastReport, ForecastRunner};

// Re-export from core
pub use forecast_core::{
    chart, confidence, fitting, read_forecast, report, write_forecast, FitOutcome,
    PngChartRenderer, StandardErrorComputer,
};

// Re-export traits and models from SPI
pub use forecast_spi::{
    ChartData, ChartRenderer, ConfidenceInterval, ConfidenceIntervalComputer, ForecastError,
    ForecastResult, IntervalBounds, ModelInfo, Result,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ForecastConfig, ForecastConfigBuilder, ForecastReport, ForecastRunner};
    pub use algorithm_spi::{ArimaOrder, SarimaSpec, SeasonalOrder};
    pub use data_spi::{Month, MonthlyRevenue};
    pub use forecast_core::{read_forecast, write_forecast, PngChartRenderer};
    pub use forecast_spi::{ChartRenderer, ForecastError, ForecastResult, Result};
}
