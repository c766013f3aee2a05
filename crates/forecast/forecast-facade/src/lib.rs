//! Forecast Facade
//!
//! High-level API for monthly revenue forecasting. Re-exports all public
//! types from the forecast, data and algorithm stacks for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core modules for direct access
pub use forecast_core::{chart, confidence, fitting, report};

// Data loading and preparation
pub use data_core::{
    DataError, JsonChunkSource, Month, MonthlyRevenue, RevenueSource, SeriesSummary, TimeSeries,
};

// Estimator
pub use algorithm_core::{
    ArimaOrder, FittedModel, ModelFitter, Predictor, Sarima, SarimaFitter, SarimaSpec,
    SeasonalOrder, TsError,
};

// Re-export SPI traits
pub use forecast_spi::{ChartRenderer, ConfidenceIntervalComputer, ForecastError};
