//! Forecast run configuration.

use std::path::PathBuf;

use algorithm_spi::{ArimaOrder, SarimaSpec, SeasonalOrder};
use data_spi::Month;
use forecast_spi::{ForecastError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "../samples/data_chunks.json";
pub const DEFAULT_OUTPUT_PATH: &str = "../samples/forecast_result.json";
pub const DEFAULT_CHART_PATH: &str = "../samples/revenue_forecast.png";

/// Configuration for a forecast run.
///
/// The defaults reproduce the standard monthly revenue forecast: SARIMA
/// (1, 1, 1)x(1, 1, 1, 12) falling back to (1, 1, 1), one step ahead, 95%
/// interval, labelled `2025-01`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// JSON chunk document to read
    pub input_path: PathBuf,
    /// Where the forecast result is written
    pub output_path: PathBuf,
    /// Where the chart is written; `None` disables the chart
    pub chart_path: Option<PathBuf>,
    /// Month the forecast is labelled with
    pub forecast_period: Month,
    /// Requested non-seasonal order
    pub order: ArimaOrder,
    /// Requested seasonal order
    pub seasonal_order: SeasonalOrder,
    /// Series shorter than this are fitted without a seasonal component
    ///
    /// Reaching it only means the seasonal model is attempted. The default
    /// (1, 1, 1)x(1, 1, 1, 12) request needs 32 observations to estimate,
    /// so series of 24 to 31 months end up on the fallback specification.
    pub min_seasonal_observations: usize,
    /// Two-sided interval coverage in (0, 1)
    pub confidence_level: f64,
    /// Forecast steps; only one-step forecasts are reported
    pub horizon: usize,
    /// Specification tried once when the requested one fails
    pub fallback: SarimaSpec,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            chart_path: Some(PathBuf::from(DEFAULT_CHART_PATH)),
            forecast_period: default_forecast_period(),
            order: ArimaOrder::new(1, 1, 1),
            seasonal_order: SeasonalOrder::new(1, 1, 1, 12),
            min_seasonal_observations: 24,
            confidence_level: 0.95,
            horizon: 1,
            fallback: SarimaSpec::arima(1, 1, 1),
        }
    }
}

fn default_forecast_period() -> Month {
    Month::new(2025, 1).expect("2025-01 is a valid month")
}

impl ForecastConfig {
    /// Create a builder starting from the defaults.
    pub fn builder() -> ForecastConfigBuilder {
        ForecastConfigBuilder::new()
    }

    /// Requested model specification before seasonal forcing
    pub fn requested_spec(&self) -> SarimaSpec {
        SarimaSpec::new(self.order, self.seasonal_order)
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(ForecastError::invalid_parameter(
                "confidence_level",
                format!("must be in (0, 1), got {}", self.confidence_level),
            ));
        }
        if self.horizon != 1 {
            return Err(ForecastError::invalid_parameter(
                "horizon",
                format!("only one-step forecasts are supported, got {}", self.horizon),
            ));
        }
        Ok(())
    }
}

/// Builder for ForecastConfig.
#[derive(Debug, Default)]
pub struct ForecastConfigBuilder {
    config: ForecastConfig,
}

impl ForecastConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input document.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_path = path.into();
        self
    }

    /// Set the result file.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Set the chart file.
    pub fn chart_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.chart_path = Some(path.into());
        self
    }

    /// Disable chart output.
    pub fn no_chart(mut self) -> Self {
        self.config.chart_path = None;
        self
    }

    /// Set the forecast label month.
    pub fn forecast_period(mut self, month: Month) -> Self {
        self.config.forecast_period = month;
        self
    }

    /// Set the requested non-seasonal order.
    pub fn order(mut self, order: ArimaOrder) -> Self {
        self.config.order = order;
        self
    }

    /// Set the requested seasonal order.
    pub fn seasonal_order(mut self, seasonal_order: SeasonalOrder) -> Self {
        self.config.seasonal_order = seasonal_order;
        self
    }

    /// Set the length below which the seasonal component is dropped.
    pub fn min_seasonal_observations(mut self, n: usize) -> Self {
        self.config.min_seasonal_observations = n;
        self
    }

    /// Set the interval coverage.
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.config.confidence_level = level;
        self
    }

    /// Set the forecast horizon.
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.config.horizon = horizon;
        self
    }

    /// Set the fallback specification.
    pub fn fallback(mut self, fallback: SarimaSpec) -> Self {
        self.config.fallback = fallback;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ForecastConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
