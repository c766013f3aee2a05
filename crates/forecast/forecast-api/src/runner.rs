//! Forecast run orchestration
//!
//! A run loads the monthly summaries, prepares the series, fits the model
//! with seasonal forcing and one fallback, computes the one-step forecast
//! and its interval, writes the result and optionally a chart.

use std::path::PathBuf;

use algorithm_core::SarimaFitter;
use algorithm_spi::{FittedModel, ModelFitter, Predictor, SarimaSpec, TsError};
use data_core::{JsonChunkSource, SeriesSummary, TimeSeries};
use data_spi::{MonthlyRevenue, RevenueSource};
use forecast_core::{
    effective_seasonal_order, fit_with_fallback, write_forecast, PngChartRenderer,
    StandardErrorComputer,
};
use forecast_spi::{
    ChartData, ChartRenderer, ConfidenceIntervalComputer, ForecastError, ForecastResult,
    IntervalBounds, ModelInfo, Result,
};

use crate::config::ForecastConfig;

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    /// The persisted result
    pub result: ForecastResult,
    /// Statistics of the historical revenue
    pub summary: SeriesSummary,
    /// Deviation of the point forecast from the historical mean, in percent
    pub pct_from_mean: Option<f64>,
    /// Whether the fallback specification was used
    pub used_fallback: bool,
    pub output_path: PathBuf,
    /// Chart file, when one was written
    pub chart_path: Option<PathBuf>,
}

/// Runs the forecast pipeline
pub struct ForecastRunner<F = SarimaFitter, R = PngChartRenderer> {
    config: ForecastConfig,
    fitter: F,
    renderer: R,
    intervals: StandardErrorComputer,
}

impl ForecastRunner {
    /// Runner with the SARIMA estimator and PNG charts
    pub fn new(config: ForecastConfig) -> Self {
        Self {
            config,
            fitter: SarimaFitter::default(),
            renderer: PngChartRenderer::default(),
            intervals: StandardErrorComputer::new(),
        }
    }
}

impl<F, R> ForecastRunner<F, R>
where
    F: ModelFitter,
    R: ChartRenderer,
{
    /// Replace the model fitter
    pub fn with_fitter<G: ModelFitter>(self, fitter: G) -> ForecastRunner<G, R> {
        ForecastRunner {
            config: self.config,
            fitter,
            renderer: self.renderer,
            intervals: self.intervals,
        }
    }

    /// Replace the chart renderer
    pub fn with_renderer<S: ChartRenderer>(self, renderer: S) -> ForecastRunner<F, S> {
        ForecastRunner {
            config: self.config,
            fitter: self.fitter,
            renderer,
            intervals: self.intervals,
        }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Load the configured input and run the forecast
    pub fn run(&self) -> Result<ForecastReport> {
        self.config.validate()?;

        tracing::info!(path = %self.config.input_path.display(), "Loading data");
        let source = JsonChunkSource::new(&self.config.input_path);
        let records = source.load()?;

        self.run_with_records(records)
    }

    /// Run the forecast on already loaded records
    pub fn run_with_records(&self, mut records: Vec<MonthlyRevenue>) -> Result<ForecastReport> {
        self.config.validate()?;
        records.sort_by(|a, b| a.month.cmp(&b.month));

        let series = TimeSeries::from_records(&records)?;
        let summary = series.summary();
        tracing::info!(
            observations = summary.count,
            mean = summary.mean,
            std_dev = summary.std_dev,
            min = summary.min,
            max = summary.max,
            "Revenue statistics"
        );

        let requested = self.config.requested_spec();
        let seasonal_order = effective_seasonal_order(
            series.len(),
            requested.seasonal_order,
            self.config.min_seasonal_observations,
        );
        if seasonal_order != requested.seasonal_order {
            tracing::info!(
                observations = series.len(),
                threshold = self.config.min_seasonal_observations,
                "Not enough data for the seasonal component, using a non-seasonal model"
            );
        }
        let spec = SarimaSpec::new(requested.order, seasonal_order);

        let values = series.values();
        let outcome = fit_with_fallback(&self.fitter, &values, spec, self.config.fallback)?;
        let model = &outcome.model;

        let horizon = self.config.horizon;
        let forecast = model.predict(horizon)?;
        let std_errors = model.forecast_std_errors(horizon)?;
        let interval =
            self.intervals
                .compute(&forecast, &std_errors, self.config.confidence_level);

        let (point, lower, upper) = match (
            interval.forecast.first(),
            interval.lower.first(),
            interval.upper.first(),
        ) {
            (Some(&p), Some(&l), Some(&u)) if p.is_finite() && l.is_finite() && u.is_finite() => {
                (p, l, u)
            }
            _ => {
                return Err(ForecastError::Model(TsError::NumericalError(
                    "forecast or interval is not finite".to_string(),
                )))
            }
        };

        let forecast_date = self.config.forecast_period;
        if series.next_month() != Some(forecast_date) {
            tracing::warn!(
                forecast_date = %forecast_date,
                last_observation = ?series.last_month().map(|m| m.to_string()),
                "Forecast period does not follow the last observation"
            );
        }

        tracing::info!(
            forecast_date = %forecast_date,
            point_forecast = point,
            lower,
            upper,
            confidence_level = self.config.confidence_level,
            "Forecast computed"
        );

        let pct_from_mean = summary.pct_from_mean(point);
        if let Some(pct) = pct_from_mean {
            tracing::info!(pct_from_mean = pct, "Forecast compared with historical average");
        }

        let result = ForecastResult {
            forecast_date,
            point_forecast: point,
            confidence_interval: IntervalBounds { lower, upper },
            model_info: ModelInfo::sarima(outcome.spec, model.aic(), model.bic()),
            historical_data: records,
        };

        write_forecast(&result, &self.config.output_path)?;

        let chart_path = self.config.chart_path.as_ref().and_then(|path| {
            let data = ChartData {
                history: series.points().to_vec(),
                forecast_month: forecast_date,
                forecast: point,
                lower,
                upper,
                confidence_level: self.config.confidence_level,
            };
            match self.renderer.render(&data, path) {
                Ok(()) => Some(path.clone()),
                Err(e) => {
                    tracing::warn!(error = %e, path = %path.display(), "Chart rendering failed");
                    None
                }
            }
        });

        Ok(ForecastReport {
            result,
            summary,
            pct_from_mean,
            used_fallback: outcome.used_fallback,
            output_path: self.config.output_path.clone(),
            chart_path,
        })
    }
}
