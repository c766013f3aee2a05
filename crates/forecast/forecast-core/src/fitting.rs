//! Model selection policy for a forecast run
//!
//! Short series cannot support a seasonal model, so the seasonal order is
//! dropped below a length threshold. A failed fit is retried exactly once
//! with a fixed fallback specification.

use algorithm_spi::{FittedModel, ModelFitter, SarimaSpec, SeasonalOrder};
use forecast_spi::{ForecastError, Result};

/// A successfully fitted model and how it was obtained
#[derive(Debug, Clone)]
pub struct FitOutcome<M> {
    pub model: M,
    /// Specification the model was estimated with
    pub spec: SarimaSpec,
    /// Whether the primary specification failed and the fallback was used
    pub used_fallback: bool,
}

/// Seasonal order to use for a series of `observations` values.
///
/// Below `min_observations` the requested order is replaced by
/// [`SeasonalOrder::none`].
pub fn effective_seasonal_order(
    observations: usize,
    requested: SeasonalOrder,
    min_observations: usize,
) -> SeasonalOrder {
    if observations < min_observations {
        SeasonalOrder::none()
    } else {
        requested
    }
}

/// Fit `requested`, falling back to `fallback` once on failure.
///
/// # Errors
///
/// [`ForecastError::FitFailed`] carrying the requested specification and the
/// fallback's error when both fits fail.
pub fn fit_with_fallback<F>(
    fitter: &F,
    data: &[f64],
    requested: SarimaSpec,
    fallback: SarimaSpec,
) -> Result<FitOutcome<F::Model>>
where
    F: ModelFitter,
{
    tracing::info!(
        order = %requested.order,
        seasonal_order = %requested.seasonal_order,
        observations = data.len(),
        "Fitting SARIMA model"
    );

    let primary_error = match fitter.fit(data, requested) {
        Ok(model) => {
            log_scores(&model);
            return Ok(FitOutcome {
                model,
                spec: requested,
                used_fallback: false,
            });
        }
        Err(e) => e,
    };

    tracing::warn!(
        error = %primary_error,
        fallback = %fallback,
        "Primary model failed, trying fallback"
    );

    match fitter.fit(data, fallback) {
        Ok(model) => {
            log_scores(&model);
            Ok(FitOutcome {
                model,
                spec: fallback,
                used_fallback: true,
            })
        }
        Err(source) => Err(ForecastError::FitFailed { requested, source }),
    }
}

fn log_scores<M: FittedModel>(model: &M) {
    tracing::info!(aic = model.aic(), bic = model.bic(), "Model fitted");
}
