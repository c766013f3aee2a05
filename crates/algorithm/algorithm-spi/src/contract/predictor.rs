//! Predictor traits for time series algorithms
//!
//! Defines the core trait interfaces that prediction algorithms implement.

use crate::error::Result;
use crate::model::SarimaSpec;

/// Common trait for all time series predictors
///
/// This trait follows the fit-predict pattern common in statistical
/// and machine learning libraries.
///
/// # Example
///
/// ```rust,ignore
/// use algorithm_spi::Predictor;
///
/// fn forecast<P: Predictor>(predictor: &mut P, data: &[f64], horizon: usize) -> algorithm_spi::Result<Vec<f64>> {
///     predictor.fit(data)?;
///     predictor.predict(horizon)
/// }
/// ```
pub trait Predictor {
    /// Fit the model to historical data
    ///
    /// # Arguments
    ///
    /// * `data` - Historical time series data
    ///
    /// # Returns
    ///
    /// `Ok(())` if fitting succeeds, `Err(TsError)` otherwise
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Predict future values
    ///
    /// # Arguments
    ///
    /// * `steps` - Number of future time steps to predict
    fn predict(&self, steps: usize) -> Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}

/// A fitted parametric model.
///
/// Extends [`Predictor`] with the quantities a forecast report needs:
/// the specification actually estimated, goodness-of-fit scores and the
/// standard error of each forecast step.
pub trait FittedModel: Predictor {
    /// Specification the model was estimated with
    fn spec(&self) -> SarimaSpec;

    /// Maximised log-likelihood
    fn log_likelihood(&self) -> f64;

    /// Akaike information criterion
    fn aic(&self) -> f64;

    /// Bayesian information criterion
    fn bic(&self) -> f64;

    /// Standard error of the forecast at each of the next `steps` steps
    fn forecast_std_errors(&self, steps: usize) -> Result<Vec<f64>>;
}
