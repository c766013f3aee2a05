//! Seasonal ARIMA (SARIMA) implementation
//!
//! A SARIMA(p,d,q)x(P,D,Q,s) model differences the series with
//! `(1 - B)^d (1 - B^s)^D` and models the result as a multiplicative
//! seasonal ARMA process without a trend term:
//!
//! ```text
//! phi(B) Phi(B^s) w_t = theta(B) Theta(B^s) e_t
//! ```
//!
//! ## Estimation
//!
//! Coefficients minimise the conditional sum of squares (CSS): residuals are
//! computed after the largest autoregressive lag, with earlier innovations
//! taken as zero. The search is a Nelder-Mead simplex started from
//! Yule-Walker estimates for the non-seasonal AR part and zeros elsewhere.
//!
//! The simplex moves over unconstrained reals that map through partial
//! autocorrelations onto stationary AR and invertible MA polynomials, so
//! every candidate the search scores is a well-posed model. Without this the
//! MA coefficients of a trending series drift off without bound while the
//! sum of squares keeps shrinking. A search that does not converge within its
//! iteration budget is a [`TsError::ConvergenceFailure`].
//!
//! The innovation variance, Gaussian log-likelihood and the AIC/BIC scores
//! follow from the minimised sum of squares. The variance counts as one
//! estimated parameter.
//!
//! ## Example
//!
//! ```rust
//! use algorithm_core::prelude::*;
//!
//! let data: Vec<f64> = (0..24).map(|i| 100.0 + i as f64 * 2.0 + (i as f64).sin()).collect();
//! let mut model = Sarima::new(SarimaSpec::arima(1, 1, 1)).unwrap();
//! model.fit(&data).unwrap();
//! let forecast = model.predict(1).unwrap();
//! assert_eq!(forecast.len(), 1);
//! ```

use crate::utils::optimize::NelderMead;
use crate::utils::preprocessing::{
    ar_polynomial, constrain_stationary, difference, differencing_polynomial, ma_polynomial,
    poly_mul, seasonal_difference, unconstrain_stationary, yule_walker,
};
use algorithm_spi::{FittedModel, ModelFitter, Predictor, Result, SarimaSpec, TsError};
use serde::{Deserialize, Serialize};

/// Largest accepted AR/MA order, seasonal or not
const MAX_ARMA_ORDER: usize = 10;
/// Largest accepted differencing order, seasonal or not
const MAX_DIFFERENCING: usize = 2;
/// Floor for the innovation variance so a perfect fit keeps finite scores
const MIN_VARIANCE: f64 = 1e-12;

/// SARIMA model for time series forecasting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sarima {
    /// Model orders
    spec: SarimaSpec,
    /// Non-seasonal AR coefficients
    ar_coeffs: Vec<f64>,
    /// Non-seasonal MA coefficients
    ma_coeffs: Vec<f64>,
    /// Seasonal AR coefficients
    seasonal_ar_coeffs: Vec<f64>,
    /// Seasonal MA coefficients
    seasonal_ma_coeffs: Vec<f64>,
    /// Innovation variance
    sigma2: f64,
    /// Conditional Gaussian log-likelihood
    log_likelihood: f64,
    /// Residuals entering the likelihood
    nobs: usize,
    /// Original data (for integrating forecasts)
    original_data: Vec<f64>,
    /// Differenced data
    differenced_data: Vec<f64>,
    /// Residuals from fitting, zero before the first conditional residual
    residuals: Vec<f64>,
    /// Series length needed to estimate `spec`
    min_observations: usize,
    /// Optimiser settings
    optimizer: NelderMead,
    /// Optimiser iterations used by the last fit
    iterations: usize,
    /// Whether the optimiser met its tolerance
    converged: bool,
    /// Whether the model has been fitted
    fitted: bool,
}

impl Sarima {
    /// Create a new unfitted SARIMA model
    ///
    /// # Arguments
    ///
    /// * `spec` - Orders `(p, d, q)` and `(P, D, Q, s)`. AR and MA orders
    ///   must be at most 10, differencing orders at most 2, and any seasonal
    ///   term requires `s >= 2`. The period must keep the required series
    ///   length representable.
    pub fn new(spec: SarimaSpec) -> Result<Self> {
        let order = spec.order;
        let seasonal = spec.seasonal_order;

        for (name, value) in [
            ("p", order.p),
            ("q", order.q),
            ("P", seasonal.p),
            ("Q", seasonal.q),
        ] {
            if value > MAX_ARMA_ORDER {
                return Err(TsError::invalid_parameter(
                    name,
                    format!("order must be <= {}", MAX_ARMA_ORDER),
                ));
            }
        }
        for (name, value) in [("d", order.d), ("D", seasonal.d)] {
            if value > MAX_DIFFERENCING {
                return Err(TsError::invalid_parameter(
                    name,
                    format!("differencing order must be <= {}", MAX_DIFFERENCING),
                ));
            }
        }
        if seasonal.is_seasonal() && seasonal.period < 2 {
            return Err(TsError::invalid_parameter(
                "s",
                "seasonal period must be at least 2 when seasonal terms are requested",
            ));
        }

        let min_observations = Self::required_observations(spec).ok_or_else(|| {
            TsError::invalid_parameter(
                "s",
                format!("seasonal period {} is too large", seasonal.period),
            )
        })?;

        Ok(Self {
            spec,
            ar_coeffs: vec![0.0; order.p],
            ma_coeffs: vec![0.0; order.q],
            seasonal_ar_coeffs: vec![0.0; seasonal.p],
            seasonal_ma_coeffs: vec![0.0; seasonal.q],
            sigma2: 0.0,
            log_likelihood: 0.0,
            nobs: 0,
            original_data: Vec::new(),
            differenced_data: Vec::new(),
            residuals: Vec::new(),
            min_observations,
            optimizer: NelderMead::default(),
            iterations: 0,
            converged: false,
            fitted: false,
        })
    }

    /// Replace the optimiser settings
    pub fn with_optimizer(mut self, optimizer: NelderMead) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// Largest lag of the expanded AR polynomial
    fn ar_lag(&self) -> usize {
        self.spec.order.p + self.spec.seasonal_order.p * self.spec.seasonal_order.period
    }

    /// Minimum series length this specification can be estimated from
    ///
    /// Conditional residuals start after the full seasonal AR lag and must
    /// outnumber the estimated parameters, so `(1, 1, 1)` needs 6
    /// observations and `(1, 1, 1)x(1, 1, 1, 12)` needs 32.
    pub fn min_observations(&self) -> usize {
        self.min_observations
    }

    fn required_observations(spec: SarimaSpec) -> Option<usize> {
        let seasonal = spec.seasonal_order;
        let ar_lag = seasonal.p.checked_mul(seasonal.period)?.checked_add(spec.order.p)?;
        let loss = seasonal.d.checked_mul(seasonal.period)?.checked_add(spec.order.d)?;
        let params = spec.coefficient_count() + 1;
        loss.checked_add(ar_lag)?.checked_add(params + 1)
    }

    fn apply_differencing(&self, data: &[f64]) -> Vec<f64> {
        let seasonal = self.spec.seasonal_order;
        let regular = difference(data, self.spec.order.d);
        seasonal_difference(&regular, seasonal.period, seasonal.d)
    }

    /// Map a search point onto stationary AR and invertible MA coefficients
    fn constrain(&self, unconstrained: &[f64]) -> Vec<f64> {
        let (ar, ma, sar, sma) = self.unpack(unconstrained);
        let mut params = constrain_stationary(ar);
        params.extend(constrain_stationary(ma).iter().map(|c| -c));
        params.extend(constrain_stationary(sar));
        params.extend(constrain_stationary(sma).iter().map(|c| -c));
        params
    }

    /// Split a flat parameter vector into `(ar, ma, seasonal_ar, seasonal_ma)`
    fn unpack<'a>(&self, params: &'a [f64]) -> (&'a [f64], &'a [f64], &'a [f64], &'a [f64]) {
        let order = self.spec.order;
        let seasonal = self.spec.seasonal_order;
        let (ar, rest) = params.split_at(order.p);
        let (ma, rest) = rest.split_at(order.q);
        let (sar, sma) = rest.split_at(seasonal.p);
        (ar, ma, sar, &sma[..seasonal.q])
    }

    fn polynomials(&self, ar: &[f64], ma: &[f64], sar: &[f64], sma: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let period = self.spec.seasonal_order.period;
        let ar_poly = poly_mul(&ar_polynomial(ar, 1), &ar_polynomial(sar, period));
        let ma_poly = poly_mul(&ma_polynomial(ma, 1), &ma_polynomial(sma, period));
        (ar_poly, ma_poly)
    }

    /// Full AR and MA polynomials of the fitted model on the differenced scale
    fn fitted_polynomials(&self) -> (Vec<f64>, Vec<f64>) {
        self.polynomials(
            &self.ar_coeffs,
            &self.ma_coeffs,
            &self.seasonal_ar_coeffs,
            &self.seasonal_ma_coeffs,
        )
    }

    /// Conditional residuals for the given polynomials
    fn conditional_residuals(w: &[f64], ar_poly: &[f64], ma_poly: &[f64]) -> Vec<f64> {
        let start = ar_poly.len() - 1;
        let mut residuals = vec![0.0; w.len()];

        for t in start..w.len() {
            let mut value = w[t];
            for (i, a) in ar_poly.iter().enumerate().skip(1) {
                value += a * w[t - i];
            }
            for (j, m) in ma_poly.iter().enumerate().skip(1) {
                if j > t {
                    break;
                }
                value -= m * residuals[t - j];
            }
            residuals[t] = value;
        }

        residuals
    }

    fn sum_of_squares(&self, unconstrained: &[f64]) -> f64 {
        let params = self.constrain(unconstrained);
        let (ar, ma, sar, sma) = self.unpack(&params);
        let (ar_poly, ma_poly) = self.polynomials(ar, ma, sar, sma);
        let start = ar_poly.len() - 1;
        Self::conditional_residuals(&self.differenced_data, &ar_poly, &ma_poly)[start..]
            .iter()
            .map(|e| e * e)
            .sum()
    }

    /// Get model specification
    pub fn params(&self) -> SarimaSpec {
        self.spec
    }

    /// Get non-seasonal AR coefficients
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coeffs
    }

    /// Get non-seasonal MA coefficients
    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma_coeffs
    }

    /// Get seasonal AR coefficients
    pub fn seasonal_ar_coefficients(&self) -> &[f64] {
        &self.seasonal_ar_coeffs
    }

    /// Get seasonal MA coefficients
    pub fn seasonal_ma_coefficients(&self) -> &[f64] {
        &self.seasonal_ma_coeffs
    }

    /// Get innovation variance
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Number of residuals entering the likelihood
    pub fn nobs(&self) -> usize {
        self.nobs
    }

    /// Whether the optimiser met its tolerance during the last fit
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Optimiser iterations used by the last fit
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    fn parameter_count(&self) -> usize {
        self.spec.coefficient_count() + 1
    }
}

impl Predictor for Sarima {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        self.fitted = false;

        let min_required = self.min_observations;
        if data.len() < min_required {
            return Err(TsError::InsufficientData {
                required: min_required,
                actual: data.len(),
            });
        }

        // Check for invalid values
        if data.iter().any(|x| x.is_nan() || x.is_infinite()) {
            return Err(TsError::InvalidData(
                "Data contains NaN or infinite values".to_string(),
            ));
        }

        self.original_data = data.to_vec();
        self.differenced_data = self.apply_differencing(data);

        let seasonal = self.spec.seasonal_order;
        let mut start = unconstrain_stationary(&yule_walker(&self.differenced_data, self.spec.order.p));
        start.resize(self.spec.coefficient_count(), 0.0);

        let minimum = self
            .optimizer
            .minimize(|params| self.sum_of_squares(params), &start);

        if !minimum.value.is_finite() {
            return Err(TsError::NumericalError(format!(
                "conditional sum of squares is not finite for {}",
                self.spec
            )));
        }
        if !minimum.converged {
            tracing::warn!(
                spec = %self.spec,
                iterations = minimum.iterations,
                "optimizer budget exhausted"
            );
            return Err(TsError::ConvergenceFailure {
                iterations: minimum.iterations,
            });
        }

        let params = self.constrain(&minimum.point);
        let (ar, ma, sar, sma) = self.unpack(&params);
        self.ar_coeffs = ar.to_vec();
        self.ma_coeffs = ma.to_vec();
        self.seasonal_ar_coeffs = sar.to_vec();
        self.seasonal_ma_coeffs = sma.to_vec();
        debug_assert_eq!(self.seasonal_ar_coeffs.len(), seasonal.p);

        let (ar_poly, ma_poly) = self.fitted_polynomials();
        self.residuals = Self::conditional_residuals(&self.differenced_data, &ar_poly, &ma_poly);

        self.nobs = self.differenced_data.len() - self.ar_lag();
        let n = self.nobs as f64;
        self.sigma2 = (minimum.value / n).max(MIN_VARIANCE);
        self.log_likelihood =
            -0.5 * n * ((2.0 * std::f64::consts::PI).ln() + self.sigma2.ln() + 1.0);
        self.iterations = minimum.iterations;
        self.converged = minimum.converged;

        tracing::debug!(
            spec = %self.spec,
            sigma2 = self.sigma2,
            iterations = self.iterations,
            "SARIMA fit complete"
        );

        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(TsError::NotFitted);
        }

        if steps == 0 {
            return Ok(Vec::new());
        }

        let (ar_poly, ma_poly) = self.fitted_polynomials();
        let m = self.differenced_data.len();
        let mut extended = self.differenced_data.clone();
        let mut extended_residuals = self.residuals.clone();

        // Forecast on the differenced scale with zero future innovations
        for _ in 0..steps {
            let t = extended.len();
            let mut forecast = 0.0;
            for (i, a) in ar_poly.iter().enumerate().skip(1) {
                forecast -= a * extended[t - i];
            }
            for (j, c) in ma_poly.iter().enumerate().skip(1) {
                if j > t {
                    break;
                }
                forecast += c * extended_residuals[t - j];
            }
            extended.push(forecast);
            extended_residuals.push(0.0);
        }

        // Integrate through (1 - B)^d (1 - B^s)^D
        let seasonal = self.spec.seasonal_order;
        let delta = differencing_polynomial(self.spec.order.d, seasonal.d, seasonal.period);
        let mut levels = self.original_data.clone();
        let mut forecasts = Vec::with_capacity(steps);
        for &w in &extended[m..] {
            let t = levels.len();
            let mut value = w;
            for (k, c) in delta.iter().enumerate().skip(1) {
                value -= c * levels[t - k];
            }
            levels.push(value);
            forecasts.push(value);
        }

        Ok(forecasts)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

impl FittedModel for Sarima {
    fn spec(&self) -> SarimaSpec {
        self.spec
    }

    fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    fn aic(&self) -> f64 {
        -2.0 * self.log_likelihood + 2.0 * self.parameter_count() as f64
    }

    fn bic(&self) -> f64 {
        -2.0 * self.log_likelihood + self.parameter_count() as f64 * (self.nobs as f64).ln()
    }

    fn forecast_std_errors(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(TsError::NotFitted);
        }

        // Psi weights of theta(B)Theta(B^s) / (phi(B)Phi(B^s) delta(B))
        let (ar_poly, ma_poly) = self.fitted_polynomials();
        let seasonal = self.spec.seasonal_order;
        let delta = differencing_polynomial(self.spec.order.d, seasonal.d, seasonal.period);
        let full_ar = poly_mul(&ar_poly, &delta);

        let mut psi = Vec::with_capacity(steps);
        for j in 0..steps {
            let mut value = if j == 0 {
                1.0
            } else {
                ma_poly.get(j).copied().unwrap_or(0.0)
            };
            for i in 1..=j.min(full_ar.len() - 1) {
                value -= full_ar[i] * psi[j - i];
            }
            psi.push(value);
        }

        let mut cumulative = 0.0;
        Ok(psi
            .iter()
            .map(|p| {
                cumulative += p * p;
                (self.sigma2 * cumulative).sqrt()
            })
            .collect())
    }
}

/// Builds [`Sarima`] models for a [`SarimaSpec`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SarimaFitter {
    optimizer: NelderMead,
}

impl SarimaFitter {
    pub fn new(optimizer: NelderMead) -> Self {
        Self { optimizer }
    }
}

impl ModelFitter for SarimaFitter {
    type Model = Sarima;

    fn fit(&self, data: &[f64], spec: SarimaSpec) -> Result<Sarima> {
        let mut model = Sarima::new(spec)?.with_optimizer(self.optimizer);
        model.fit(data)?;
        Ok(model)
    }
}
