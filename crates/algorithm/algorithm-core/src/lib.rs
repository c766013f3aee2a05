//! Algorithm Core Implementations
//!
//! This crate provides the seasonal ARIMA estimator and the numerical
//! utilities it is built on:
//!
//! - [`regression`]: SARIMA model and its [`ModelFitter`](algorithm_spi::ModelFitter)
//! - [`utils`]: differencing, lag polynomials, Nelder-Mead minimisation
//!
//! ## Example
//!
//! ```rust
//! use algorithm_core::prelude::*;
//!
//! let data: Vec<f64> = (1..=20).map(|x| x as f64 + (x as f64 * 0.7).sin()).collect();
//! let model = SarimaFitter::default()
//!     .fit(&data, SarimaSpec::arima(1, 1, 1))
//!     .unwrap();
//! let forecast = model.predict(1).unwrap();
//! let std_errors = model.forecast_std_errors(1).unwrap();
//! ```

pub mod regression;
pub mod utils;

// Re-export from SPI
pub use algorithm_spi::{
    ArimaOrder, FittedModel, ModelFitter, Predictor, Result, SarimaSpec, SeasonalOrder, TsError,
};

// Re-export implementations for convenience
pub use regression::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use algorithm_spi::{FittedModel, ModelFitter, Predictor};
    pub use algorithm_spi::{ArimaOrder, SarimaSpec, SeasonalOrder};
    // Regression
    pub use crate::regression::{Sarima, SarimaFitter};
    // Optimisation
    pub use crate::utils::optimize::NelderMead;
    // Error types
    pub use algorithm_spi::{Result, TsError};
}
