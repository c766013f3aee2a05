//! Algorithm Service Provider Interface
//!
//! Defines core traits, model orders and error types for time series
//! estimators.
//!
//! This crate provides the foundational abstractions that the estimator
//! implementations adhere to:
//!
//! - [`Predictor`]: fit-predict interface shared by every model
//! - [`FittedModel`]: a fitted model that reports information criteria and
//!   forecast standard errors
//! - [`ModelFitter`]: builds a [`FittedModel`] from data and a [`SarimaSpec`]
//! - [`ArimaOrder`], [`SeasonalOrder`], [`SarimaSpec`]: model orders
//! - [`TsError`]: standardized error type for all algorithm operations
//! - [`Result`]: convenient result type alias

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{FittedModel, ModelFitter, Predictor};
pub use error::{Result, TsError};
pub use model::{ArimaOrder, SarimaSpec, SeasonalOrder};
