//! Statistical models for time series forecasting
//!
//! ## Algorithms
//!
//! - **SARIMA**: Seasonal AutoRegressive Integrated Moving Average

pub mod sarima;

pub use sarima::{Sarima, SarimaFitter};
