//! Forecast error types

use algorithm_spi::{SarimaSpec, TsError};
use data_spi::DataError;
use thiserror::Error;

/// Errors that can occur during a forecast run
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Loading or preparing the input series failed
    #[error(transparent)]
    Data(#[from] DataError),

    /// Model estimation or prediction failed
    #[error(transparent)]
    Model(#[from] TsError),

    /// Both the requested model and the fallback model failed to fit
    #[error("Model fitting failed for {requested} and for the fallback model: {source}")]
    FitFailed {
        requested: SarimaSpec,
        source: TsError,
    },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Output file could not be written or read
    #[error("Output error for {path}: {message}")]
    Output { path: String, message: String },

    /// Forecast result could not be (de)serialised
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Chart rendering failed
    #[error("Chart error: {0}")]
    Chart(String),
}

impl ForecastError {
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
