//! Contract traits for algorithm implementations
//!
//! - [`Predictor`]: the fit-predict interface
//! - [`FittedModel`]: a fitted model with information criteria and
//!   forecast uncertainty
//! - [`ModelFitter`]: constructs fitted models from a specification

mod model_fitter;
mod predictor;

pub use model_fitter::ModelFitter;
pub use predictor::{FittedModel, Predictor};
