//! Trait for constructing fitted models

use crate::contract::FittedModel;
use crate::error::Result;
use crate::model::SarimaSpec;

/// Fits a model of a given specification to a series.
///
/// Implementations must be deterministic: the same data and specification
/// yield the same fitted model.
pub trait ModelFitter {
    /// Model type produced by this fitter
    type Model: FittedModel;

    /// Estimate a model of `spec` from `data`
    fn fit(&self, data: &[f64], spec: SarimaSpec) -> Result<Self::Model>;
}
