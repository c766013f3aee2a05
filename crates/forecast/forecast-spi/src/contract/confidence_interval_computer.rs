//! Trait for confidence interval computation

use crate::model::ConfidenceInterval;

/// Trait for confidence interval computation
pub trait ConfidenceIntervalComputer: Send + Sync {
    /// Compute two-sided intervals around `forecast` from the standard
    /// error of each step
    fn compute(
        &self,
        forecast: &[f64],
        std_errors: &[f64],
        confidence_level: f64,
    ) -> ConfidenceInterval;
}
