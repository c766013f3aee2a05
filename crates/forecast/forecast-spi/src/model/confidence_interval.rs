//! Confidence interval model

use serde::{Deserialize, Serialize};

/// Point forecasts with lower and upper bounds at each step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Point forecast
    pub forecast: Vec<f64>,
    /// Lower bound of confidence interval
    pub lower: Vec<f64>,
    /// Upper bound of confidence interval
    pub upper: Vec<f64>,
    /// Confidence level (e.g., 0.95 for 95%)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Number of forecast steps
    pub fn len(&self) -> usize {
        self.forecast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }

    /// Whether every point forecast lies within its bounds
    pub fn is_consistent(&self) -> bool {
        self.forecast.len() == self.lower.len()
            && self.forecast.len() == self.upper.len()
            && self
                .forecast
                .iter()
                .zip(self.lower.iter().zip(self.upper.iter()))
                .all(|(f, (l, u))| l <= f && f <= u)
    }
}
