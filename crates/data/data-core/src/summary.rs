//! Descriptive statistics of a revenue series

use serde::{Deserialize, Serialize};

/// Count, mean, spread and range of a set of values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl SeriesSummary {
    /// Summarise `values`. An empty slice yields NaN statistics.
    pub fn from_values(values: &[f64]) -> Self {
        let count = values.len();
        if count == 0 {
            return Self {
                count,
                mean: f64::NAN,
                std_dev: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
            };
        }

        let mean = values.iter().sum::<f64>() / count as f64;
        let std_dev = if count > 1 {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (count - 1) as f64).sqrt()
        } else {
            0.0
        };
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        Self {
            count,
            mean,
            std_dev,
            min,
            max,
        }
    }

    /// Percentage by which `value` deviates from the mean.
    ///
    /// `None` when the mean is zero or undefined.
    pub fn pct_from_mean(&self, value: f64) -> Option<f64> {
        if self.mean == 0.0 || !self.mean.is_finite() {
            return None;
        }
        Some((value - self.mean) / self.mean * 100.0)
    }
}
