//! Persisted forecast result
//!
//! Serialises to the report document:
//!
//! ```json
//! {
//!   "forecast_date": "2025-01",
//!   "point_forecast": 15321.7,
//!   "confidence_interval": { "lower": 12001.2, "upper": 18642.2 },
//!   "model_info": {
//!     "type": "SARIMA",
//!     "order": "(1, 1, 1)",
//!     "seasonal_order": "(0, 0, 0, 0)",
//!     "aic": 181.4,
//!     "bic": 182.6
//!   },
//!   "historical_data": [ { "month": "2024-01", "revenue": 12000.0 } ]
//! }
//! ```

use algorithm_spi::{ArimaOrder, SarimaSpec, SeasonalOrder};
use data_spi::{Month, MonthlyRevenue};
use serde::{Deserialize, Serialize};

/// Model family written to `model_info.type`
const MODEL_TYPE: &str = "SARIMA";

/// Lower and upper bound of a single-step interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalBounds {
    pub lower: f64,
    pub upper: f64,
}

impl IntervalBounds {
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Description of the model that produced a forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub order: ArimaOrder,
    pub seasonal_order: SeasonalOrder,
    pub aic: f64,
    pub bic: f64,
}

impl ModelInfo {
    pub fn sarima(spec: SarimaSpec, aic: f64, bic: f64) -> Self {
        Self {
            kind: MODEL_TYPE.to_string(),
            order: spec.order,
            seasonal_order: spec.seasonal_order,
            aic,
            bic,
        }
    }

    /// Orders as a specification
    pub fn spec(&self) -> SarimaSpec {
        SarimaSpec::new(self.order, self.seasonal_order)
    }
}

/// One forecast run's result, written once as the final step of the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub forecast_date: Month,
    pub point_forecast: f64,
    pub confidence_interval: IntervalBounds,
    pub model_info: ModelInfo,
    pub historical_data: Vec<MonthlyRevenue>,
}
