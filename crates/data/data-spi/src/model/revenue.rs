//! Monthly revenue record.

use serde::{Deserialize, Serialize};

use super::Month;
use crate::error::Result;

/// Revenue total for one month, as found in the input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Month label, `YYYY-MM`
    pub month: String,
    /// Revenue total for the month
    pub revenue: f64,
}

impl MonthlyRevenue {
    /// Create a new record.
    pub fn new(month: impl Into<String>, revenue: f64) -> Self {
        Self {
            month: month.into(),
            revenue,
        }
    }

    /// Parse the month label.
    pub fn parse_month(&self) -> Result<Month> {
        self.month.parse()
    }
}
