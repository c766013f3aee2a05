//! Revenue source trait definition.

use crate::error::Result;
use crate::model::MonthlyRevenue;

/// Trait for sources of monthly revenue records.
///
/// Implementations return records sorted ascending by month string. A source
/// with no matching records returns an empty vector rather than an error.
pub trait RevenueSource: Send + Sync {
    /// Data source name.
    fn name(&self) -> &str;

    /// Load all monthly revenue records.
    fn load(&self) -> Result<Vec<MonthlyRevenue>>;
}
