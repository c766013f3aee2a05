//! Revenue Data Service Provider Interface
//!
//! Defines the record types, the calendar month index and the errors shared
//! by revenue data sources and the series preparer.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::RevenueSource;
pub use error::{DataError, Result};
pub use model::{Month, MonthlyRevenue};

// ============================================================================
// Tests
// ============================================================================
