//! Revenue Data Core
//!
//! Loads monthly summaries from a JSON chunk document and prepares them as a
//! month-indexed series.

pub mod chunks;
pub mod series;
pub mod summary;

pub use chunks::{JsonChunkSource, MONTHLY_SUMMARY};
pub use series::{TimeSeries, MIN_OBSERVATIONS};
pub use summary::SeriesSummary;

pub use data_spi::{DataError, Month, MonthlyRevenue, Result, RevenueSource};
