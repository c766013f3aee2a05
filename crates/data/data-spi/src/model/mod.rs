//! Data models for monthly revenue series.

mod month;
mod revenue;

pub use month::Month;
pub use revenue::MonthlyRevenue;
