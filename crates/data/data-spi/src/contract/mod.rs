//! Contracts for revenue data sources

mod revenue_source;

pub use revenue_source::RevenueSource;
