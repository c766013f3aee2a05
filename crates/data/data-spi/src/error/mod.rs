//! Error types for revenue data

mod data_error;

pub use data_error::{DataError, Result};
