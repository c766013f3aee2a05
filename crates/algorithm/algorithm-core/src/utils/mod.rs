//! Numerical utilities shared by the estimators
//!
//! - [`preprocessing`]: differencing and lag-polynomial algebra
//! - [`optimize`]: derivative-free minimisation

pub mod optimize;
pub mod preprocessing;

pub use optimize::{Minimum, NelderMead};
pub use preprocessing::*;
