//! Model module containing order and specification types

mod order;

pub use order::{ArimaOrder, SarimaSpec, SeasonalOrder};
