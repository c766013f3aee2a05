//! Model order types
//!
//! Orders display as Python-style tuples, `(1, 1, 1)` and `(1, 1, 1, 12)`,
//! which is also the form they take in persisted reports.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::TsError;

/// Non-seasonal order `(p, d, q)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArimaOrder {
    /// Autoregressive order
    pub p: usize,
    /// Differencing order
    pub d: usize,
    /// Moving-average order
    pub q: usize,
}

impl ArimaOrder {
    pub const fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }
}

/// Seasonal order `(P, D, Q, s)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SeasonalOrder {
    /// Seasonal autoregressive order
    pub p: usize,
    /// Seasonal differencing order
    pub d: usize,
    /// Seasonal moving-average order
    pub q: usize,
    /// Season length in observations
    pub period: usize,
}

impl SeasonalOrder {
    pub const fn new(p: usize, d: usize, q: usize, period: usize) -> Self {
        Self { p, d, q, period }
    }

    /// The degenerate `(0, 0, 0, 0)` order: no seasonal component.
    pub const fn none() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Whether any seasonal term is requested.
    pub fn is_seasonal(&self) -> bool {
        self.p > 0 || self.d > 0 || self.q > 0
    }
}

/// Full SARIMA specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SarimaSpec {
    pub order: ArimaOrder,
    pub seasonal_order: SeasonalOrder,
}

impl SarimaSpec {
    pub const fn new(order: ArimaOrder, seasonal_order: SeasonalOrder) -> Self {
        Self {
            order,
            seasonal_order,
        }
    }

    /// Non-seasonal specification.
    pub const fn arima(p: usize, d: usize, q: usize) -> Self {
        Self::new(ArimaOrder::new(p, d, q), SeasonalOrder::none())
    }

    /// Number of estimated coefficients, excluding the innovation variance.
    pub fn coefficient_count(&self) -> usize {
        self.order.p + self.order.q + self.seasonal_order.p + self.seasonal_order.q
    }

    /// Observations consumed by regular and seasonal differencing.
    ///
    /// Saturates at `usize::MAX` for periods no series could cover.
    pub fn differencing_loss(&self) -> usize {
        self.seasonal_order
            .d
            .saturating_mul(self.seasonal_order.period)
            .saturating_add(self.order.d)
    }
}

impl fmt::Display for ArimaOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.p, self.d, self.q)
    }
}

impl fmt::Display for SeasonalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.p, self.d, self.q, self.period)
    }
}

impl fmt::Display for SarimaSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SARIMA{}x{}", self.order, self.seasonal_order)
    }
}

/// Parse `(a, b, c)` or `a,b,c` into exactly `N` integers.
fn parse_tuple<const N: usize>(s: &str, name: &str) -> Result<[usize; N], TsError> {
    let trimmed = s.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(TsError::invalid_parameter(
            name,
            format!("expected {} comma-separated integers, got '{}'", N, s),
        ));
    }

    let mut values = [0usize; N];
    for (slot, part) in values.iter_mut().zip(parts) {
        *slot = part.parse().map_err(|_| {
            TsError::invalid_parameter(name, format!("'{}' is not a non-negative integer", part))
        })?;
    }
    Ok(values)
}

impl FromStr for ArimaOrder {
    type Err = TsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [p, d, q] = parse_tuple::<3>(s, "order")?;
        Ok(Self::new(p, d, q))
    }
}

impl FromStr for SeasonalOrder {
    type Err = TsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [p, d, q, period] = parse_tuple::<4>(s, "seasonal_order")?;
        Ok(Self::new(p, d, q, period))
    }
}

macro_rules! tuple_string_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

tuple_string_serde!(ArimaOrder);
tuple_string_serde!(SeasonalOrder);
