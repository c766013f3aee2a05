//! Input to chart renderers

use data_spi::Month;

/// Historical series plus the forecast to highlight
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Observed values in month order
    pub history: Vec<(Month, f64)>,
    /// Month being forecast
    pub forecast_month: Month,
    /// Point forecast
    pub forecast: f64,
    /// Lower interval bound
    pub lower: f64,
    /// Upper interval bound
    pub upper: f64,
    /// Coverage of the interval, for labelling
    pub confidence_level: f64,
}

impl ChartData {
    /// Smallest and largest value across history and interval
    pub fn value_range(&self) -> (f64, f64) {
        self.history.iter().map(|(_, v)| *v).fold(
            (self.lower.min(self.forecast), self.upper.max(self.forecast)),
            |(lo, hi), v| (lo.min(v), hi.max(v)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range_spans_history_and_interval() {
        let data = ChartData {
            history: vec![
                (Month::new(2024, 1).unwrap(), 50.0),
                (Month::new(2024, 2).unwrap(), 80.0),
            ],
            forecast_month: Month::new(2024, 3).unwrap(),
            forecast: 70.0,
            lower: 40.0,
            upper: 100.0,
            confidence_level: 0.95,
        };
        assert_eq!(data.value_range(), (40.0, 100.0));
    }
}
