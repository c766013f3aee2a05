//! Month-indexed revenue series

use std::collections::BTreeMap;

use data_spi::{DataError, Month, MonthlyRevenue, Result};

use crate::summary::SeriesSummary;

/// Fewest observations a series may hold
pub const MIN_OBSERVATIONS: usize = 2;

/// Revenue values indexed by strictly increasing month.
///
/// Gaps between months are kept as they are: nothing is resampled or
/// interpolated.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    points: Vec<(Month, f64)>,
}

impl TimeSeries {
    /// Parse, validate and sort raw records.
    ///
    /// # Errors
    ///
    /// * [`DataError::InvalidDate`] for a month that does not parse
    /// * [`DataError::InvalidValue`] for negative or non-finite revenue
    /// * [`DataError::DuplicateMonth`] when a month occurs twice
    /// * [`DataError::InsufficientData`] for fewer than [`MIN_OBSERVATIONS`]
    pub fn from_records(records: &[MonthlyRevenue]) -> Result<Self> {
        let mut indexed = BTreeMap::new();

        for record in records {
            let month = record.parse_month()?;
            if !record.revenue.is_finite() || record.revenue < 0.0 {
                return Err(DataError::InvalidValue {
                    month: record.month.clone(),
                    value: record.revenue,
                });
            }
            if indexed.insert(month, record.revenue).is_some() {
                return Err(DataError::DuplicateMonth(month.to_string()));
            }
        }

        if indexed.len() < MIN_OBSERVATIONS {
            return Err(DataError::InsufficientData {
                required: MIN_OBSERVATIONS,
                actual: indexed.len(),
            });
        }

        let series = Self {
            points: indexed.into_iter().collect(),
        };
        let gaps = series.missing_months();
        if gaps > 0 {
            tracing::debug!(gaps, "series has months without records");
        }
        Ok(series)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(Month, f64)] {
        &self.points
    }

    pub fn months(&self) -> Vec<Month> {
        self.points.iter().map(|(m, _)| *m).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, v)| *v).collect()
    }

    pub fn first_month(&self) -> Option<Month> {
        self.points.first().map(|(m, _)| *m)
    }

    pub fn last_month(&self) -> Option<Month> {
        self.points.last().map(|(m, _)| *m)
    }

    /// Month following the last observation
    pub fn next_month(&self) -> Option<Month> {
        self.last_month().map(|m| m.succ())
    }

    /// Months absent between the first and last observation
    pub fn missing_months(&self) -> usize {
        match (self.first_month(), self.last_month()) {
            (Some(first), Some(last)) => {
                (first.months_until(&last) + 1) as usize - self.points.len()
            }
            _ => 0,
        }
    }

    /// Summary statistics of the values
    pub fn summary(&self) -> SeriesSummary {
        SeriesSummary::from_values(&self.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(items: &[(&str, f64)]) -> Vec<MonthlyRevenue> {
        items
            .iter()
            .map(|(m, v)| MonthlyRevenue::new(*m, *v))
            .collect()
    }

    #[test]
    fn test_from_records_sorts_by_month() {
        let series = TimeSeries::from_records(&records(&[
            ("2024-03", 30.0),
            ("2024-01", 10.0),
            ("2024-02", 20.0),
        ]))
        .unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.values(), vec![10.0, 20.0, 30.0]);
        assert_eq!(series.first_month().unwrap().to_string(), "2024-01");
        assert_eq!(series.next_month().unwrap().to_string(), "2024-04");
    }

    #[test]
    fn test_full_dates_collapse_to_months() {
        let series =
            TimeSeries::from_records(&records(&[("2024-01-31", 1.0), ("2024-02-29", 2.0)]))
                .unwrap();
        assert_eq!(series.months()[1], Month::new(2024, 2).unwrap());
    }

    #[test]
    fn test_gaps_are_kept() {
        let series =
            TimeSeries::from_records(&records(&[("2024-01", 1.0), ("2024-04", 4.0)])).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.missing_months(), 2);
    }

    #[test]
    fn test_empty_is_insufficient() {
        assert_eq!(
            TimeSeries::from_records(&[]),
            Err(DataError::InsufficientData {
                required: 2,
                actual: 0
            })
        );
    }

    #[test]
    fn test_single_observation_is_insufficient() {
        assert_eq!(
            TimeSeries::from_records(&records(&[("2024-01", 1.0)])),
            Err(DataError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_duplicate_month() {
        let result = TimeSeries::from_records(&records(&[
            ("2024-01", 1.0),
            ("2024-02", 2.0),
            ("2024-01-15", 3.0),
        ]));
        assert_eq!(result, Err(DataError::DuplicateMonth("2024-01".to_string())));
    }

    #[test]
    fn test_invalid_month() {
        let result = TimeSeries::from_records(&records(&[("2024-01", 1.0), ("Feb", 2.0)]));
        assert_eq!(result, Err(DataError::InvalidDate("Feb".to_string())));
    }

    #[test]
    fn test_negative_revenue() {
        let result = TimeSeries::from_records(&records(&[("2024-01", 1.0), ("2024-02", -2.0)]));
        assert!(matches!(result, Err(DataError::InvalidValue { .. })));
    }

    #[test]
    fn test_non_finite_revenue() {
        for bad in [f64::NAN, f64::INFINITY] {
            let result =
                TimeSeries::from_records(&records(&[("2024-01", 1.0), ("2024-02", bad)]));
            assert!(matches!(result, Err(DataError::InvalidValue { .. })));
        }
    }

    #[test]
    fn test_zero_revenue_is_valid() {
        let series =
            TimeSeries::from_records(&records(&[("2024-01", 0.0), ("2024-02", 0.0)])).unwrap();
        assert_eq!(series.values(), vec![0.0, 0.0]);
    }
}
