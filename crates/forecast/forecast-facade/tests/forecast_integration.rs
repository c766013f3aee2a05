//! Integration tests for the forecast run

use std::path::Path;

use forecast_facade::prelude::*;
use forecast_facade::{ChartData, DataError, TsError};
use tempfile::{tempdir, TempDir};

const REVENUE_2024: [f64; 12] = [
    12450.25, 11890.1, 13250.75, 12980.4, 14120.9, 13875.3, 14560.0, 15010.65, 14230.8,
    14890.15, 15620.4, 17105.95,
];

fn chunk_document(months: &[(String, f64)]) -> String {
    let mut chunks = vec![serde_json::json!({
        "id": "chunk_0",
        "content": "Customer purchased 2 items",
        "metadata": {"type": "transaction", "date": "2024-01-03"}
    })];
    for (month, revenue) in months {
        chunks.push(serde_json::json!({
            "id": format!("chunk_monthly_{}", month),
            "content": format!("Monthly summary for {}", month),
            "metadata": {"type": "monthly_summary", "month": month, "revenue": revenue, "orders": 40}
        }));
    }
    // Monthly chunks arrive newest first
    chunks[1..].reverse();
    serde_json::Value::Array(chunks).to_string()
}

fn year_2024() -> Vec<(String, f64)> {
    REVENUE_2024
        .iter()
        .enumerate()
        .map(|(i, v)| (format!("2024-{:02}", i + 1), *v))
        .collect()
}

fn write_input(dir: &TempDir, months: &[(String, f64)]) -> std::path::PathBuf {
    let path = dir.path().join("data_chunks.json");
    std::fs::write(&path, chunk_document(months)).unwrap();
    path
}

fn config(dir: &TempDir, input: &Path) -> ForecastConfig {
    ForecastConfig::builder()
        .input_path(input)
        .output_path(dir.path().join("out").join("forecast_result.json"))
        .no_chart()
        .build()
        .unwrap()
}

struct FailingRenderer;

impl ChartRenderer for FailingRenderer {
    fn render(&self, _data: &ChartData, _path: &Path) -> Result<()> {
        Err(ForecastError::Chart("renderer unavailable".to_string()))
    }
}

#[test]
fn test_twelve_months_forecast_next_january() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, &year_2024());

    let report = ForecastRunner::new(config(&dir, &input)).run().unwrap();
    let result = &report.result;

    assert_eq!(result.forecast_date.to_string(), "2025-01");
    assert!(result.point_forecast.is_finite());
    assert!(result.confidence_interval.lower <= result.point_forecast);
    assert!(result.point_forecast <= result.confidence_interval.upper);
    assert_eq!(result.model_info.kind, "SARIMA");
    assert_eq!(result.model_info.order.to_string(), "(1, 1, 1)");
    assert_eq!(result.model_info.seasonal_order.to_string(), "(0, 0, 0, 0)");
    assert!(result.model_info.aic.is_finite());
    assert!(result.model_info.bic.is_finite());
    assert!(!report.used_fallback);

    // History is sorted and unchanged
    assert_eq!(result.historical_data.len(), 12);
    assert_eq!(result.historical_data[0], MonthlyRevenue::new("2024-01", 12450.25));
    assert_eq!(result.historical_data[11], MonthlyRevenue::new("2024-12", 17105.95));

    assert_eq!(report.summary.count, 12);
    assert_eq!(report.summary.max, 17105.95);
    assert!(report.pct_from_mean.is_some());
}

#[test]
fn test_written_result_reads_back_identically() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, &year_2024());

    let report = ForecastRunner::new(config(&dir, &input)).run().unwrap();
    assert!(report.output_path.exists());

    let back = read_forecast(&report.output_path).unwrap();
    assert_eq!(back, report.result);
}

#[test]
fn test_runs_are_deterministic() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, &year_2024());

    let first = ForecastRunner::new(config(&dir, &input)).run().unwrap();
    let second = ForecastRunner::new(config(&dir, &input)).run().unwrap();

    assert_eq!(first.result.point_forecast, second.result.point_forecast);
    assert_eq!(first.result.confidence_interval, second.result.confidence_interval);
    assert_eq!(first.result.model_info.aic, second.result.model_info.aic);
    assert_eq!(first.result.model_info.bic, second.result.model_info.bic);
}

#[test]
fn test_seasonal_request_dropped_for_short_series() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, &year_2024());
    let config = ForecastConfig::builder()
        .input_path(&input)
        .output_path(dir.path().join("result.json"))
        .no_chart()
        .seasonal_order(SeasonalOrder::new(0, 1, 1, 4))
        .build()
        .unwrap();

    let report = ForecastRunner::new(config).run().unwrap();
    assert_eq!(report.result.model_info.seasonal_order, SeasonalOrder::none());
}

#[test]
fn test_default_seasonal_request_falls_back_below_thirty_two_months() {
    let dir = tempdir().unwrap();
    let mut month = Month::new(2022, 1).unwrap();
    let months: Vec<(String, f64)> = (0..28)
        .map(|i| {
            let t = i as f64;
            let value = 10000.0 + 150.0 * t + 800.0 * (t * std::f64::consts::PI / 6.0).sin()
                + 60.0 * (t * 2.3).cos();
            let entry = (month.to_string(), value);
            month = month.succ();
            entry
        })
        .collect();
    let input = write_input(&dir, &months);

    let report = ForecastRunner::new(config(&dir, &input)).run().unwrap();

    // 28 months clear the seasonal threshold, so the seasonal model is tried and rejected
    assert!(report.used_fallback);
    assert_eq!(report.result.model_info.seasonal_order, SeasonalOrder::none());
    assert_eq!(report.result.model_info.order, ArimaOrder::new(1, 1, 1));
    assert_eq!(report.result.forecast_date.to_string(), "2025-01");
}

#[test]
fn test_missing_input_file_writes_nothing() {
    let dir = tempdir().unwrap();
    let config = config(&dir, &dir.path().join("absent.json"));

    let result = ForecastRunner::new(config.clone()).run();
    assert!(matches!(
        result,
        Err(ForecastError::Data(DataError::FileNotFound(_)))
    ));
    assert!(!config.output_path.exists());
}

#[test]
fn test_empty_match_is_insufficient_data() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, &[]);
    let config = config(&dir, &input);

    let result = ForecastRunner::new(config.clone()).run();
    assert!(matches!(
        result,
        Err(ForecastError::Data(DataError::InsufficientData {
            required: 2,
            actual: 0
        }))
    ));
    assert!(!config.output_path.exists());
}

#[test]
fn test_malformed_input_is_fatal() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.json");
    std::fs::write(&input, "[{\"metadata\": ").unwrap();

    let result = ForecastRunner::new(config(&dir, &input)).run();
    assert!(matches!(
        result,
        Err(ForecastError::Data(DataError::JsonError(_)))
    ));
}

#[test]
fn test_duplicate_month_is_fatal() {
    let dir = tempdir().unwrap();
    let mut months = year_2024();
    months.push(("2024-06".to_string(), 1.0));
    let input = write_input(&dir, &months);

    let result = ForecastRunner::new(config(&dir, &input)).run();
    assert!(matches!(
        result,
        Err(ForecastError::Data(DataError::DuplicateMonth(_)))
    ));
}

#[test]
fn test_fallback_used_when_requested_model_cannot_be_fitted() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, &year_2024()[..8]);
    let config = ForecastConfig::builder()
        .input_path(&input)
        .output_path(dir.path().join("result.json"))
        .no_chart()
        .order(ArimaOrder::new(3, 1, 3))
        .build()
        .unwrap();

    let report = ForecastRunner::new(config).run().unwrap();
    assert!(report.used_fallback);
    assert_eq!(report.result.model_info.order, ArimaOrder::new(1, 1, 1));
    assert_eq!(report.result.forecast_date.to_string(), "2025-01");
}

#[test]
fn test_fallback_failure_is_fatal_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, &year_2024()[..3]);
    let config = config(&dir, &input);

    match ForecastRunner::new(config.clone()).run() {
        Err(ForecastError::FitFailed { requested, source }) => {
            assert_eq!(requested.order, ArimaOrder::new(1, 1, 1));
            assert_eq!(requested.seasonal_order, SeasonalOrder::none());
            assert!(matches!(source, TsError::InsufficientData { actual: 3, .. }));
        }
        other => panic!("expected FitFailed, got {:?}", other.map(|r| r.result)),
    }
    assert!(!config.output_path.exists());
}

#[test]
fn test_chart_failure_is_not_fatal() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, &year_2024());
    let config = ForecastConfig::builder()
        .input_path(&input)
        .output_path(dir.path().join("result.json"))
        .chart_path(dir.path().join("chart.png"))
        .build()
        .unwrap();

    let report = ForecastRunner::new(config)
        .with_renderer(FailingRenderer)
        .run()
        .unwrap();

    assert_eq!(report.chart_path, None);
    assert!(report.output_path.exists());
}

#[test]
fn test_chart_written_as_png() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, &year_2024());
    let chart = dir.path().join("charts").join("revenue_forecast.png");
    let config = ForecastConfig::builder()
        .input_path(&input)
        .output_path(dir.path().join("result.json"))
        .chart_path(&chart)
        .build()
        .unwrap();

    let report = ForecastRunner::new(config)
        .with_renderer(PngChartRenderer::new(480, 240))
        .run()
        .unwrap();

    assert_eq!(report.chart_path.as_deref(), Some(chart.as_path()));
    let bytes = std::fs::read(&chart).unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");
}

#[test]
fn test_run_with_records_sorts_input() {
    let dir = tempdir().unwrap();
    let mut records: Vec<MonthlyRevenue> = year_2024()
        .into_iter()
        .map(|(m, v)| MonthlyRevenue::new(m, v))
        .collect();
    records.reverse();

    let config = config(&dir, Path::new("unused.json"));
    let report = ForecastRunner::new(config)
        .run_with_records(records)
        .unwrap();

    assert_eq!(report.result.historical_data[0].month, "2024-01");
    assert_eq!(report.result.historical_data[11].month, "2024-12");
}
