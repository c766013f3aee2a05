//! # revenue-forecast
//!
//! Command-line entry point for the monthly revenue forecast. Running with
//! no flags reads `../samples/data_chunks.json` and writes the result and
//! chart next to it.

use clap::Parser;
use forecast_facade::prelude::*;
use forecast_facade::SeriesSummary;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const RULE: &str = "============================================================";

#[derive(Parser, Debug)]
#[command(name = "revenue-forecast")]
#[command(about = "Forecast next month's revenue with a SARIMA model", long_about = None)]
struct Cli {
    /// JSON chunk document with monthly summaries
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the forecast result
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Where to write the chart
    #[arg(long, conflicts_with = "no_chart")]
    chart: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long)]
    no_chart: bool,

    /// Month the forecast is labelled with (YYYY-MM)
    #[arg(long)]
    period: Option<Month>,

    /// Non-seasonal order, e.g. "1,1,1"
    #[arg(long)]
    order: Option<ArimaOrder>,

    /// Seasonal order, e.g. "1,1,1,12"
    #[arg(long)]
    seasonal_order: Option<SeasonalOrder>,

    /// Interval coverage in (0, 1)
    #[arg(long)]
    confidence: Option<f64>,
}

impl Cli {
    fn into_config(self) -> Result<ForecastConfig> {
        let mut builder = ForecastConfig::builder();
        if let Some(input) = self.input {
            builder = builder.input_path(input);
        }
        if let Some(output) = self.output {
            builder = builder.output_path(output);
        }
        if let Some(chart) = self.chart {
            builder = builder.chart_path(chart);
        }
        if self.no_chart {
            builder = builder.no_chart();
        }
        if let Some(period) = self.period {
            builder = builder.forecast_period(period);
        }
        if let Some(order) = self.order {
            builder = builder.order(order);
        }
        if let Some(seasonal_order) = self.seasonal_order {
            builder = builder.seasonal_order(seasonal_order);
        }
        if let Some(level) = self.confidence {
            builder = builder.confidence_level(level);
        }
        builder.build()
    }
}

/// Format as dollars with thousands separators and two decimals
fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, cents) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

fn print_statistics(summary: &SeriesSummary) {
    println!("\nRevenue Statistics:");
    println!("  Mean: {}", format_currency(summary.mean));
    println!("  Std: {}", format_currency(summary.std_dev));
    println!("  Min: {}", format_currency(summary.min));
    println!("  Max: {}", format_currency(summary.max));
}

fn print_report(report: &ForecastReport, confidence_level: f64) {
    let result = &report.result;

    println!("Found {} months of data", result.historical_data.len());
    println!("\nMonthly Revenue Summary:");
    for record in &result.historical_data {
        println!("  {}: {}", record.month, format_currency(record.revenue));
    }
    print_statistics(&report.summary);

    println!("\nModel: SARIMA{}x{}", result.model_info.order, result.model_info.seasonal_order);
    if report.used_fallback {
        println!("  (fallback model; the requested model could not be fitted)");
    }
    println!("  AIC: {:.2}", result.model_info.aic);
    println!("  BIC: {:.2}", result.model_info.bic);

    println!("\n{}", RULE);
    println!("FORECAST RESULTS");
    println!("{}", RULE);
    println!("\n{} Revenue Forecast:", result.forecast_date);
    println!("  Point Forecast: {}", format_currency(result.point_forecast));
    println!(
        "  {}% Confidence Interval: [{}, {}]",
        (confidence_level * 1000.0).round() / 10.0,
        format_currency(result.confidence_interval.lower),
        format_currency(result.confidence_interval.upper)
    );

    println!("\nComparison:");
    println!("  Historical Average: {}", format_currency(report.summary.mean));
    match report.pct_from_mean {
        Some(pct) => println!("  Forecast vs Average: {:+.1}%", pct),
        None => println!("  Forecast vs Average: n/a"),
    }

    println!("\nForecast saved to: {}", report.output_path.display());
    if let Some(chart) = &report.chart_path {
        println!("Visualization saved to: {}", chart.display());
    }
    println!("\n{}", RULE);
    println!("Forecasting complete!");
    println!("{}", RULE);
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    let confidence_level = config.confidence_level;

    println!("{}", RULE);
    println!("SARIMA Revenue Forecasting for {}", config.forecast_period);
    println!("{}", RULE);

    let report = ForecastRunner::new(config).run()?;
    print_report(&report, confidence_level);
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "revenue_forecast=info,forecast_api=info,forecast_core=info".into()
            }),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "Forecast failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_gives_defaults() {
        let cli = Cli::try_parse_from(["revenue-forecast"]).unwrap();
        assert_eq!(cli.into_config().unwrap(), ForecastConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "revenue-forecast",
            "--input",
            "data.json",
            "--output",
            "out/result.json",
            "--no-chart",
            "--period",
            "2024-07",
            "--order",
            "(2, 1, 0)",
            "--seasonal-order",
            "0,1,1,12",
            "--confidence",
            "0.9",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.input_path, PathBuf::from("data.json"));
        assert_eq!(config.output_path, PathBuf::from("out/result.json"));
        assert_eq!(config.chart_path, None);
        assert_eq!(config.forecast_period.to_string(), "2024-07");
        assert_eq!(config.order, ArimaOrder::new(2, 1, 0));
        assert_eq!(config.seasonal_order, SeasonalOrder::new(0, 1, 1, 12));
        assert_eq!(config.confidence_level, 0.9);
    }

    #[test]
    fn test_invalid_order_rejected_by_parser() {
        assert!(Cli::try_parse_from(["revenue-forecast", "--order", "1,1"]).is_err());
        assert!(Cli::try_parse_from(["revenue-forecast", "--period", "2024-13"]).is_err());
    }

    #[test]
    fn test_chart_conflicts_with_no_chart() {
        assert!(
            Cli::try_parse_from(["revenue-forecast", "--chart", "c.png", "--no-chart"]).is_err()
        );
    }

    #[test]
    fn test_confidence_validated() {
        let cli = Cli::try_parse_from(["revenue-forecast", "--confidence", "1.5"]).unwrap();
        assert!(matches!(
            cli.into_config(),
            Err(ForecastError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(15321.734), "$15,321.73");
        assert_eq!(format_currency(1234567.5), "$1,234,567.50");
        assert_eq!(format_currency(-2500.0), "-$2,500.00");
    }
}
