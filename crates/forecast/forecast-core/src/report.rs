//! JSON report output

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use forecast_spi::{ForecastError, ForecastResult, Result};

fn output_error(path: &Path, e: impl std::fmt::Display) -> ForecastError {
    ForecastError::Output {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

/// Write `result` to `path` as JSON with 2-space indentation.
///
/// Missing parent directories are created. The file is closed before
/// returning.
pub fn write_forecast(result: &ForecastResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| output_error(parent, e))?;
    }

    let file = File::create(path).map_err(|e| output_error(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, result)?;
    writer.flush().map_err(|e| output_error(path, e))?;

    tracing::info!(path = %path.display(), "Forecast saved");
    Ok(())
}

/// Read a forecast result previously written by [`write_forecast`].
pub fn read_forecast(path: &Path) -> Result<ForecastResult> {
    let file = File::open(path).map_err(|e| output_error(path, e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algorithm_spi::{ArimaOrder, SarimaSpec, SeasonalOrder};
    use data_spi::{Month, MonthlyRevenue};
    use forecast_spi::{IntervalBounds, ModelInfo};
    use tempfile::tempdir;

    fn sample() -> ForecastResult {
        ForecastResult {
            forecast_date: Month::new(2025, 1).unwrap(),
            point_forecast: 15321.734529018223,
            confidence_interval: IntervalBounds {
                lower: 12001.184012394511,
                upper: 18642.285045641935,
            },
            model_info: ModelInfo::sarima(
                SarimaSpec::new(ArimaOrder::new(1, 1, 1), SeasonalOrder::none()),
                181.40127765392553,
                182.59496417917326,
            ),
            historical_data: (1..=12)
                .map(|m| MonthlyRevenue::new(format!("2024-{:02}", m), 12000.0 + m as f64 * 0.1))
                .collect(),
        }
    }

    #[test]
    fn test_write_then_read_is_exact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("forecast_result.json");

        write_forecast(&sample(), &path).unwrap();
        assert_eq!(read_forecast(&path).unwrap(), sample());
    }

    #[test]
    fn test_output_uses_two_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("forecast_result.json");
        write_forecast(&sample(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("{\n  \"forecast_date\": \"2025-01\""));
        assert!(text.contains("\n    \"type\": \"SARIMA\""));
    }

    #[test]
    fn test_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.json");

        write_forecast(&sample(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let result = read_forecast(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ForecastError::Output { .. })));
    }

    #[test]
    fn test_read_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{\"forecast_date\": 5}").unwrap();

        assert!(matches!(
            read_forecast(&path),
            Err(ForecastError::Serialization(_))
        ));
    }

    #[test]
    fn test_write_into_file_parent_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let result = write_forecast(&sample(), &blocker.join("out.json"));
        assert!(matches!(result, Err(ForecastError::Output { .. })));
    }
}
