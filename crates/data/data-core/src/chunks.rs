//! JSON chunk document loader
//!
//! The input is a JSON array of chunk objects. Monthly summaries are the
//! chunks whose `metadata.type` is `"monthly_summary"`:
//!
//! ```json
//! [
//!   {
//!     "id": "chunk_monthly_2024-01",
//!     "content": "Monthly summary for 2024-01: ...",
//!     "metadata": { "type": "monthly_summary", "month": "2024-01", "revenue": 15234.5 }
//!   }
//! ]
//! ```
//!
//! Every other chunk is ignored.

use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use data_spi::{DataError, MonthlyRevenue, Result, RevenueSource};

/// `metadata.type` of the chunks carrying monthly revenue
pub const MONTHLY_SUMMARY: &str = "monthly_summary";

/// Monthly revenue source backed by a JSON chunk file.
#[derive(Debug, Clone)]
pub struct JsonChunkSource {
    path: PathBuf,
}

impl JsonChunkSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Value> {
        let display = self.path.display().to_string();
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DataError::FileNotFound(display.clone()),
            _ => DataError::ReadError {
                path: display.clone(),
                message: e.to_string(),
            },
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            if e.is_io() {
                DataError::ReadError {
                    path: display,
                    message: e.to_string(),
                }
            } else {
                DataError::JsonError(e.to_string())
            }
        })
    }
}

impl RevenueSource for JsonChunkSource {
    fn name(&self) -> &str {
        "json-chunks"
    }

    fn load(&self) -> Result<Vec<MonthlyRevenue>> {
        let document = self.read_document()?;
        let mut records = extract_monthly_summaries(&document)?;
        records.sort_by(|a, b| a.month.cmp(&b.month));

        tracing::info!(
            path = %self.path.display(),
            records = records.len(),
            "Loaded monthly revenue records"
        );
        Ok(records)
    }
}

/// Pull the monthly summary records out of a parsed chunk document.
///
/// Records are returned in document order.
pub fn extract_monthly_summaries(document: &Value) -> Result<Vec<MonthlyRevenue>> {
    let chunks = document.as_array().ok_or_else(|| {
        DataError::JsonError("expected a top-level array of chunks".to_string())
    })?;

    let mut records = Vec::new();
    for (index, chunk) in chunks.iter().enumerate() {
        let metadata = match chunk.get("metadata") {
            Some(metadata) => metadata,
            None => continue,
        };
        if metadata.get("type").and_then(Value::as_str) != Some(MONTHLY_SUMMARY) {
            continue;
        }

        let month = metadata
            .get("month")
            .and_then(Value::as_str)
            .ok_or_else(|| DataError::MissingField {
                index,
                field: "metadata.month".to_string(),
            })?;
        let revenue = metadata
            .get("revenue")
            .and_then(Value::as_f64)
            .ok_or_else(|| DataError::MissingField {
                index,
                field: "metadata.revenue".to_string(),
            })?;

        tracing::debug!(month, revenue, "monthly summary");
        records.push(MonthlyRevenue::new(month, revenue));
    }

    Ok(records)
}
