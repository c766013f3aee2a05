//! Trait for forecast chart output

use std::path::Path;

use crate::error::Result;
use crate::model::ChartData;

/// Renders a forecast chart to a file
pub trait ChartRenderer {
    /// Write a chart of `data` to `path`
    fn render(&self, data: &ChartData, path: &Path) -> Result<()>;
}
