//! PNG chart rendering
//!
//! Draws the historical series as a line with markers, the forecast point
//! and a shaded band for its interval, with a title, month and dollar axis
//! labels and a legend. Text uses a bundled DejaVu Sans face, so rendering
//! does not depend on fonts installed on the host.

use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::register_font;

use forecast_spi::{ChartData, ChartRenderer, ForecastError, Result};

const HISTORY_COLOR: RGBColor = RGBColor(31, 119, 180);
const FORECAST_COLOR: RGBColor = RGBColor(214, 39, 40);
const GRID_COLOR: RGBColor = RGBColor(225, 225, 225);

const FONT_FAMILY: &str = "sans-serif";
static FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
static FONT_REGISTERED: OnceLock<bool> = OnceLock::new();

fn ensure_font() -> Result<()> {
    let registered = *FONT_REGISTERED
        .get_or_init(|| register_font(FONT_FAMILY, FontStyle::Normal, FONT_DATA).is_ok());
    if registered {
        Ok(())
    } else {
        Err(ForecastError::Chart("bundled chart font could not be loaded".to_string()))
    }
}

/// Whole dollars with thousands separators, e.g. `$12,450`
pub fn format_dollars(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Renders forecast charts as PNG bitmaps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PngChartRenderer {
    pub width: u32,
    pub height: u32,
}

impl Default for PngChartRenderer {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
        }
    }
}

impl PngChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn draw<DB>(
        &self,
        root: &DrawingArea<DB, Shift>,
        data: &ChartData,
    ) -> std::result::Result<(), Box<dyn Error>>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let origin = data.history[0].0;
        let history: Vec<(f64, f64)> = data
            .history
            .iter()
            .map(|(m, v)| (origin.months_until(m) as f64, *v))
            .collect();
        let forecast_x = origin.months_until(&data.forecast_month) as f64;

        let (x_min, x_max) = history
            .iter()
            .map(|(x, _)| *x)
            .fold((forecast_x, forecast_x), |(lo, hi), x| (lo.min(x), hi.max(x)));

        // Month labels by offset from the first observation
        let mut labels = Vec::new();
        let mut month = origin;
        for _ in 0..=(x_max.max(0.0) as usize) {
            labels.push(month.to_string());
            month = month.succ();
        }
        let month_label = |x: &f64| {
            let offset = x.round();
            if (x - offset).abs() > 1e-6 || offset < 0.0 {
                return String::new();
            }
            labels.get(offset as usize).cloned().unwrap_or_default()
        };

        let (x_min, x_max) = (x_min - 0.5, x_max + 0.5);
        let (y_low, y_high) = data.value_range();
        let pad = if y_high > y_low {
            (y_high - y_low) * 0.1
        } else {
            1.0
        };
        let (y_min, y_max) = (y_low - pad, y_high + pad);

        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(root)
            .caption(
                format!("Revenue Forecast for {}", data.forecast_month.long_name()),
                (FONT_FAMILY, 24),
            )
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .bold_line_style(GRID_COLOR)
            .light_line_style(TRANSPARENT)
            .x_labels(labels.len() + 1)
            .x_label_formatter(&month_label)
            .y_label_formatter(&|y: &f64| format_dollars(*y))
            .label_style((FONT_FAMILY, 12))
            .axis_desc_style((FONT_FAMILY, 14))
            .x_desc("Month")
            .y_desc("Revenue ($)")
            .draw()?;

        let coverage = (data.confidence_level * 1000.0).round() / 10.0;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(forecast_x - 0.3, data.lower), (forecast_x + 0.3, data.upper)],
                FORECAST_COLOR.mix(0.2).filled(),
            )))?
            .label(format!("{}% CI", coverage))
            .legend(|(x, y)| {
                Rectangle::new([(x, y - 5), (x + 20, y + 5)], FORECAST_COLOR.mix(0.2).filled())
            });

        chart
            .draw_series(LineSeries::new(
                history.iter().copied(),
                HISTORY_COLOR.stroke_width(2),
            ))?
            .label("Historical Revenue")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], HISTORY_COLOR.stroke_width(2)));
        chart.draw_series(
            history
                .iter()
                .map(|&point| Circle::new(point, 4, HISTORY_COLOR.filled())),
        )?;

        if let Some(&last) = history.last() {
            chart.draw_series(LineSeries::new(
                vec![last, (forecast_x, data.forecast)],
                FORECAST_COLOR.stroke_width(1),
            ))?;
        }
        chart
            .draw_series(std::iter::once(Circle::new(
                (forecast_x, data.forecast),
                7,
                FORECAST_COLOR.filled(),
            )))?
            .label("Forecast")
            .legend(|(x, y)| Circle::new((x + 10, y), 5, FORECAST_COLOR.filled()));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font((FONT_FAMILY, 13))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

impl ChartRenderer for PngChartRenderer {
    fn render(&self, data: &ChartData, path: &Path) -> Result<()> {
        if data.history.is_empty() {
            return Err(ForecastError::Chart("no historical data to plot".to_string()));
        }
        ensure_font()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ForecastError::Chart(e.to_string()))?;
        }

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        self.draw(&root, data)
            .map_err(|e| ForecastError::Chart(e.to_string()))?;

        tracing::info!(path = %path.display(), "Chart saved");
        Ok(())
    }
}
