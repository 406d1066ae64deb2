//! Chart rendering on the plotters bitmap backend. Every renderer accepts
//! the already-aggregated result of one pipeline branch and degrades to a
//! placeholder image when the branch produced no data.

pub mod grouped_bar;
pub mod line_chart;
pub mod scatter;

pub use grouped_bar::GroupedBarChart;
pub use line_chart::{HourlyPatternChart, MonthlyTrendChart};
pub use scatter::FactorScatterChart;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::Result;

/// One series color per year value, matplotlib "tab" palette.
pub(crate) const SERIES_COLORS: [RGBColor; 4] = [
    RGBColor(31, 119, 180),  // Blue
    RGBColor(255, 127, 14),  // Orange
    RGBColor(44, 160, 44),   // Green
    RGBColor(214, 39, 40),   // Red
];

pub(crate) const TREND_COLOR: RGBColor = RGBColor(255, 127, 14);
pub(crate) const MORNING_BAND_COLOR: RGBColor = RGBColor(255, 165, 0);
pub(crate) const EVENING_BAND_COLOR: RGBColor = RGBColor(0, 128, 0);

pub(crate) fn series_color(index: usize) -> RGBColor {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

pub(crate) fn year_label(year: u8) -> String {
    format!("Year {}", year)
}

/// Render an explicit "no data" chart instead of failing on empty input.
pub(crate) fn render_placeholder<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: std::error::Error + Send + Sync,
{
    let inner = root.titled(title, ("sans-serif", 24))?;
    let (width, height) = inner.dim_in_pixel();
    inner.draw(&Text::new(
        "No data in selected range",
        (width as i32 / 2 - 110, height as i32 / 2),
        ("sans-serif", 20)
            .into_font()
            .color(&RGBColor(128, 128, 128)),
    ))?;
    Ok(())
}
