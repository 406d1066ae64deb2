use plotters::prelude::*;
use std::path::Path;

use crate::analytics::{HourlyMean, MonthTotal};
use crate::charts::{
    render_placeholder, series_color, year_label, EVENING_BAND_COLOR, MORNING_BAND_COLOR,
};
use crate::error::Result;
use crate::utils::constants::{
    CHART_HEIGHT, CHART_WIDTH, EVENING_PEAK, MONTH_LABELS, MORNING_PEAK,
};

/// Line chart of monthly rental totals, one line per year. The x axis
/// always carries the fixed Jan-Dec labels; months absent from the data
/// simply have no point on the line.
pub struct MonthlyTrendChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl MonthlyTrendChart {
    pub fn render(&self, totals: &[MonthTotal], path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        if totals.is_empty() {
            render_placeholder(&root, &self.title)?;
            root.present()?;
            return Ok(());
        }

        let mut years: Vec<u8> = totals.iter().map(|t| t.year).collect();
        years.sort_unstable();
        years.dedup();

        let max_total = totals.iter().map(|t| t.total).max().unwrap_or(0) as f64 * 1.1;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d(0.5f64..12.5f64, 0.0..max_total)?;

        let formatter = |x: &f64| {
            let idx = x.round();
            if (x - idx).abs() < 0.25 && (1.0..=12.0).contains(&idx) {
                MONTH_LABELS[idx as usize - 1].to_string()
            } else {
                String::new()
            }
        };

        chart
            .configure_mesh()
            .x_desc(&self.x_label)
            .y_desc(&self.y_label)
            .x_labels(12)
            .x_label_formatter(&formatter)
            .draw()?;

        for (year_idx, &year) in years.iter().enumerate() {
            let color = series_color(year_idx);
            let points: Vec<(f64, f64)> = totals
                .iter()
                .filter(|t| t.year == year)
                .map(|t| (t.month as f64, t.total as f64))
                .collect();

            chart
                .draw_series(LineSeries::new(points.clone(), &color))?
                .label(year_label(year))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], color));
            chart.draw_series(
                points
                    .into_iter()
                    .map(|p| Circle::new(p, 3, color.filled())),
            )?;
        }

        if years.len() > 1 {
            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
        }

        root.present()?;
        tracing::info!("rendered monthly trend chart to {}", path.display());
        Ok(())
    }
}

/// Line chart of mean rentals per hour of day, one line per year, with
/// translucent bands marking the morning and evening commute peaks. The
/// bands are presentation only, they never feed back into the aggregation.
pub struct HourlyPatternChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl HourlyPatternChart {
    pub fn render(&self, means: &[HourlyMean], path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        if means.is_empty() {
            render_placeholder(&root, &self.title)?;
            root.present()?;
            return Ok(());
        }

        let mut years: Vec<u8> = means.iter().map(|m| m.year).collect();
        years.sort_unstable();
        years.dedup();

        let max_mean = means.iter().map(|m| m.mean).fold(0.0f64, f64::max) * 1.1;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d(-0.5f64..23.5f64, 0.0..max_mean)?;

        let formatter = |x: &f64| {
            let idx = x.round();
            if (x - idx).abs() < 0.25 && (0.0..=23.0).contains(&idx) {
                format!("{}", idx as u32)
            } else {
                String::new()
            }
        };

        chart
            .configure_mesh()
            .x_desc(&self.x_label)
            .y_desc(&self.y_label)
            .x_labels(24)
            .x_label_formatter(&formatter)
            .draw()?;

        // Peak bands go in first so the series lines draw on top of them.
        let bands = [
            (MORNING_PEAK, MORNING_BAND_COLOR, "Morning Peak (7AM-9AM)"),
            (EVENING_PEAK, EVENING_BAND_COLOR, "Evening Peak (5PM-7PM)"),
        ];
        for ((band_start, band_end), color, label) in bands {
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(band_start as f64, 0.0), (band_end as f64, max_mean)],
                    color.mix(0.3).filled(),
                )))?
                .label(label)
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.mix(0.3).filled())
                });
        }

        for (year_idx, &year) in years.iter().enumerate() {
            let color = series_color(year_idx);
            let points: Vec<(f64, f64)> = means
                .iter()
                .filter(|m| m.year == year)
                .map(|m| (m.hour as f64, m.mean))
                .collect();

            chart
                .draw_series(LineSeries::new(points.clone(), &color))?
                .label(year_label(year))
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], color));
            chart.draw_series(
                points
                    .into_iter()
                    .map(|p| Circle::new(p, 3, color.filled())),
            )?;
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()?;
        tracing::info!("rendered hourly pattern chart to {}", path.display());
        Ok(())
    }
}
