use plotters::prelude::*;
use std::path::Path;

use crate::analytics::FactorSeries;
use crate::charts::{render_placeholder, series_color, TREND_COLOR};
use crate::error::Result;
use crate::utils::constants::{CHART_HEIGHT, CHART_WIDTH};

/// Scatter plot of one environmental factor against daily rentals, with
/// the fitted OLS trend line overlaid when one exists.
pub struct FactorScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl FactorScatterChart {
    pub fn render(&self, series: &FactorSeries, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        if series.points.is_empty() {
            render_placeholder(&root, &self.title)?;
            root.present()?;
            return Ok(());
        }

        let (x_min, x_max, y_max) = series.points.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0f64),
            |(x_min, x_max, y_max), &(x, y)| (x_min.min(x), x_max.max(x), y_max.max(y)),
        );
        // Degenerate x ranges still need a non-zero axis to draw on.
        let x_pad = ((x_max - x_min) * 0.05).max(0.01);

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(60)
            .y_label_area_size(90)
            .build_cartesian_2d(x_min - x_pad..x_max + x_pad, 0.0..y_max * 1.1)?;

        chart
            .configure_mesh()
            .x_desc(&self.x_label)
            .y_desc(&self.y_label)
            .draw()?;

        let point_color = series_color(0);
        chart.draw_series(
            series
                .points
                .iter()
                .map(|&p| Circle::new(p, 3, point_color.mix(0.5).filled())),
        )?;

        if let Some(trend) = series.trend {
            chart.draw_series(LineSeries::new(
                vec![
                    (x_min, trend.predict(x_min)),
                    (x_max, trend.predict(x_max)),
                ],
                TREND_COLOR.stroke_width(2),
            ))?;
        }

        root.present()?;
        tracing::info!("rendered factor scatter chart to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{factor_series, EnvFactor};
    use crate::models::DailyRecord;
    use tempfile::tempdir;

    fn chart() -> FactorScatterChart {
        FactorScatterChart {
            title: "Impact of Temperature on Bike Rentals".to_string(),
            x_label: "Temperature".to_string(),
            y_label: "Rentals".to_string(),
        }
    }

    fn rows() -> Vec<DailyRecord> {
        (0..10)
            .map(|i| DailyRecord {
                date: chrono::NaiveDate::from_ymd_opt(2011, 1, 1 + i).unwrap(),
                season: 1,
                year: 0,
                month: 1,
                weather: 1,
                temperature: 0.1 + 0.05 * i as f64,
                humidity: 0.5,
                windspeed: 0.2,
                count: 500 + i as u64 * 120,
            })
            .collect()
    }

    #[test]
    fn test_render_scatter_with_trend() {
        let series = factor_series(&rows(), EnvFactor::Temperature);
        assert!(series.trend.is_some());

        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("temperature.png");
        chart().render(&series, &path).unwrap();

        assert!(path.exists());
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn test_render_scatter_without_trend() {
        // Constant humidity has zero x-variance and therefore no trend line.
        let series = factor_series(&rows(), EnvFactor::Humidity);
        assert!(series.trend.is_none());

        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("humidity.png");
        chart().render(&series, &path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_render_empty_series() {
        let series = factor_series(&[], EnvFactor::Windspeed);

        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("windspeed_empty.png");
        chart().render(&series, &path).unwrap();

        assert!(path.exists());
    }
}
