use plotters::prelude::*;
use std::path::Path;

use crate::analytics::CategoryTotal;
use crate::charts::{render_placeholder, series_color, year_label};
use crate::error::Result;
use crate::utils::constants::{CHART_HEIGHT, CHART_WIDTH};

/// Grouped bar chart of category totals, one bar group per category label
/// and one bar per year within each group. Used for the season and weather
/// views.
pub struct GroupedBarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl GroupedBarChart {
    pub fn render(&self, totals: &[CategoryTotal], path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        if totals.is_empty() {
            render_placeholder(&root, &self.title)?;
            root.present()?;
            return Ok(());
        }

        // Category labels in first-seen order, years sorted.
        let mut labels: Vec<&'static str> = Vec::new();
        for total in totals {
            if !labels.contains(&total.label) {
                labels.push(total.label);
            }
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
            .build_cartesian_2d(-0.5f64..labels.len() as f64 - 0.5, 0.0..max_total)?;

        let axis_labels = labels.clone();
        let formatter = move |x: &f64| {
            let idx = x.round();
            if (x - idx).abs() < 0.25 && idx >= 0.0 && (idx as usize) < axis_labels.len() {
                axis_labels[idx as usize].to_string()
            } else {
                String::new()
            }
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(&self.x_label)
            .y_desc(&self.y_label)
            .x_labels(labels.len())
            .x_label_formatter(&formatter)
            .draw()?;

        let group_width = 0.8;
        let bar_width = group_width / years.len() as f64;

        for (year_idx, &year) in years.iter().enumerate() {
            let color = series_color(year_idx);
            let bars: Vec<Rectangle<(f64, f64)>> = totals
                .iter()
                .filter(|t| t.year == year)
                .filter_map(|t| {
                    labels
                        .iter()
                        .position(|&l| l == t.label)
                        .map(|i| (i, t.total))
                })
                .map(|(label_idx, total)| {
                    let x0 = label_idx as f64 - group_width / 2.0 + year_idx as f64 * bar_width;
                    Rectangle::new(
                        [(x0, 0.0), (x0 + bar_width * 0.9, total as f64)],
                        color.filled(),
                    )
                })
                .collect();

            chart
                .draw_series(bars)?
                .label(year_label(year))
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
                });
        }

        if years.len() > 1 {
            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()?;
        }

        root.present()?;
        tracing::info!("rendered grouped bar chart to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn chart() -> GroupedBarChart {
        GroupedBarChart {
            title: "Total Rentals by Season and Year".to_string(),
            x_label: "Season".to_string(),
            y_label: "Total Rentals".to_string(),
        }
    }

    #[test]
    fn test_render_to_file() {
        let totals = vec![
            CategoryTotal {
                label: "Spring",
                year: 0,
                total: 150,
            },
            CategoryTotal {
                label: "Summer",
                year: 0,
                total: 300,
            },
            CategoryTotal {
                label: "Spring",
                year: 1,
                total: 220,
            },
        ];

        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("season.png");
        chart().render(&totals, &path).unwrap();

        assert!(path.exists());
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn test_render_empty_input_produces_placeholder() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("empty.png");
        chart().render(&[], &path).unwrap();

        assert!(path.exists());
        assert!(path.metadata().unwrap().len() > 0);
    }
}
