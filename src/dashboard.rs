//! One dashboard run: filter the daily table, execute the five aggregation
//! branches, and hand each result to its chart renderer. Each run is a
//! pure function of the loaded tables and the selected date range, so a
//! caller can re-run with a new range at any time.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::analytics::{
    factor_series, filter_by_date, hour_means, month_totals, season_totals, weather_totals,
    DatasetStatistics, DateSpan, EnvFactor,
};
use crate::charts::{FactorScatterChart, GroupedBarChart, HourlyPatternChart, MonthlyTrendChart};
use crate::error::Result;
use crate::models::{DailyRecord, HourlyRecord};
use crate::readers::{DailyReader, HourlyReader};
use crate::utils::constants::{
    DAY_FILE, HOURLY_CHART_FILE, HOUR_FILE, HUMIDITY_CHART_FILE, MONTHLY_CHART_FILE,
    SEASON_CHART_FILE, TEMPERATURE_CHART_FILE, WEATHER_CHART_FILE, WINDSPEED_CHART_FILE,
};

/// Outcome of one render run: the chart files written, plus the branches
/// skipped because of data-integrity failures.
#[derive(Debug, Default)]
pub struct RenderSummary {
    pub rendered: Vec<PathBuf>,
    pub skipped: Vec<(String, String)>,
}

/// The loaded dataset and its date span. Both tables are read once and
/// never mutated; every interaction derives fresh views from them.
pub struct Dashboard {
    daily: Vec<DailyRecord>,
    hourly: Vec<HourlyRecord>,
    span: DateSpan,
}

impl Dashboard {
    /// Load `day.csv` and `hour.csv` from the data directory. Malformed
    /// rows and empty tables are fatal here.
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::load_with_validation(data_dir, false)
    }

    pub fn load_with_validation(data_dir: &Path, strict: bool) -> Result<Self> {
        let daily = DailyReader::with_strict_validation(strict).read_daily(&data_dir.join(DAY_FILE))?;
        let hourly =
            HourlyReader::with_strict_validation(strict).read_hourly(&data_dir.join(HOUR_FILE))?;
        let span = DateSpan::of_daily(&daily)?;

        tracing::info!(
            daily_rows = daily.len(),
            hourly_rows = hourly.len(),
            span_start = %span.start,
            span_end = %span.end,
            "dataset loaded"
        );

        Ok(Self {
            daily,
            hourly,
            span,
        })
    }

    pub fn span(&self) -> DateSpan {
        self.span
    }

    pub fn daily(&self) -> &[DailyRecord] {
        &self.daily
    }

    pub fn hourly(&self) -> &[HourlyRecord] {
        &self.hourly
    }

    pub fn statistics(&self) -> Result<DatasetStatistics> {
        DatasetStatistics::compute(&self.daily, &self.hourly)
    }

    /// Resolve optional bounds against the dataset span, rejecting an
    /// inverted pair before the filter runs.
    pub fn resolve_range(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<(NaiveDate, NaiveDate)> {
        self.span.resolve(start, end)
    }

    /// Scan both tables for rows that would fail a chart branch: category
    /// codes outside the closed enumerations, out-of-range months and
    /// hours. Nothing is dropped or repaired, every violation is reported.
    pub fn check_integrity(&self) -> Vec<String> {
        let mut violations = Vec::new();

        for record in &self.daily {
            if let Err(e) = record.season() {
                violations.push(format!("{}: {}", record.date, e));
            }
            if let Err(e) = record.weather() {
                violations.push(format!("{}: {}", record.date, e));
            }
            if let Err(e) = record.validate() {
                violations.push(format!("{}: {}", record.date, e));
            }
        }

        for record in &self.hourly {
            if let Err(e) = record.validate() {
                violations.push(format!("{}: {}", record.date, e));
            }
        }

        violations
    }

    /// Run the full pipeline for one date range and write every chart into
    /// `output_dir`. A data-integrity failure in one branch skips that
    /// branch and leaves the rest intact; rendering failures are fatal.
    pub fn render_all(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        output_dir: &Path,
    ) -> Result<RenderSummary> {
        std::fs::create_dir_all(output_dir)?;

        let filtered = filter_by_date(&self.daily, start, end);
        tracing::debug!(
            rows = filtered.len(),
            %start,
            %end,
            "filtered daily table for render run"
        );

        let mut summary = RenderSummary::default();

        match season_totals(&filtered) {
            Ok(totals) => {
                let path = output_dir.join(SEASON_CHART_FILE);
                GroupedBarChart {
                    title: "Total Rentals by Season and Year".to_string(),
                    x_label: "Season".to_string(),
                    y_label: "Total Rentals".to_string(),
                }
                .render(&totals, &path)?;
                summary.rendered.push(path);
            }
            Err(e) => {
                tracing::warn!("season branch skipped: {}", e);
                summary.skipped.push(("season".to_string(), e.to_string()));
            }
        }

        match weather_totals(&filtered) {
            Ok(totals) => {
                let path = output_dir.join(WEATHER_CHART_FILE);
                GroupedBarChart {
                    title: "Total Rentals by Weather Condition and Year".to_string(),
                    x_label: "Weather Condition".to_string(),
                    y_label: "Total Rentals".to_string(),
                }
                .render(&totals, &path)?;
                summary.rendered.push(path);
            }
            Err(e) => {
                tracing::warn!("weather branch skipped: {}", e);
                summary.skipped.push(("weather".to_string(), e.to_string()));
            }
        }

        let monthly_path = output_dir.join(MONTHLY_CHART_FILE);
        MonthlyTrendChart {
            title: "Total Rentals by Month and Year".to_string(),
            x_label: "Month".to_string(),
            y_label: "Total Rentals".to_string(),
        }
        .render(&month_totals(&filtered), &monthly_path)?;
        summary.rendered.push(monthly_path);

        // The work-pattern view runs over the full hourly table; the date
        // filter has never applied to it.
        let hourly_path = output_dir.join(HOURLY_CHART_FILE);
        HourlyPatternChart {
            title: "Average Rentals by Hour and Year".to_string(),
            x_label: "Hour of Day".to_string(),
            y_label: "Average Rentals".to_string(),
        }
        .render(&hour_means(&self.hourly), &hourly_path)?;
        summary.rendered.push(hourly_path);

        let factor_files = [
            (EnvFactor::Temperature, TEMPERATURE_CHART_FILE),
            (EnvFactor::Humidity, HUMIDITY_CHART_FILE),
            (EnvFactor::Windspeed, WINDSPEED_CHART_FILE),
        ];
        for (factor, file) in factor_files {
            let series = factor_series(&filtered, factor);
            let path = output_dir.join(file);
            FactorScatterChart {
                title: format!("Impact of {} on Bike Rentals", factor.label()),
                x_label: factor.label().to_string(),
                y_label: "Rentals".to_string(),
            }
            .render(&series, &path)?;
            summary.rendered.push(path);
        }

        Ok(summary)
    }
}
