use chrono::NaiveDate;

use crate::analytics::filter::DateSpan;
use crate::analytics::group_by::mean_by;
use crate::error::Result;
use crate::models::{DailyRecord, HourlyRecord};

/// Summary statistics over the loaded tables, shown by the `info` command.
#[derive(Debug)]
pub struct DatasetStatistics {
    pub daily_rows: usize,
    pub hourly_rows: usize,
    pub span: DateSpan,
    pub total_rentals: u64,
    pub mean_daily_rentals: f64,
    pub busiest_day: (NaiveDate, u64),
    pub busiest_hour: (u32, f64),
}

impl DatasetStatistics {
    pub fn compute(daily: &[DailyRecord], hourly: &[HourlyRecord]) -> Result<Self> {
        let span = DateSpan::of_daily(daily)?;

        let total_rentals: u64 = daily.iter().map(|r| r.count).sum();
        let mean_daily_rentals = total_rentals as f64 / daily.len() as f64;

        let busiest_day = daily
            .iter()
            .max_by_key(|r| r.count)
            .map(|r| (r.date, r.count))
            .unwrap_or((span.start, 0));

        // Mean across both years, ignoring the year split used by the chart.
        let busiest_hour = mean_by(hourly, |r| r.hour, |r| r.count as f64)
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap_or((0, 0.0));

        Ok(Self {
            daily_rows: daily.len(),
            hourly_rows: hourly.len(),
            span,
            total_rentals,
            mean_daily_rentals,
            busiest_day,
            busiest_hour,
        })
    }

    pub fn summary(&self) -> String {
        format!(
            "Bike sharing dataset\n\
            Date Range: {} to {}\n\
            Records: {} daily rows, {} hourly rows\n\
            Total Rentals: {}\n\
            Mean Daily Rentals: {:.1}\n\
            Busiest Day: {} ({} rentals)\n\
            Busiest Hour: {:02}:00 ({:.1} rentals on average)",
            self.span.start,
            self.span.end,
            self.daily_rows,
            self.hourly_rows,
            self.total_rentals,
            self.mean_daily_rentals,
            self.busiest_day.0,
            self.busiest_day.1,
            self.busiest_hour.0,
            self.busiest_hour.1,
        )
    }
}
