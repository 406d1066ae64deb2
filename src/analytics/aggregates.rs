//! The five aggregation branches behind the dashboard charts. Each branch
//! is a pure function from rows to aggregated rows; callers decide which
//! subset of the daily table to pass in. The hourly branch deliberately
//! takes the full hourly table: the date-range filter has never applied to
//! the work-pattern view.

use crate::analytics::group_by::{mean_by, sum_by};
use crate::analytics::regression::{linear_fit, TrendLine};
use crate::error::Result;
use crate::models::{DailyRecord, HourlyRecord, Season, WeatherKind};

/// Total rentals for one (category label, year) cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub label: &'static str,
    pub year: u8,
    pub total: u64,
}

/// Total rentals for one (month, year) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthTotal {
    pub month: u32,
    pub year: u8,
    pub total: u64,
}

/// Mean rentals for one (hour-of-day, year) cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyMean {
    pub hour: u32,
    pub year: u8,
    pub mean: f64,
}

/// Environmental factor on the daily table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFactor {
    Temperature,
    Humidity,
    Windspeed,
}

impl EnvFactor {
    pub const ALL: [EnvFactor; 3] = [
        EnvFactor::Temperature,
        EnvFactor::Humidity,
        EnvFactor::Windspeed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EnvFactor::Temperature => "Temperature",
            EnvFactor::Humidity => "Humidity",
            EnvFactor::Windspeed => "Windspeed",
        }
    }

    pub fn extract(&self, record: &DailyRecord) -> f64 {
        match self {
            EnvFactor::Temperature => record.temperature,
            EnvFactor::Humidity => record.humidity,
            EnvFactor::Windspeed => record.windspeed,
        }
    }
}

/// Unaggregated (factor, count) series plus its fitted trend line.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorSeries {
    pub factor: EnvFactor,
    pub points: Vec<(f64, f64)>,
    pub trend: Option<TrendLine>,
}

/// Season totals split by year. Grouping keys on the raw numeric code;
/// the label is applied exactly once, after grouping, and a code outside
/// {1..4} is a data-integrity error for this branch.
pub fn season_totals(rows: &[DailyRecord]) -> Result<Vec<CategoryTotal>> {
    let grouped = sum_by(rows, |r| (r.season, r.year), |r| r.count);

    let mut cells: Vec<((u8, u8), u64)> = grouped.into_iter().collect();
    cells.sort_by_key(|((code, year), _)| (*year, *code));

    cells
        .into_iter()
        .map(|((code, year), total)| {
            Ok(CategoryTotal {
                label: Season::from_code(code)?.label(),
                year,
                total,
            })
        })
        .collect()
}

/// Weather-situation totals split by year, same shape as [`season_totals`].
pub fn weather_totals(rows: &[DailyRecord]) -> Result<Vec<CategoryTotal>> {
    let grouped = sum_by(rows, |r| (r.weather, r.year), |r| r.count);

    let mut cells: Vec<((u8, u8), u64)> = grouped.into_iter().collect();
    cells.sort_by_key(|((code, year), _)| (*year, *code));

    cells
        .into_iter()
        .map(|((code, year), total)| {
            Ok(CategoryTotal {
                label: WeatherKind::from_code(code)?.label(),
                year,
                total,
            })
        })
        .collect()
}

/// Month totals split by year. Months absent from the input are absent
/// from the output; the chart keeps its fixed Jan-Dec axis regardless.
pub fn month_totals(rows: &[DailyRecord]) -> Vec<MonthTotal> {
    let grouped = sum_by(rows, |r| (r.month, r.year), |r| r.count);

    let mut totals: Vec<MonthTotal> = grouped
        .into_iter()
        .map(|((month, year), total)| MonthTotal { month, year, total })
        .collect();
    totals.sort_by_key(|t| (t.year, t.month));
    totals
}

/// Mean rentals per (hour-of-day, year) over the hourly table.
pub fn hour_means(rows: &[HourlyRecord]) -> Vec<HourlyMean> {
    let grouped = mean_by(rows, |r| (r.hour, r.year), |r| r.count as f64);

    let mut means: Vec<HourlyMean> = grouped
        .into_iter()
        .map(|((hour, year), mean)| HourlyMean { hour, year, mean })
        .collect();
    means.sort_by_key(|m| (m.year, m.hour));
    means
}

/// Scatter series of one environmental factor against daily rentals, with
/// an OLS trend line when the series admits one.
pub fn factor_series(rows: &[DailyRecord], factor: EnvFactor) -> FactorSeries {
    let points: Vec<(f64, f64)> = rows
        .iter()
        .map(|r| (factor.extract(r), r.count as f64))
        .collect();
    let trend = linear_fit(&points);

    FactorSeries {
        factor,
        points,
        trend,
    }
}
