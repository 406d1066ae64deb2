pub mod aggregates;
pub mod filter;
pub mod group_by;
pub mod regression;
pub mod stats;

pub use aggregates::{
    factor_series, hour_means, month_totals, season_totals, weather_totals, CategoryTotal,
    EnvFactor, FactorSeries, HourlyMean, MonthTotal,
};
pub use filter::{filter_by_date, DateSpan};
pub use group_by::{mean_by, sum_by};
pub use regression::{linear_fit, TrendLine};
pub use stats::DatasetStatistics;
