use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown season code: {0}")]
    UnknownSeasonCode(u8),

    #[error("Unknown weather code: {0}")]
    UnknownWeatherCode(u8),

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Empty table: {0}")]
    EmptyTable(String),

    #[error("Record validation error: {message}")]
    RecordValidation { message: String },

    #[error("Chart rendering error: {0}")]
    Chart(String),
}

impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for DashboardError
where
    T: std::error::Error + Send + Sync,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::Chart(err.to_string())
    }
}
