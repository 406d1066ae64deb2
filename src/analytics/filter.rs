use chrono::NaiveDate;

use crate::error::{DashboardError, Result};
use crate::models::DailyRecord;

/// Inclusive date bounds of the daily table, computed once after loading.
/// The span is the default selection and the selectable domain for range
/// inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    /// Compute the [min, max] date span of the daily table. An empty table
    /// has no span and cannot drive the dashboard.
    pub fn of_daily(records: &[DailyRecord]) -> Result<Self> {
        let first = records
            .first()
            .ok_or_else(|| DashboardError::EmptyTable("daily table has no rows".to_string()))?;

        let mut start = first.date;
        let mut end = first.date;
        for record in records {
            if record.date < start {
                start = record.date;
            }
            if record.date > end {
                end = record.date;
            }
        }

        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Resolve an optional user-supplied range against this span. Missing
    /// bounds default to the span; an inverted pair is rejected here so the
    /// filter itself only ever sees an ordered pair.
    pub fn resolve(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<(NaiveDate, NaiveDate)> {
        let start = start.unwrap_or(self.start);
        let end = end.unwrap_or(self.end);

        if start > end {
            return Err(DashboardError::InvalidRange { start, end });
        }

        Ok((start, end))
    }
}

/// Return every daily record whose date falls within [start, end], each
/// matching row exactly once. Pure: the source table is never mutated.
/// A range with no matching rows is a valid, empty result.
pub fn filter_by_date(
    records: &[DailyRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DailyRecord> {
    records
        .iter()
        .filter(|r| start <= r.date && r.date <= end)
        .copied()
        .collect()
}
