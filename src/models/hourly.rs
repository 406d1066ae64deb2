use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// One row of the hourly rental table: one record per (day, hour-of-day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    #[serde(rename = "hr")]
    pub hour: u32,
    #[serde(rename = "yr")]
    pub year: u8,
    #[serde(rename = "cnt")]
    pub count: u64,
}

impl HourlyRecord {
    pub fn validate(&self) -> Result<()> {
        if self.hour > 23 {
            return Err(DashboardError::RecordValidation {
                message: format!("Hour {} on {} is outside 0-23", self.hour, self.date),
            });
        }
        Ok(())
    }
}
