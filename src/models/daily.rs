use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::models::{Season, WeatherKind};

/// One row of the daily rental table. Field names follow the crate's
/// vocabulary; `#[serde(rename)]` maps them onto the CSV column headers.
/// Unrelated columns in the source file are ignored during deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    pub season: u8,
    #[serde(rename = "yr")]
    pub year: u8,
    #[serde(rename = "mnth")]
    pub month: u32,
    #[serde(rename = "weathersit")]
    pub weather: u8,
    #[serde(rename = "temp")]
    pub temperature: f64,
    #[serde(rename = "hum")]
    pub humidity: f64,
    pub windspeed: f64,
    #[serde(rename = "cnt")]
    pub count: u64,
}

impl DailyRecord {
    /// Resolve the raw season code. Codes outside {1..4} surface as a
    /// data-integrity error, they are never silently passed through.
    pub fn season(&self) -> Result<Season> {
        Season::from_code(self.season)
    }

    pub fn weather(&self) -> Result<WeatherKind> {
        WeatherKind::from_code(self.weather)
    }

    /// Structural validation applied in strict mode. Category codes are
    /// deliberately excluded: those are checked per aggregation branch.
    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            return Err(DashboardError::RecordValidation {
                message: format!("Month {} on {} is outside 1-12", self.month, self.date),
            });
        }

        for (name, value) in [
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("windspeed", self.windspeed),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DashboardError::RecordValidation {
                    message: format!(
                        "Normalized {} {} on {} is outside [0, 1]",
                        name, value, self.date
                    ),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(month: u32, temperature: f64) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
            season: 1,
            year: 0,
            month,
            weather: 1,
            temperature,
            humidity: 0.5,
            windspeed: 0.2,
            count: 985,
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_record() {
        assert!(record(1, 0.34).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_month() {
        assert!(record(0, 0.34).validate().is_err());
        assert!(record(13, 0.34).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unnormalized_values() {
        assert!(record(1, 1.5).validate().is_err());
        assert!(record(1, -0.1).validate().is_err());
    }

    #[test]
    fn test_category_accessors() {
        let mut r = record(1, 0.34);
        assert_eq!(r.season().unwrap(), Season::Spring);
        assert_eq!(r.weather().unwrap(), WeatherKind::Clear);

        r.season = 7;
        assert!(r.season().is_err());
    }
}
