use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;
use crate::models::DailyRecord;
use crate::utils::constants::DEFAULT_BUFFER_SIZE;

/// Reader for the daily rental table (`day.csv`).
///
/// Any malformed row or unparseable date aborts the load: the dashboard
/// cannot run on a partially-invalid table.
pub struct DailyReader {
    strict: bool,
}

impl DailyReader {
    pub fn new() -> Self {
        Self { strict: false }
    }

    /// Enable structural validation of every row (month and normalized
    /// value ranges) on top of CSV deserialization.
    pub fn with_strict_validation(strict: bool) -> Self {
        Self { strict }
    }

    pub fn read_daily(&self, path: &Path) -> Result<Vec<DailyRecord>> {
        let file = File::open(path)?;
        let buffered = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(buffered);

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: DailyRecord = row?;
            if self.strict {
                record.validate()?;
            }
            records.push(record);
        }

        tracing::debug!(rows = records.len(), path = %path.display(), "loaded daily table");
        Ok(records)
    }
}

impl Default for DailyReader {
    fn default() -> Self {
        Self::new()
    }
}
