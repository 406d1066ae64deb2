use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Result;
use crate::models::HourlyRecord;
use crate::utils::constants::DEFAULT_BUFFER_SIZE;

/// Reader for the hourly rental table (`hour.csv`).
pub struct HourlyReader {
    strict: bool,
}

impl HourlyReader {
    pub fn new() -> Self {
        Self { strict: false }
    }

    pub fn with_strict_validation(strict: bool) -> Self {
        Self { strict }
    }

    pub fn read_hourly(&self, path: &Path) -> Result<Vec<HourlyRecord>> {
        let file = File::open(path)?;
        let buffered = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(buffered);

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: HourlyRecord = row?;
            if self.strict {
                record.validate()?;
            }
            records.push(record);
        }

        tracing::debug!(rows = records.len(), path = %path.display(), "loaded hourly table");
        Ok(records)
    }
}

impl Default for HourlyReader {
    fn default() -> Self {
        Self::new()
    }
}
