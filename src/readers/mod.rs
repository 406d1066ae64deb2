pub mod daily_reader;
pub mod hourly_reader;

pub use daily_reader::DailyReader;
pub use hourly_reader::HourlyReader;
