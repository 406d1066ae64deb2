pub mod categories;
pub mod daily;
pub mod hourly;

pub use categories::{Season, WeatherKind};
pub use daily::DailyRecord;
pub use hourly::HourlyRecord;
