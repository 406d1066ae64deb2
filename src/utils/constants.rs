/// Input table file names
pub const DAY_FILE: &str = "day.csv";
pub const HOUR_FILE: &str = "hour.csv";

/// Chart output file names
pub const SEASON_CHART_FILE: &str = "season_totals.png";
pub const WEATHER_CHART_FILE: &str = "weather_totals.png";
pub const MONTHLY_CHART_FILE: &str = "monthly_trend.png";
pub const HOURLY_CHART_FILE: &str = "hourly_pattern.png";
pub const TEMPERATURE_CHART_FILE: &str = "temperature_effect.png";
pub const HUMIDITY_CHART_FILE: &str = "humidity_effect.png";
pub const WINDSPEED_CHART_FILE: &str = "windspeed_effect.png";

/// Fixed month axis labels, rendered regardless of which months are present
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Commute peak bands on the hourly chart, inclusive hour ranges
pub const MORNING_PEAK: (u32, u32) = (7, 9);
pub const EVENING_PEAK: (u32, u32) = (17, 19);

/// Chart dimensions
pub const CHART_WIDTH: u32 = 1000;
pub const CHART_HEIGHT: u32 = 500;

/// Reader defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
