use std::io::Write;
use std::path::Path;

use bikeshare_dashboard::analytics::{filter_by_date, season_totals, DateSpan};
use bikeshare_dashboard::dashboard::Dashboard;
use bikeshare_dashboard::models::DailyRecord;
use chrono::NaiveDate;
use tempfile::TempDir;

const DAY_HEADER: &str = "instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";
const HOUR_HEADER: &str = "instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt";

fn write_dataset(dir: &Path) {
    let mut day = std::fs::File::create(dir.join("day.csv")).unwrap();
    writeln!(day, "{}", DAY_HEADER).unwrap();
    // Two days per season across both years.
    let mut instant = 0;
    for (year, base_year) in [(0u8, 2011i32), (1, 2012)] {
        for (season, month) in [(1u8, 2u32), (2, 5), (3, 8), (4, 11)] {
            for day_of_month in [1, 2] {
                instant += 1;
                let date = NaiveDate::from_ymd_opt(base_year, month, day_of_month).unwrap();
                writeln!(
                    day,
                    "{},{},{},{},{},0,1,1,1,0.4,0.41,0.6,0.2,100,900,{}",
                    instant,
                    date,
                    season,
                    year,
                    month,
                    1000 + instant * 10
                )
                .unwrap();
            }
        }
    }

    let mut hour = std::fs::File::create(dir.join("hour.csv")).unwrap();
    writeln!(hour, "{}", HOUR_HEADER).unwrap();
    writeln!(
        hour,
        "1,2011-02-01,1,0,2,8,0,1,1,1,0.24,0.28,0.81,0.0,3,13,10"
    )
    .unwrap();
    writeln!(
        hour,
        "2,2011-02-01,1,0,2,8,0,1,1,1,0.24,0.28,0.81,0.0,3,17,20"
    )
    .unwrap();
    writeln!(
        hour,
        "3,2012-02-01,1,1,2,8,0,1,1,1,0.24,0.28,0.81,0.0,3,2,5"
    )
    .unwrap();
}

#[test]
fn test_full_pipeline_end_to_end() {
    let data_dir = TempDir::new().expect("Failed to create temp directory");
    write_dataset(data_dir.path());

    let dashboard = Dashboard::load(data_dir.path()).unwrap();
    assert_eq!(dashboard.daily().len(), 16);

    let span = dashboard.span();
    assert_eq!(span.start, NaiveDate::from_ymd_opt(2011, 2, 1).unwrap());
    assert_eq!(span.end, NaiveDate::from_ymd_opt(2012, 11, 2).unwrap());

    let out_dir = TempDir::new().unwrap();
    let (start, end) = dashboard.resolve_range(None, None).unwrap();
    let summary = dashboard.render_all(start, end, out_dir.path()).unwrap();

    assert_eq!(summary.rendered.len(), 7);
    assert!(summary.skipped.is_empty());
    for name in [
        "season_totals.png",
        "weather_totals.png",
        "monthly_trend.png",
        "hourly_pattern.png",
        "temperature_effect.png",
        "humidity_effect.png",
        "windspeed_effect.png",
    ] {
        let path = out_dir.path().join(name);
        assert!(path.exists(), "missing chart {}", name);
        assert!(path.metadata().unwrap().len() > 0);
    }
}

#[test]
fn test_filter_completeness_against_loaded_table() {
    let data_dir = TempDir::new().unwrap();
    write_dataset(data_dir.path());

    let dashboard = Dashboard::load(data_dir.path()).unwrap();
    let daily = dashboard.daily();
    let span = dashboard.span();

    // Full-span filter returns the whole table.
    let full = filter_by_date(daily, span.start, span.end);
    assert_eq!(full.len(), daily.len());

    // A sub-range is complete and duplicate-free.
    let start = NaiveDate::from_ymd_opt(2011, 5, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2011, 12, 31).unwrap();
    let filtered = filter_by_date(daily, start, end);
    let expected: Vec<&DailyRecord> = daily
        .iter()
        .filter(|r| start <= r.date && r.date <= end)
        .collect();
    assert_eq!(filtered.len(), expected.len());
    assert!(filtered.iter().all(|r| start <= r.date && r.date <= end));
}

#[test]
fn test_year_one_filter_aggregates_only_year_one() {
    let data_dir = TempDir::new().unwrap();
    write_dataset(data_dir.path());

    let dashboard = Dashboard::load(data_dir.path()).unwrap();
    let start = NaiveDate::from_ymd_opt(2012, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2012, 12, 31).unwrap();
    let filtered = filter_by_date(dashboard.daily(), start, end);

    let totals = season_totals(&filtered).unwrap();
    assert_eq!(totals.len(), 4);
    assert!(totals.iter().all(|t| t.year == 1));

    let span = DateSpan::of_daily(&filtered).unwrap();
    assert!(span.start >= start && span.end <= end);
}

#[test]
fn test_statistics_over_loaded_dataset() {
    let data_dir = TempDir::new().unwrap();
    write_dataset(data_dir.path());

    let dashboard = Dashboard::load(data_dir.path()).unwrap();
    let stats = dashboard.statistics().unwrap();

    assert_eq!(stats.daily_rows, 16);
    assert_eq!(stats.hourly_rows, 3);
    assert_eq!(stats.busiest_hour.0, 8);

    let expected_total: u64 = dashboard.daily().iter().map(|r| r.count).sum();
    assert_eq!(stats.total_rentals, expected_total);
}
