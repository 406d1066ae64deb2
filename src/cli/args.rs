use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bikeshare-dashboard")]
#[command(about = "Chart generator for the bike sharing rental dataset")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render all dashboard charts for a date range
    Render {
        #[arg(
            short,
            long,
            default_value = "data",
            help = "Directory containing day.csv and hour.csv"
        )]
        data_dir: PathBuf,

        #[arg(
            short,
            long,
            help = "Chart output directory [default: output/bikeshare-charts-{YYMMDD}]"
        )]
        output_dir: Option<PathBuf>,

        #[arg(long, help = "Range start, YYYY-MM-DD [default: dataset start]")]
        start_date: Option<NaiveDate>,

        #[arg(long, help = "Range end, YYYY-MM-DD [default: dataset end]")]
        end_date: Option<NaiveDate>,
    },

    /// Display summary statistics for the dataset
    Info {
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,
    },

    /// Validate the dataset without rendering charts
    Validate {
        #[arg(short, long, default_value = "data")]
        data_dir: PathBuf,
    },
}
