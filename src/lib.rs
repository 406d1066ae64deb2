pub mod analytics;
pub mod charts;
pub mod cli;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod readers;
pub mod utils;

pub use error::{DashboardError, Result};
