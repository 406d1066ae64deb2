use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, Commands};
use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::utils::filename::generate_default_output_dir;
use crate::utils::progress::ProgressReporter;

pub fn run(cli: Cli) -> Result<()> {
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Render {
            data_dir,
            output_dir,
            start_date,
            end_date,
        } => {
            let output_dir = output_dir.unwrap_or_else(generate_default_output_dir);
            println!("Rendering dashboard charts...");
            println!("Data directory: {}", data_dir.display());
            println!("Output directory: {}", output_dir.display());

            let progress = ProgressReporter::new_spinner("Loading dataset...", false);
            let dashboard = Dashboard::load(&data_dir)?;
            let span = dashboard.span();
            progress.finish_with_message(&format!(
                "Loaded {} daily and {} hourly rows ({} to {})",
                dashboard.daily().len(),
                dashboard.hourly().len(),
                span.start,
                span.end
            ));

            let (start, end) = dashboard.resolve_range(start_date, end_date)?;
            println!("Selected range: {} to {}", start, end);

            let summary = dashboard.render_all(start, end, &output_dir)?;

            println!("\nRendered {} charts:", summary.rendered.len());
            for path in &summary.rendered {
                println!("  {}", path.display());
            }

            if summary.skipped.is_empty() {
                println!("\nRendering complete!");
            } else {
                for (branch, reason) in &summary.skipped {
                    println!("⚠️  Skipped {} chart: {}", branch, reason);
                }
            }
        }

        Commands::Info { data_dir } => {
            println!("Analyzing dataset in {}", data_dir.display());

            let dashboard = Dashboard::load(&data_dir)?;
            let stats = dashboard.statistics()?;

            println!("\n{}", stats.summary());
        }

        Commands::Validate { data_dir } => {
            println!("Validating dataset in {}", data_dir.display());

            let progress = ProgressReporter::new_spinner("Validating data...", false);
            let dashboard = Dashboard::load(&data_dir)?;
            let violations = dashboard.check_integrity();
            progress.finish_with_message("Validation complete");

            if violations.is_empty() {
                println!("✅ All data passed validation checks");
            } else {
                println!("⚠️  Found {} validation issues", violations.len());
                for violation in &violations {
                    println!("  {}", violation);
                }
            }
        }
    }

    Ok(())
}
