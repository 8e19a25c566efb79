use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use findash::cli::{handle_check_command, handle_report_command, ReportArgs};
use findash::config::{paths::DashPaths, settings::Settings};
use findash::services::dataset::Dataset;
use findash::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "findash",
    version,
    about = "Terminal-based personal finance dashboard",
    long_about = "findash reads a transaction ledger (CSV) and a merchant-to-category \
                  catalog (JSON) and shows monthly budget pacing, per-category \
                  spending, top items, and holiday breakdowns, either as an \
                  interactive dashboard or as plain-text reports."
)]
struct Cli {
    /// Path to the transaction ledger CSV
    #[arg(long, global = true, env = "FINDASH_LEDGER")]
    ledger: Option<PathBuf>,

    /// Path to the category catalog JSON
    #[arg(long, global = true, env = "FINDASH_CATALOG")]
    catalog: Option<PathBuf>,

    /// Path to the settings file
    #[arg(long, global = true, env = "FINDASH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui,

    /// Print a plain-text report for one period
    Report(ReportArgs),

    /// Check the ledger and catalog for data-quality problems
    Check,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut paths = DashPaths::new();
    if let Some(ledger) = cli.ledger {
        paths = paths.with_ledger(ledger);
    }
    if let Some(catalog) = cli.catalog {
        paths = paths.with_catalog(catalog);
    }
    if let Some(config) = cli.config {
        paths = paths.with_settings(config);
    }

    let settings = Settings::load_or_default(&paths)?;
    let dataset = Dataset::load(&paths, &settings)?;

    match cli.command {
        Some(Commands::Report(args)) => handle_report_command(&dataset, args)?,
        Some(Commands::Check) => handle_check_command(&dataset)?,
        Some(Commands::Tui) | None => run_tui(&dataset)?,
    }

    Ok(())
}
