use std::io;
use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use meal_macros::DailyPlan;
use meal_macros::catalog::load_plan;
use meal_macros::cli::{Cli, Command, OutputFormat};
use meal_macros::demo::reference_plan;
use meal_macros::error::Result;
use meal_macros::interface::{ReportConfig, display_plan, write_csv, write_json};

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so the report on stdout stays clean.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("meal_macros=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.report_config();

    let plan = match cli.command.unwrap_or_default() {
        Command::Demo => reference_plan()?,
        Command::Report { file } => {
            let path = Path::new(&file);
            info!(path = %path.display(), "loading plan definition");
            load_plan(path)?
        }
    };

    emit(&plan, &config, cli.format)
}

fn emit(plan: &DailyPlan, config: &ReportConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => display_plan(plan, config),
        OutputFormat::Json => write_json(plan, config, io::stdout().lock())?,
        OutputFormat::Csv => write_csv(plan, config, io::stdout().lock())?,
    }
    Ok(())
}
