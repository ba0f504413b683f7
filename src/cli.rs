use clap::builder::TypedValueParser;
use clap::{Parser, Subcommand, ValueEnum};

use crate::interface::ReportConfig;
use crate::nutrition::{DEFAULT_DECIMALS, MAX_DECIMALS};

/// meal_macros — Totals protein, carbs, fats and calories for meals and daily plans.
#[derive(Parser, Debug)]
#[command(name = "meal_macros")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Decimal places for nutrient values (0-15).
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_DECIMALS,
        value_parser = clap::value_parser!(u64).range(0..=MAX_DECIMALS as u64).map(|d| d as usize)
    )]
    pub decimals: usize,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            decimals: self.decimals,
        }
    }
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Print the report for the built-in minimal menu.
    #[default]
    Demo,

    /// Print the report for a plan definition file.
    Report {
        /// Path to the plan definition JSON file.
        #[arg(short, long)]
        file: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}
