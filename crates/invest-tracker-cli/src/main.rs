mod commands;
mod config;
mod input;
mod logging;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::process;

use commands::calc::CalcArgs;
use commands::track::TrackArgs;
use config::Settings;

/// Track investments and their expected returns
#[derive(Parser)]
#[command(
    name = "ivt",
    version,
    about = "Track investments and their expected returns",
    long_about = "Compute simple or compound expected returns over a date range with \
                  decimal precision, and keep an ordered list of submitted investments. \
                  Defaults can be set in ivt.toml or IVT_* environment variables."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (defaults to the configured format)
    #[arg(long, global = true)]
    output: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the expected return of one investment
    Calc(CalcArgs),
    /// Submit a batch of investments, optionally delete some, and list the rest
    Track(TrackArgs),
    /// List the selectable display currencies
    Currencies,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}: invalid configuration: {}", "error".red().bold(), e);
            process::exit(1);
        }
    };
    logging::init(&settings.log_level);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calc(args) => commands::calc::run_calc(args),
        Commands::Track(args) => commands::track::run_track(args, &settings),
        Commands::Currencies => commands::currencies::run_currencies(),
        Commands::Version => {
            println!("ivt {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            let format = cli.output.unwrap_or_else(|| settings.output.clone());
            output::format_output(&format, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
