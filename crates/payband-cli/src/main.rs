//! Payband CLI
//!
//! Command-line front end over the in-memory employee manager. Reads roster
//! and change-set files; never writes state back.

use clap::{Parser, Subcommand, ValueEnum};

use payband_core::logging_facility::{self, Profile};
use payband_core::ExError;

mod changes;
mod commands;
mod error;
mod roster;

#[derive(Debug, Parser)]
#[command(name = "payband")]
#[command(about = "Payband - employee salary bands", long_about = None)]
struct Cli {
    /// Log output format (filter with RUST_LOG)
    #[arg(
        long,
        global = true,
        value_enum,
        env = "PAYBAND_LOG_FORMAT",
        default_value = "pretty"
    )]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    /// Human-readable lines on stderr
    Pretty,
    /// JSON lines on stderr
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List managed employees
    List(commands::list::ListArgs),
    /// Print the total salary
    Total(commands::total::TotalArgs),
    /// Check a salary against a position's band
    Check(commands::check::CheckArgs),
    /// Move an employee to another position
    Move(commands::move_employee::MoveArgs),
    /// Apply a change set atomically
    Apply(commands::apply::ApplyArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_format.into());

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(args),
        Commands::Total(args) => commands::total::execute(args),
        Commands::Check(args) => commands::check::execute(args),
        Commands::Move(args) => commands::move_employee::execute(args),
        Commands::Apply(args) => commands::apply::execute(args),
    };

    if let Err(e) = result {
        let code = ExError::from(e.clone()).code();
        eprintln!("Error [{}]: {}", code, e);
        std::process::exit(1);
    }
}
