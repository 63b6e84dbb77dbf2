//! Check command
//!
//! Usage: payband check <ROSTER> --position <ID> --salary <N>

use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use payband_core::{log_op_end, log_op_error, log_op_start};

use crate::error::Result;
use crate::roster::load_roster;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Roster YAML file
    pub roster: PathBuf,

    /// Position ID to check against
    #[arg(short, long)]
    pub position: String,

    /// Proposed salary
    #[arg(short, long, allow_negative_numbers = true)]
    pub salary: f64,
}

/// Execute check command
///
/// An unknown position is reported as invalid, not as an error.
pub fn execute(args: CheckArgs) -> Result<()> {
    log_op_start!("salary_check", position_id = args.position.as_str());
    let start = Instant::now();

    let (valid, line) = check_salary(&args).map_err(|e| {
        log_op_error!(
            "salary_check",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "salary_check",
        duration_ms = start.elapsed().as_millis() as u64,
        valid = valid
    );

    println!("{}", line);
    Ok(())
}

fn check_salary(args: &CheckArgs) -> Result<(bool, String)> {
    let roster = load_roster(&args.roster)?;
    let position = roster.position(&args.position);
    let valid = roster
        .manager
        .is_salary_valid_for_position(position, args.salary);

    let verdict = if valid { "valid" } else { "invalid" };
    let line = match position {
        Some(p) => format!(
            "{}: {:.2} for {} [{:.2}, {:.2}]",
            verdict,
            args.salary,
            p.title(),
            p.min_salary(),
            p.max_salary()
        ),
        None => format!(
            "{}: {:.2} for unknown position {}",
            verdict, args.salary, args.position
        ),
    };
    Ok((valid, line))
}
