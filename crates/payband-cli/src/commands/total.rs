//! Total command
//!
//! Usage: payband total <ROSTER>

use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use payband_core::{log_op_end, log_op_error, log_op_start};

use crate::error::Result;
use crate::roster::load_roster;

#[derive(Debug, Args)]
pub struct TotalArgs {
    /// Roster YAML file
    pub roster: PathBuf,
}

/// Execute total command
pub fn execute(args: TotalArgs) -> Result<()> {
    log_op_start!("roster_total");
    let start = Instant::now();

    let (total, headcount) = total_salary(&args).map_err(|e| {
        log_op_error!(
            "roster_total",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "roster_total",
        duration_ms = start.elapsed().as_millis() as u64,
        headcount = headcount as u64,
        total_salary = total
    );

    println!("Total salary: {:.2} ({} employees)", total, headcount);
    Ok(())
}

fn total_salary(args: &TotalArgs) -> Result<(f64, usize)> {
    let roster = load_roster(&args.roster)?;
    Ok((
        roster.manager.calculate_total_salary(),
        roster.manager.len(),
    ))
}
