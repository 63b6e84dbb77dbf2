//! List command
//!
//! Usage: payband list <ROSTER> [--json]

use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use payband_core::{log_op_end, log_op_error, log_op_start};

use super::format_employee;
use crate::error::Result;
use crate::roster::load_roster;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Roster YAML file
    pub roster: PathBuf,

    /// Print employees as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Execute list command
pub fn execute(args: ListArgs) -> Result<()> {
    log_op_start!("roster_list");
    let start = Instant::now();

    let (output, headcount) = render_roster(&args).map_err(|e| {
        log_op_error!(
            "roster_list",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "roster_list",
        duration_ms = start.elapsed().as_millis() as u64,
        headcount = headcount as u64
    );

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

fn render_roster(args: &ListArgs) -> Result<(String, usize)> {
    let roster = load_roster(&args.roster)?;
    let employees = roster.manager.employees();

    let output = if args.json {
        serde_json::to_string_pretty(employees)?
    } else {
        employees
            .iter()
            .map(format_employee)
            .collect::<Vec<_>>()
            .join("\n")
    };
    Ok((output, employees.len()))
}
