//! Apply command
//!
//! Usage: payband apply <ROSTER> <CHANGES>
//!
//! Applies every change or none of them, then prints the resulting roster.

use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use payband_core::{
    apply_all, log_op_end, log_op_error, log_op_start, Applied, PositionChange,
};

use super::format_employee;
use crate::changes::{load_changes, to_commands};
use crate::error::Result;
use crate::roster::load_roster;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Roster YAML file
    pub roster: PathBuf,

    /// Change-set YAML file
    pub changes: PathBuf,
}

/// What a committed change set produced
struct Outcome {
    lines: Vec<String>,
    change_count: usize,
    headcount: usize,
}

/// Execute apply command
pub fn execute(args: ApplyArgs) -> Result<()> {
    log_op_start!("changes_apply");
    let start = Instant::now();

    let outcome = apply_changes(&args).map_err(|e| {
        log_op_error!(
            "changes_apply",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "changes_apply",
        duration_ms = start.elapsed().as_millis() as u64,
        change_count = outcome.change_count as u64,
        headcount = outcome.headcount as u64
    );

    for line in outcome.lines {
        println!("{}", line);
    }
    Ok(())
}

fn apply_changes(args: &ApplyArgs) -> Result<Outcome> {
    let mut roster = load_roster(&args.roster)?;
    let records = load_changes(&args.changes)?;
    let commands = to_commands(records, &roster)?;

    let applied = apply_all(&mut roster.manager, commands)?;

    let mut lines: Vec<String> = applied.iter().map(describe).collect();
    lines.push(String::new());
    lines.extend(roster.manager.employees().iter().map(format_employee));
    lines.push(format!(
        "Total salary: {:.2} ({} employees)",
        roster.manager.calculate_total_salary(),
        roster.manager.len()
    ));

    Ok(Outcome {
        lines,
        change_count: applied.len(),
        headcount: roster.manager.len(),
    })
}

fn describe(applied: &Applied) -> String {
    match applied {
        Applied::Added { employee_id } => format!("added {}", employee_id),
        Applied::Removed { employee } => format!("removed {}", employee.id),
        Applied::SalaryUpdated {
            employee_id,
            previous,
        } => format!("updated salary of {} (was {:.2})", employee_id, previous),
        Applied::PositionUpdated {
            employee_id,
            change: PositionChange::Retained { .. },
        } => format!("moved {}", employee_id),
        Applied::PositionUpdated {
            employee_id,
            change: PositionChange::Clamped { from, to },
        } => format!(
            "moved {} (salary clamped from {:.2} to {:.2})",
            employee_id, from, to
        ),
    }
}
