//! Move command
//!
//! Usage: payband move <ROSTER> --employee <ID> --position <ID>
//!
//! Runs a position change against the loaded roster and reports how the
//! salary was reconciled. Nothing is written back.

use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

use payband_core::{log_op_end, log_op_error, log_op_start, PositionChange};

use crate::error::Result;
use crate::roster::load_roster;

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Roster YAML file
    pub roster: PathBuf,

    /// Employee ID to move
    #[arg(short, long)]
    pub employee: String,

    /// Target position ID
    #[arg(short, long)]
    pub position: String,
}

/// Execute move command
pub fn execute(args: MoveArgs) -> Result<()> {
    log_op_start!(
        "employee_move",
        employee_id = args.employee.as_str(),
        position_id = args.position.as_str()
    );
    let start = Instant::now();

    let (line, change) = move_employee(&args).map_err(|e| {
        log_op_error!(
            "employee_move",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "employee_move",
        duration_ms = start.elapsed().as_millis() as u64,
        clamped = matches!(change, PositionChange::Clamped { .. })
    );

    println!("{}", line);
    Ok(())
}

fn move_employee(args: &MoveArgs) -> Result<(String, PositionChange)> {
    let mut roster = load_roster(&args.roster)?;
    let position = roster.require_position(&args.position)?.clone();
    let title = position.title().to_string();

    let change = roster
        .manager
        .update_employee_position(&args.employee, position)?;
    let employee = roster.manager.get_employee(&args.employee)?;

    let salary_note = match change {
        PositionChange::Retained { salary } => {
            format!("salary retained at {:.2}", salary)
        }
        PositionChange::Clamped { from, to } => {
            format!("salary clamped from {:.2} to {:.2}", from, to)
        }
    };

    let line = format!(
        "Moved {} ({}) to {}; {}",
        employee.id, employee.name, title, salary_note
    );
    Ok((line, change))
}
