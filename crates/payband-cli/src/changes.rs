//! Change-set file format
//!
//! A YAML list of manager operations, resolved against a roster's positions
//! into `Command`s and applied as one atomic batch.

use std::fs;
use std::path::Path;

use payband_core::Command;
use serde::Deserialize;

use crate::error::{CliError, Result};
use crate::roster::{Roster, RosterEmployee};

/// One entry of a change set
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ChangeRecord {
    Add { employee: RosterEmployee },
    Remove { employee: String },
    UpdateSalary { employee: String, salary: f64 },
    UpdatePosition { employee: String, position: String },
}

/// Load a change set from a path
pub fn load_changes(path: &Path) -> Result<Vec<ChangeRecord>> {
    let content = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    parse_changes_str(&content)
}

/// Parse a change set from a string
pub fn parse_changes_str(content: &str) -> Result<Vec<ChangeRecord>> {
    Ok(serde_yaml::from_str(content)?)
}

/// Resolve position references into commands
///
/// Fails on the first unknown position, naming the change index.
pub fn to_commands(records: Vec<ChangeRecord>, roster: &Roster) -> Result<Vec<Command>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            to_command(record, roster).map_err(|e| match e {
                CliError::InvalidRoster { reason } => {
                    CliError::invalid_roster(format!("change #{}: {}", index, reason))
                }
                other => other,
            })
        })
        .collect()
}

fn to_command(record: ChangeRecord, roster: &Roster) -> Result<Command> {
    let cmd = match record {
        ChangeRecord::Add { employee } => Command::AddEmployee {
            employee: roster.resolve_employee(&employee)?,
        },
        ChangeRecord::Remove { employee } => Command::RemoveEmployee {
            employee_id: employee,
        },
        ChangeRecord::UpdateSalary { employee, salary } => Command::UpdateSalary {
            employee_id: employee,
            salary,
        },
        ChangeRecord::UpdatePosition { employee, position } => Command::UpdatePosition {
            employee_id: employee,
            position: roster.require_position(&position)?.clone(),
        },
    };
    Ok(cmd)
}
