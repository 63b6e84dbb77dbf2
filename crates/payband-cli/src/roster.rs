//! Roster file format and loader
//!
//! A roster declares positions and the employees holding them. Loading one
//! builds an `EmployeeManager` by adding each employee in file order, so the
//! manager's own checks reject duplicates and out-of-band salaries.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use payband_core::{Employee, EmployeeManager, Position};
use serde::Deserialize;

use crate::error::{CliError, Result};

pub const ROSTER_SCHEMA_VERSION: u32 = 0;

/// Top-level roster file structure
#[derive(Debug, Clone, Deserialize)]
pub struct RosterFile {
    /// Schema version (must be 0)
    pub schema_version: u32,

    /// Declared positions; bands are validated while parsing
    #[serde(default)]
    pub positions: Vec<Position>,

    /// Employees, added in this order
    #[serde(default)]
    pub employees: Vec<RosterEmployee>,
}

/// Employee entry referencing a position by ID
#[derive(Debug, Clone, Deserialize)]
pub struct RosterEmployee {
    pub id: String,
    pub name: String,
    pub position: String,
    pub salary: f64,
}

/// A loaded roster: the declared positions plus a populated manager
#[derive(Debug, Clone)]
pub struct Roster {
    positions: Vec<Position>,
    pub manager: EmployeeManager,
}

impl Roster {
    /// Look up a declared position
    pub fn position(&self, id: &str) -> Option<&Position> {
        self.positions.iter().find(|p| p.id() == id)
    }

    /// Resolve a position ID, failing on unknown IDs
    pub fn require_position(&self, id: &str) -> Result<&Position> {
        self.position(id)
            .ok_or_else(|| CliError::invalid_roster(format!("Unknown position: {}", id)))
    }

    /// Build an `Employee` from a file entry
    pub fn resolve_employee(&self, entry: &RosterEmployee) -> Result<Employee> {
        let position = self.require_position(&entry.position)?;
        Ok(Employee::new(
            entry.id.clone(),
            entry.name.clone(),
            position.clone(),
            entry.salary,
        ))
    }
}

/// Load a roster from a path
pub fn load_roster(path: &Path) -> Result<Roster> {
    let content = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    parse_roster_str(&content)
}

/// Parse a roster from a string
pub fn parse_roster_str(content: &str) -> Result<Roster> {
    let file: RosterFile = serde_yaml::from_str(content)?;

    if file.schema_version != ROSTER_SCHEMA_VERSION {
        return Err(CliError::invalid_roster(format!(
            "Unsupported schema_version: {}. Expected {}",
            file.schema_version, ROSTER_SCHEMA_VERSION
        )));
    }

    let mut seen = HashSet::new();
    for position in &file.positions {
        if !seen.insert(position.id()) {
            return Err(CliError::invalid_roster(format!(
                "Duplicate position id: {}",
                position.id()
            )));
        }
    }

    let mut roster = Roster {
        positions: file.positions,
        manager: EmployeeManager::new(),
    };

    for entry in &file.employees {
        let employee = roster.resolve_employee(entry)?;
        roster.manager.add_employee(employee)?;
    }

    Ok(roster)
}
