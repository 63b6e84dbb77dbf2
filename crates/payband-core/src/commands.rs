//! Command inventory
//!
//! Every manager mutation as a value, processed by `apply()` and
//! `apply_all()`.

use crate::model::{Employee, Position};

/// Command enum representing all manager mutations
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start managing an employee
    AddEmployee { employee: Employee },

    /// Stop managing an employee
    RemoveEmployee { employee_id: String },

    /// Change a managed employee's salary within their current band
    UpdateSalary { employee_id: String, salary: f64 },

    /// Move a managed employee to another position
    UpdatePosition {
        employee_id: String,
        position: Position,
    },
}

impl Command {
    /// Stable operation name, used for log events
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::AddEmployee { .. } => "employee_add",
            Command::RemoveEmployee { .. } => "employee_remove",
            Command::UpdateSalary { .. } => "employee_update_salary",
            Command::UpdatePosition { .. } => "employee_update_position",
        }
    }

    /// ID of the employee this command targets
    pub fn employee_id(&self) -> &str {
        match self {
            Command::AddEmployee { employee } => &employee.id,
            Command::RemoveEmployee { employee_id }
            | Command::UpdateSalary { employee_id, .. }
            | Command::UpdatePosition { employee_id, .. } => employee_id,
        }
    }
}
