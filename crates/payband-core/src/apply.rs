//! Functional-boundary apply functions
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: a command (or a whole batch) either succeeds, or
//!   fails and leaves the manager exactly as it was
//! - **No panics**: invalid input returns typed errors
//! - **Post-validated batches**: `apply_all` re-checks the collection
//!   invariants before committing
//!
//! ## Example
//!
//! ```
//! use payband_core::{apply::apply, Command, Employee, EmployeeManager, Position};
//!
//! let junior = Position::new("1", "Junior Developer", 30000.0, 50000.0).unwrap();
//! let mut manager = EmployeeManager::new();
//! let cmd = Command::AddEmployee {
//!     employee: Employee::new("1", "John Doe", junior, 40000.0),
//! };
//!
//! apply(&mut manager, cmd).unwrap();
//! assert_eq!(manager.len(), 1);
//! ```

use crate::commands::Command;
use crate::errors::{PaybandError, Result};
use crate::model::Employee;
use crate::ops::{EmployeeManager, PositionChange};
use crate::rules::validation;

/// Result of one successfully applied command
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Added { employee_id: String },
    Removed { employee: Employee },
    SalaryUpdated { employee_id: String, previous: f64 },
    PositionUpdated {
        employee_id: String,
        change: PositionChange,
    },
}

/// Apply a single command to a manager
///
/// Each manager operation is already atomic, so this only dispatches.
///
/// # Errors
/// Whatever the underlying manager operation returns. See `PaybandError`.
pub fn apply(manager: &mut EmployeeManager, cmd: Command) -> Result<Applied> {
    match cmd {
        Command::AddEmployee { employee } => {
            let employee_id = employee.id.clone();
            manager.add_employee(employee)?;
            Ok(Applied::Added { employee_id })
        }

        Command::RemoveEmployee { employee_id } => {
            let employee = manager.remove_employee(&employee_id)?;
            Ok(Applied::Removed { employee })
        }

        Command::UpdateSalary {
            employee_id,
            salary,
        } => {
            let previous = manager.get_employee(&employee_id)?.salary;
            manager.update_employee_salary(&employee_id, salary)?;
            Ok(Applied::SalaryUpdated {
                employee_id,
                previous,
            })
        }

        Command::UpdatePosition {
            employee_id,
            position,
        } => {
            let change = manager.update_employee_position(&employee_id, position)?;
            Ok(Applied::PositionUpdated {
                employee_id,
                change,
            })
        }
    }
}

/// Apply a batch of commands atomically
///
/// Commands run in order against a working copy. The copy replaces
/// `manager` only if every command succeeds and the result passes
/// `validate_manager`; otherwise `manager` is untouched.
///
/// # Errors
/// * `ChangeRejected` - Wrapping the first failing command's error with its
///   zero-based index
/// * Any `validate_manager` error if the final state breaks an invariant
pub fn apply_all(
    manager: &mut EmployeeManager,
    commands: impl IntoIterator<Item = Command>,
) -> Result<Vec<Applied>> {
    let mut working = manager.clone();
    let mut applied = Vec::new();

    for (index, cmd) in commands.into_iter().enumerate() {
        let outcome = apply(&mut working, cmd).map_err(|e| PaybandError::ChangeRejected {
            index,
            source: Box::new(e),
        })?;
        applied.push(outcome);
    }

    validation::validate_manager(&working)?;

    *manager = working;
    Ok(applied)
}
