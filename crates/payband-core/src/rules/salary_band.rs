//! Salary band rules
//!
//! Pure decisions over a `Position` and a salary. The manager applies them;
//! nothing here mutates state.

use crate::errors::{PaybandError, Result};
use crate::model::Position;

/// Share of a band's span below `min_salary` that a position change still
/// accepts, clamping the salary up to the minimum.
///
/// There is no matching allowance above `max_salary`.
pub const LOWER_TOLERANCE_RATIO: f64 = 0.10;

/// Outcome of fitting an existing salary into a new band
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reconciliation {
    /// Salary already inside the band
    Keep,
    /// Salary is under the band but at or above the tolerance floor
    ClampTo(f64),
    /// Salary is under the tolerance floor or over the band
    Reject,
}

/// Check a salary against an optional position
///
/// Returns `false` when there is no position. Otherwise this is exactly the
/// inclusive band check; negative salaries fall out of any well-formed band
/// without special handling.
pub fn is_salary_valid_for_position(position: Option<&Position>, salary: f64) -> bool {
    position.is_some_and(|p| p.is_within_range(salary))
}

/// Decide how `salary` fits `position` during a position change
pub fn reconcile(position: &Position, salary: f64) -> Reconciliation {
    if position.is_within_range(salary) {
        Reconciliation::Keep
    } else if salary < position.min_salary() && salary >= position.tolerance_floor() {
        Reconciliation::ClampTo(position.min_salary())
    } else {
        Reconciliation::Reject
    }
}

/// Require `salary` to be inside `position`'s band
///
/// # Errors
/// * `InvalidSalary` - If the salary is outside the band
pub fn ensure_in_band(employee_id: &str, position: &Position, salary: f64) -> Result<()> {
    if position.is_within_range(salary) {
        return Ok(());
    }

    Err(invalid_salary(employee_id, position, salary))
}

pub(crate) fn invalid_salary(employee_id: &str, position: &Position, salary: f64) -> PaybandError {
    PaybandError::InvalidSalary {
        employee_id: employee_id.to_string(),
        position_id: position.id().to_string(),
        salary,
        min_salary: position.min_salary(),
        max_salary: position.max_salary(),
    }
}
