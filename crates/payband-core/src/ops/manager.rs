use crate::errors::{PaybandError, Result};
use crate::model::{Employee, Position};
use crate::rules::salary_band::{self, invalid_salary, Reconciliation};

/// What a successful position change did to the salary
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionChange {
    /// Salary already fit the new band and was left alone
    Retained { salary: f64 },
    /// Salary was inside the lower tolerance and raised to the band minimum
    Clamped { from: f64, to: f64 },
}

impl PositionChange {
    /// Salary after the change
    pub fn salary(&self) -> f64 {
        match self {
            PositionChange::Retained { salary } => *salary,
            PositionChange::Clamped { to, .. } => *to,
        }
    }
}

/// In-memory, insertion-ordered collection of managed employees
///
/// Every employee held here satisfies the band of its current position.
/// Each mutating operation checks first and mutates last, so a failed call
/// leaves the manager exactly as it was.
///
/// Not thread-safe (no Arc/RwLock) - designed for single-threaded use.
/// Callers that share a manager must serialize access themselves.
#[derive(Debug, Clone, Default)]
pub struct EmployeeManager {
    employees: Vec<Employee>,
}

impl EmployeeManager {
    /// Create a new empty manager
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
        }
    }

    /// Start managing an employee
    ///
    /// # Errors
    /// * `DuplicateEmployee` - If an employee with the same ID is managed
    /// * `InvalidSalary` - If the salary is outside the employee's band
    pub fn add_employee(&mut self, employee: Employee) -> Result<()> {
        if self.contains(&employee.id) {
            return Err(PaybandError::DuplicateEmployee {
                employee_id: employee.id,
            });
        }

        salary_band::ensure_in_band(&employee.id, &employee.position, employee.salary)?;

        self.employees.push(employee);
        Ok(())
    }

    /// Stop managing an employee and hand the record back
    ///
    /// The remaining employees keep their relative order.
    ///
    /// # Errors
    /// * `EmployeeNotFound` - If no managed employee has this ID
    pub fn remove_employee(&mut self, id: &str) -> Result<Employee> {
        let index = self.index_of(id)?;
        Ok(self.employees.remove(index))
    }

    /// Managed employees in insertion order
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Get a managed employee by ID
    ///
    /// # Errors
    /// * `EmployeeNotFound` - If no managed employee has this ID
    pub fn get_employee(&self, id: &str) -> Result<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| not_found(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.employees.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Sum of all managed salaries (0 when empty)
    pub fn calculate_total_salary(&self) -> f64 {
        self.employees.iter().map(|e| e.salary).sum()
    }

    /// Check a salary against an optional position
    ///
    /// `None` is never valid. Does not consult the managed employees.
    pub fn is_salary_valid_for_position(&self, position: Option<&Position>, salary: f64) -> bool {
        salary_band::is_salary_valid_for_position(position, salary)
    }

    /// Set a managed employee's salary within their current band
    ///
    /// # Errors
    /// * `EmployeeNotFound` - If no managed employee has this ID (checked
    ///   before the salary)
    /// * `InvalidSalary` - If `new_salary` is outside the current band
    pub fn update_employee_salary(&mut self, id: &str, new_salary: f64) -> Result<()> {
        let index = self.index_of(id)?;
        let employee = &mut self.employees[index];

        salary_band::ensure_in_band(&employee.id, &employee.position, new_salary)?;

        employee.salary = new_salary;
        Ok(())
    }

    /// Move a managed employee to another position
    ///
    /// A salary inside the new band is kept. A salary below the new minimum
    /// but no further below it than 10% of the new band's span is raised to
    /// the minimum. Anything else is rejected; there is no tolerance above
    /// the maximum.
    ///
    /// # Errors
    /// * `EmployeeNotFound` - If no managed employee has this ID
    /// * `InvalidSalary` - If the salary cannot be reconciled with the new band
    pub fn update_employee_position(
        &mut self,
        id: &str,
        new_position: Position,
    ) -> Result<PositionChange> {
        let index = self.index_of(id)?;
        let employee = &mut self.employees[index];
        let current = employee.salary;

        let change = match salary_band::reconcile(&new_position, current) {
            Reconciliation::Keep => PositionChange::Retained { salary: current },
            Reconciliation::ClampTo(min) => PositionChange::Clamped {
                from: current,
                to: min,
            },
            Reconciliation::Reject => {
                return Err(invalid_salary(&employee.id, &new_position, current));
            }
        };

        employee.position = new_position;
        employee.salary = change.salary();
        Ok(change)
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| not_found(id))
    }

    /// Push without checks, for building broken fixtures
    #[cfg(test)]
    pub(crate) fn insert_unchecked(&mut self, employee: Employee) {
        self.employees.push(employee);
    }
}

fn not_found(id: &str) -> PaybandError {
    PaybandError::EmployeeNotFound {
        employee_id: id.to_string(),
    }
}
