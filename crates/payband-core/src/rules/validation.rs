use std::collections::HashSet;

use crate::errors::{PaybandError, Result};
use crate::model::Employee;
use crate::ops::EmployeeManager;

use super::salary_band::invalid_salary;

/// Validate every managed employee
///
/// Checks the two collection invariants:
///
/// 1. Identifiers are unique
/// 2. Every salary lies inside the band of the employee's current position
///
/// # Errors
/// Returns the first violation found, in insertion order.
pub fn validate_manager(manager: &EmployeeManager) -> Result<()> {
    if let Some(employee_id) = find_duplicate_ids(manager).into_iter().next() {
        return Err(PaybandError::DuplicateEmployee { employee_id });
    }

    if let Some(employee) = find_out_of_band(manager).into_iter().next() {
        return Err(invalid_salary(
            &employee.id,
            &employee.position,
            employee.salary,
        ));
    }

    Ok(())
}

/// Identifiers that occur more than once, each reported once
pub(crate) fn find_duplicate_ids(manager: &EmployeeManager) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for employee in manager.employees() {
        if !seen.insert(employee.id.as_str()) && reported.insert(employee.id.as_str()) {
            duplicates.push(employee.id.clone());
        }
    }

    duplicates
}

/// Employees whose salary is outside their band, in insertion order
pub(crate) fn find_out_of_band(manager: &EmployeeManager) -> Vec<&Employee> {
    manager
        .employees()
        .iter()
        .filter(|e| !e.position.is_within_range(e.salary))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;

    #[test]
    fn test_empty_manager_is_valid() {
        let manager = EmployeeManager::new();
        assert!(validate_manager(&manager).is_ok());
        assert!(find_duplicate_ids(&manager).is_empty());
        assert!(find_out_of_band(&manager).is_empty());
    }

    #[test]
    fn test_managed_employees_pass_validation() {
        let junior = Position::new("1", "Junior Developer", 30000.0, 50000.0).unwrap();
        let mut manager = EmployeeManager::new();
        manager
            .add_employee(Employee::new("1", "John Doe", junior.clone(), 40000.0))
            .unwrap();
        manager
            .add_employee(Employee::new("2", "Ann Lee", junior, 30000.0))
            .unwrap();

        assert!(validate_manager(&manager).is_ok());
    }

    #[test]
    fn test_out_of_band_employee_detected() {
        let junior = Position::new("1", "Junior Developer", 30000.0, 50000.0).unwrap();
        let mut manager = EmployeeManager::new();
        manager.insert_unchecked(Employee::new("1", "John Doe", junior.clone(), 40000.0));
        manager.insert_unchecked(Employee::new("3", "Invalid Junior", junior, 60000.0));

        let out_of_band: Vec<&str> = find_out_of_band(&manager)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(out_of_band, vec!["3"]);
        assert!(matches!(
            validate_manager(&manager),
            Err(PaybandError::InvalidSalary { ref employee_id, .. }) if employee_id == "3"
        ));
    }

    #[test]
    fn test_duplicate_ids_reported_once() {
        let junior = Position::new("1", "Junior Developer", 30000.0, 50000.0).unwrap();
        let mut manager = EmployeeManager::new();
        for _ in 0..3 {
            manager.insert_unchecked(Employee::new("1", "John Doe", junior.clone(), 40000.0));
        }

        assert_eq!(find_duplicate_ids(&manager), vec!["1".to_string()]);
        assert!(matches!(
            validate_manager(&manager),
            Err(PaybandError::DuplicateEmployee { .. })
        ));
    }
}
