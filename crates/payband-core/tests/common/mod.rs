use payband_core::{Employee, EmployeeManager, Position};

/// Junior Developer band: [30000, 50000]
#[allow(dead_code)]
pub fn junior_developer() -> Position {
    Position::new("1", "Junior Developer", 30000.0, 50000.0).unwrap()
}

/// Senior Developer band: [60000, 90000], tolerance floor 57000
#[allow(dead_code)]
pub fn senior_developer() -> Position {
    Position::new("2", "Senior Developer", 60000.0, 90000.0).unwrap()
}

/// John Doe, junior at 40000
#[allow(dead_code)]
pub fn john() -> Employee {
    Employee::new("1", "John Doe", junior_developer(), 40000.0)
}

/// Jane Smith, senior at 70000
#[allow(dead_code)]
pub fn jane() -> Employee {
    Employee::new("2", "Jane Smith", senior_developer(), 70000.0)
}

/// A manager that already holds `john()`
#[allow(dead_code)]
pub fn manager_with_john() -> EmployeeManager {
    let mut manager = EmployeeManager::new();
    manager.add_employee(john()).unwrap();
    manager
}

/// Comparable snapshot of a manager: (id, position id, salary) per employee
#[allow(dead_code)]
pub fn fingerprint(manager: &EmployeeManager) -> Vec<(String, String, f64)> {
    manager
        .employees()
        .iter()
        .map(|e| (e.id.clone(), e.position.id().to_string(), e.salary))
        .collect()
}
