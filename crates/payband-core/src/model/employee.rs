use serde::Serialize;

use super::position::Position;

/// Employee - a named individual holding one Position and one salary
///
/// Employees do not validate themselves. While an Employee is managed by an
/// `EmployeeManager` it is only reachable through shared borrows, and the
/// manager keeps `salary` inside the band of `position`.
///
/// Two Employees are equal when their identifiers match, regardless of the
/// other fields.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Current position
    pub position: Position,

    /// Current salary
    pub salary: f64,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: Position,
        salary: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            salary,
        }
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}
