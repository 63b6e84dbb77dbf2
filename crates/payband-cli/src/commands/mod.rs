pub mod apply;
pub mod check;
pub mod list;
pub mod move_employee;
pub mod total;

use payband_core::Employee;

/// One tab-separated line per employee
pub(crate) fn format_employee(employee: &Employee) -> String {
    format!(
        "{}\t{}\t{} ({})\t{:.2}",
        employee.id,
        employee.name,
        employee.position.title(),
        employee.position.id(),
        employee.salary
    )
}
