pub mod salary_band;
pub mod validation;

pub use salary_band::{is_salary_valid_for_position, reconcile, Reconciliation};
