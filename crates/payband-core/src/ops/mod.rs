pub mod manager;

pub use manager::{EmployeeManager, PositionChange};
