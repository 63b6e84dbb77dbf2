pub mod employee;
pub mod position;

pub use employee::Employee;
pub use position::Position;
