//! Payband Core - in-memory employee and salary-band kernel
//!
//! This crate provides:
//! - `Position` and `Employee` models
//! - Salary band rules, including the lower tolerance applied on position changes
//! - `EmployeeManager`, which owns the managed employees and keeps every
//!   salary inside its band
//! - A command inventory with an atomic batch `apply_all`
//! - The error and logging facilities shared with the CLI

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;

pub use payband_core_types::schema;

// Re-export commonly used types
pub use apply::{apply, apply_all, Applied};
pub use commands::Command;
pub use errors::{ExError, ExErrorKind, PaybandError, Result};
pub use model::{Employee, Position};
pub use ops::{EmployeeManager, PositionChange};
