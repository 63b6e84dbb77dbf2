//! Core types shared across Payband facilities
//!
//! Holds the canonical field keys and event names used by the logging
//! facility in `payband-core` and by the operation boundaries in the CLI.

pub mod schema;
