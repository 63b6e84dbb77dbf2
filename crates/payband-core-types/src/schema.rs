//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical between the emitting macros,
//! the test capture layer, and any log consumer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_EMPLOYEE_ID: &str = "employee_id";
pub const FIELD_POSITION_ID: &str = "position_id";

// Collection sizes and amounts
pub const FIELD_HEADCOUNT: &str = "headcount";
pub const FIELD_CHANGE_COUNT: &str = "change_count";
pub const FIELD_TOTAL_SALARY: &str = "total_salary";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
