//! Canonical logging macros

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use payband_core::log_op_start;
/// log_op_start!("employee_add");
/// log_op_start!("employee_add", employee_id = "e1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use payband_core::log_op_end;
/// log_op_end!("employee_add", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `ExError`. Besides `err_kind` and
/// `err_code`, the event carries the `employee_id` and `position_id` the
/// error names, when it names them; callers must not pass those two fields
/// again.
///
/// # Example
///
/// ```
/// # use payband_core::{log_op_error, errors::PaybandError};
/// let err = PaybandError::EmployeeNotFound { employee_id: "e1".to_string() };
/// log_op_error!("employee_remove", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            employee_id = ex_err.employee_id(),
            position_id = ex_err.position_id(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            employee_id = ex_err.employee_id(),
            position_id = ex_err.position_id(),
            $($field)*
        );
    }};
}
