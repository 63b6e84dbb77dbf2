#![allow(clippy::unwrap_used, clippy::expect_used)]

use payband_core::errors::PaybandError;
use payband_core::logging_facility::test_capture::init_test_capture;
use payband_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_KIND, FIELD_POSITION_ID,
};
use payband_core::{log_op_end, log_op_error, log_op_start};
use tracing::Level;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, employee_id = "e1");

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].fields.get("employee_id"), Some(&"e1".to_string()));
    assert_eq!(events[0].level, Level::INFO);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = PaybandError::EmployeeNotFound {
        employee_id: "e1".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    let error_event = &error_events[0];
    assert_eq!(error_event.level, Level::ERROR);
    assert_eq!(
        error_event.fields.get("err_code"),
        Some(&"ERR_NOT_FOUND".to_string())
    );
    assert_eq!(error_event.field(FIELD_ERR_KIND), Some("NotFound"));
    assert_eq!(error_event.employee_id(), Some("e1"));
    assert_eq!(error_event.field(FIELD_POSITION_ID), None);
}

#[test]
fn test_log_op_error_carries_salary_context() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_6";

    let err = PaybandError::InvalidSalary {
        employee_id: "e6".to_string(),
        position_id: "p2".to_string(),
        salary: 40000.0,
        min_salary: 60000.0,
        max_salary: 90000.0,
    };
    log_op_error!(op_name, err, duration_ms = 3);

    let errors = capture.errors_with_code(op_name, "ERR_INVALID_SALARY");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(FIELD_POSITION_ID), Some("p2"));
    assert_eq!(capture.events_for_employee("e6").len(), 1);
}

#[test]
fn test_log_op_error_unwraps_batch_rejection() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_7";

    let err = PaybandError::ChangeRejected {
        index: 1,
        source: Box::new(PaybandError::DuplicateEmployee {
            employee_id: "e7".to_string(),
        }),
    };
    log_op_error!(op_name, err, duration_ms = 0);

    let errors = capture.errors_with_code(op_name, "ERR_DUPLICATE");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].employee_id(), Some("e7"));
}

#[test]
fn test_boundary_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_unique_4";

    log_op_start!(op_name, employee_id = "e1");
    log_op_end!(op_name, duration_ms = 1, headcount = 3u64);

    capture.assert_event_exists(op_name, EVENT_START);
    capture.assert_event_exists(op_name, EVENT_END);

    let count = capture.count_events(|e| e.op.as_deref() == Some(op_name));
    assert_eq!(count, 2);

    let end = capture
        .events_for(op_name)
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END))
        .unwrap();
    assert_eq!(end.fields.get("headcount"), Some(&"3".to_string()));
}

#[test]
fn test_component_is_module_path() {
    let capture = init_test_capture();
    let op_name = "test_component_unique_5";

    log_op_start!(op_name);

    let events = capture.events_for(op_name);
    assert_eq!(
        events[0].component.as_deref(),
        Some("logging_facility_tests")
    );
}
