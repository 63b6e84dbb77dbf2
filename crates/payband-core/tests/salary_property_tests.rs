//! Property tests for the band check, the tolerance rule, and the manager
//! invariants.

use payband_core::rules::{reconcile, Reconciliation};
use payband_core::{Employee, EmployeeManager, PaybandError, Position};
use proptest::prelude::*;

/// Whole-number bands keep tolerance arithmetic exact
fn band() -> impl Strategy<Value = Position> {
    (0u32..200_000, 0u32..100_000).prop_map(|(min, width)| {
        Position::new("p", "Generated", f64::from(min), f64::from(min + width)).unwrap()
    })
}

proptest! {
    #[test]
    fn prop_validity_matches_inclusive_band(position in band(), salary in -50_000.0f64..400_000.0) {
        let manager = EmployeeManager::new();
        let expected = salary >= position.min_salary() && salary <= position.max_salary();
        prop_assert_eq!(manager.is_salary_valid_for_position(Some(&position), salary), expected);
    }

    #[test]
    fn prop_absent_position_never_valid(salary in any::<f64>()) {
        let manager = EmployeeManager::new();
        prop_assert!(!manager.is_salary_valid_for_position(None, salary));
    }

    #[test]
    fn prop_negative_salary_never_valid(position in band(), salary in -1_000_000.0f64..-0.01) {
        prop_assert!(!position.is_within_range(salary));
    }

    #[test]
    fn prop_add_never_admits_out_of_band(position in band(), salary in -50_000.0f64..400_000.0) {
        let mut manager = EmployeeManager::new();
        let result = manager.add_employee(Employee::new("e", "Sample", position.clone(), salary));

        if position.is_within_range(salary) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(manager.len(), 1);
        } else {
            let is_invalid_salary = matches!(result, Err(PaybandError::InvalidSalary { .. }));
            prop_assert!(is_invalid_salary);
            prop_assert!(manager.is_empty());
        }
    }

    #[test]
    fn prop_total_is_exact_sum(salaries in proptest::collection::vec(0u32..1_000_000, 0..20)) {
        let position = Position::new("p", "Wide", 0.0, 1_000_000.0).unwrap();
        let mut manager = EmployeeManager::new();
        for (i, salary) in salaries.iter().enumerate() {
            manager
                .add_employee(Employee::new(i.to_string(), "Sample", position.clone(), f64::from(*salary)))
                .unwrap();
        }

        let expected: f64 = salaries.iter().map(|s| f64::from(*s)).sum();
        prop_assert_eq!(manager.calculate_total_salary(), expected);
    }

    #[test]
    fn prop_duplicate_add_leaves_size(count in 1usize..10, dup in 0usize..10) {
        let position = Position::new("p", "Wide", 0.0, 100.0).unwrap();
        let mut manager = EmployeeManager::new();
        for i in 0..count {
            manager.add_employee(Employee::new(i.to_string(), "Sample", position.clone(), 50.0)).unwrap();
        }

        let dup_id = (dup % count).to_string();
        let result = manager.add_employee(Employee::new(dup_id, "Again", position, 50.0));

        let is_duplicate = matches!(result, Err(PaybandError::DuplicateEmployee { .. }));
        prop_assert!(is_duplicate);
        prop_assert_eq!(manager.len(), count);
    }

    #[test]
    fn prop_reconcile_partitions_salaries(position in band(), salary in 0.0f64..400_000.0) {
        let floor = position.tolerance_floor();
        let outcome = reconcile(&position, salary);

        if position.is_within_range(salary) {
            prop_assert_eq!(outcome, Reconciliation::Keep);
        } else if salary < position.min_salary() && salary >= floor {
            prop_assert_eq!(outcome, Reconciliation::ClampTo(position.min_salary()));
        } else {
            prop_assert_eq!(outcome, Reconciliation::Reject);
        }
    }

    #[test]
    fn prop_nothing_above_max_is_accepted(position in band(), excess in 0.01f64..100_000.0) {
        prop_assert_eq!(
            reconcile(&position, position.max_salary() + excess),
            Reconciliation::Reject
        );
    }

    #[test]
    fn prop_position_change_preserves_invariant(
        start in 0u32..200_000,
        target in band(),
    ) {
        let origin = Position::new("o", "Origin", f64::from(start), f64::from(start)).unwrap();
        let mut manager = EmployeeManager::new();
        manager.add_employee(Employee::new("e", "Sample", origin, f64::from(start))).unwrap();

        let result = manager.update_employee_position("e", target.clone());
        let employee = manager.get_employee("e").unwrap();

        match result {
            Ok(change) => {
                prop_assert_eq!(&employee.position, &target);
                prop_assert_eq!(employee.salary, change.salary());
                prop_assert!(target.is_within_range(employee.salary));
            }
            Err(_) => {
                prop_assert_eq!(employee.position.id(), "o");
                prop_assert_eq!(employee.salary, f64::from(start));
            }
        }
    }
}

#[test]
fn test_unmanaged_salary_update_always_not_found() {
    let mut runner = proptest::test_runner::TestRunner::default();
    runner
        .run(&(-1_000_000.0f64..1_000_000.0), |salary| {
            let mut manager = EmployeeManager::new();
            let result = manager.update_employee_salary("ghost", salary);
            prop_assert!(matches!(
                result,
                Err(PaybandError::EmployeeNotFound { .. })
            ), "expected EmployeeNotFound, got {:?}", result);
            Ok(())
        })
        .unwrap();
}
