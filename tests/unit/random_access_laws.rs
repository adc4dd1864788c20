//! Random-access laws and the step ledger.

use std::rc::Rc;

use super::common::{ShadowedDistance, Slots, SteppingReversed};
use collection_laws::containers::Reversed;
use collection_laws::{
    check_bidirectional_collection, check_forward_collection, check_mutable_collection,
    check_random_access_collection, check_sequence, ConformanceReport, Instrumented, Law,
    LedgerSnapshot, OperationLedger,
};

#[test]
fn test_ten_twenty_thirty_passes_every_checker() {
    let mut numbers = vec![10, 20, 30];
    let reference = [10, 20, 30];
    let ledger = OperationLedger::shared();
    let mut report = ConformanceReport::new();

    check_sequence(&mut report, &numbers, &reference);
    check_forward_collection(&mut report, &numbers, &reference);
    check_bidirectional_collection(&mut report, &numbers, &reference);
    let snapshot = check_random_access_collection(&mut report, &numbers, &reference, Some(&ledger));
    check_mutable_collection(&mut report, &mut numbers, &[30, 20, 10]).unwrap();

    report.assert_conformant();
    assert_eq!(report.passed_counts()[&Law::WriteReadBack], 6);
    // the reversed source went in last
    assert_eq!(numbers, vec![10, 20, 30]);
    assert_eq!(
        snapshot,
        LedgerSnapshot {
            increments: 0,
            decrements: 0
        }
    );
    assert_eq!(snapshot.to_string(), "{increments: 0, decrements: 0}");
}

#[test]
fn test_stepping_adapter_is_caught_by_shared_ledger() {
    let ledger = OperationLedger::shared();
    let adapter = SteppingReversed {
        base: Instrumented::new(vec![1, 2, 3, 4], Rc::clone(&ledger)),
    };

    let mut report = ConformanceReport::new();
    check_random_access_collection(&mut report, &adapter, &[4, 3, 2, 1], Some(&ledger));

    // Every value is right; only the cost is wrong.
    assert_eq!(report.broken_laws(), vec![Law::StepFree]);
    assert_eq!(report.violations_of(Law::StepFree).count(), 7);
    let first = &report.violations()[0];
    assert_eq!(first.message, "distance(start, end) fell back to single steps");
    assert_eq!(first.actual, "{increments: 0, decrements: 4}");
}

#[test]
fn test_delegating_adapter_over_same_base_stays_clean() {
    let ledger = OperationLedger::shared();
    let adapter = Reversed::new(Instrumented::new(vec![1, 2, 3, 4], Rc::clone(&ledger)));

    let mut report = ConformanceReport::new();
    let snapshot = check_random_access_collection(&mut report, &adapter, &[4, 3, 2, 1], Some(&ledger));

    report.assert_conformant();
    assert!(snapshot.is_zero());
}

#[test]
fn test_private_ledger_cannot_see_through_adapter() {
    // Without the shared handle the wrapper sits on top of the adapter, and
    // the adapter's own stepping happens below it.
    let adapter = SteppingReversed {
        base: vec![1, 2, 3],
    };
    let mut report = ConformanceReport::new();
    check_random_access_collection(&mut report, &adapter, &[3, 2, 1], None);
    report.assert_conformant();
}

#[test]
fn test_checker_uses_trait_distance_not_inherent_shadow() {
    let shadowed = ShadowedDistance {
        items: vec![5, 6, 7],
    };
    assert_eq!(shadowed.distance(&0, &3), 12);

    let mut report = ConformanceReport::new();
    check_random_access_collection(&mut report, &shadowed, &[5, 6, 7], None);
    report.assert_conformant();
}

#[test]
fn test_empty_vec_is_trivially_step_free() {
    let mut report = ConformanceReport::new();
    let snapshot = check_random_access_collection(&mut report, &Vec::<u8>::new(), &[], None);
    report.assert_conformant();
    assert!(snapshot.is_zero());
}

#[test]
fn test_collection_without_clone_is_checked_in_place() {
    let slots = Slots::new(vec![2, 3, 5, 7]);
    let mut report = ConformanceReport::new();
    let snapshot = check_random_access_collection(&mut report, &slots, &[2, 3, 5, 7], None);

    report.assert_conformant();
    assert!(snapshot.is_zero());
    assert_eq!(report.passed_counts()[&Law::StepFree], 7);
}
