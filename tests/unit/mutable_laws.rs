//! Mutable collection laws.

use super::common::{elements_of, ShiftingWrites};
use collection_laws::containers::{BidirectionalOnly, Reversed};
use collection_laws::{check_mutable_collection, CheckerMisuse, ConformanceReport, Law};

#[test]
fn test_one_two_three_round_trip() {
    let mut numbers = vec![1, 2, 3];
    let mut report = ConformanceReport::new();
    check_mutable_collection(&mut report, &mut numbers, &[3, 2, 1]).unwrap();

    report.assert_conformant();
    // three reads after [3, 2, 1], three after [1, 2, 3]
    assert_eq!(report.passed_counts()[&Law::WriteReadBack], 6);
    assert_eq!(report.passed_counts()[&Law::PositionStability], 1);
    assert_eq!(numbers, vec![1, 2, 3]);
}

#[test]
fn test_shifting_writes_are_caught() {
    let mut shifting = ShiftingWrites {
        items: vec![0, 0, 0],
    };
    let mut report = ConformanceReport::new();
    check_mutable_collection(&mut report, &mut shifting, &[1, 2, 3]).unwrap();

    assert_eq!(report.broken_laws(), vec![Law::WriteReadBack]);
    let first = &report.violations()[0];
    assert_eq!(first.message, "element 0 after writing the source");
    assert_eq!(first.expected, "1");
    assert_eq!(first.actual, "3");
}

#[test]
fn test_misuse_is_rejected_before_any_write() {
    let mut list = BidirectionalOnly::new(vec![7, 8, 9]);
    let mut report = ConformanceReport::new();

    let err = check_mutable_collection(&mut report, &mut list, &[1, 2, 3, 4]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "source sequence has 4 elements but the collection holds 3"
    );

    let err = check_mutable_collection(&mut report, &mut list, &[5, 0, 5]).unwrap_err();
    assert!(matches!(err, CheckerMisuse::PalindromicSource { len: 3 }));

    assert_eq!(list.as_slice(), &[7, 8, 9]);
    assert_eq!(report.assertions(), 0);
}

#[test]
fn test_writes_through_reversed_view_land_mirrored() {
    let mut reversed = Reversed::new(vec!['a', 'b', 'c']);
    let mut report = ConformanceReport::new();
    check_mutable_collection(&mut report, &mut reversed, &['x', 'y', 'z']).unwrap();

    report.assert_conformant();
    // last pass wrote ['z', 'y', 'x'] front to back through the view
    assert_eq!(elements_of(&reversed), vec!['z', 'y', 'x']);
    assert_eq!(reversed.into_base(), vec!['x', 'y', 'z']);
}
