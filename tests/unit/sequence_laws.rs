//! One-pass sequence laws.

use super::common::{Reviving, UnderstatedHint};
use collection_laws::containers::IterSequence;
use collection_laws::{
    check_sequence, check_sequence_with, CheckConfig, ConformanceReport, Law, Violation,
};

#[test]
fn test_revived_iterator_breaks_exhausted_forever() {
    let mut report = ConformanceReport::new();
    check_sequence(&mut report, &Reviving { items: vec![4, 5] }, &[4, 5]);

    assert_eq!(report.broken_laws(), vec![Law::ExhaustedForever]);
    let violation = &report.violations()[0];
    assert_eq!(violation.message, "draw 1 after exhaustion");
    assert_eq!(violation.actual, "Some(4)");
}

#[test]
fn test_zero_redraws_cannot_see_revival() {
    // The revival happens on the first extra draw, which this config skips.
    let mut report = ConformanceReport::new();
    check_sequence_with(
        &CheckConfig::default().with_exhausted_redraws(0),
        &mut report,
        &Reviving { items: vec![1] },
        &[1],
    );
    report.assert_conformant();
}

#[test]
fn test_violation_points_at_calling_test() {
    let mut report = ConformanceReport::new();
    check_sequence(&mut report, &IterSequence::new(1..3), &[1, 2, 3]);

    let location = report.violations()[0].location;
    assert!(location.file.ends_with("sequence_laws.rs"), "{location}");
}

#[test]
fn test_vec_sink_collects_every_violation() {
    let mut violations: Vec<Violation> = Vec::new();
    check_sequence(&mut violations, &IterSequence::new([9, 9, 9].into_iter()), &[1, 2, 3]);
    assert_eq!(violations.len(), 3);
    assert!(violations.iter().all(|v| v.law == Law::SequenceOrder));
}

#[test]
fn test_understated_size_hint_is_caught_and_can_be_disabled() {
    let hinted = UnderstatedHint { items: vec![1, 2, 3] };

    let mut report = ConformanceReport::new();
    check_sequence(&mut report, &hinted, &[1, 2, 3]);
    assert_eq!(report.broken_laws(), vec![Law::SizeHint]);
    assert_eq!(report.violations()[0].actual, "(2, Some(2))");

    let mut relaxed = ConformanceReport::new();
    check_sequence_with(
        &CheckConfig::default().with_size_hint_check(false),
        &mut relaxed,
        &hinted,
        &[1, 2, 3],
    );
    relaxed.assert_conformant();
}
