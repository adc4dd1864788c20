//! Forward and bidirectional collection laws.

use super::common::{
    ClampedOffset, DriftingBackward, ExclusiveLimit, InclusiveDistance, LooseLimit,
    RepeatingPositions, SingleUse, SnapToLimit, SwappedSlots, UnsignedDistance,
};
use collection_laws::containers::{BidirectionalOnly, CharView, ForwardOnly, Reversed};
use collection_laws::{
    check_bidirectional_collection, check_forward_collection, ConformanceReport, FailFast, Law,
};
use pretty_assertions::assert_eq;

#[test]
fn test_conforming_containers_pass_with_fail_fast() {
    check_forward_collection(&mut FailFast, &ForwardOnly::new(vec![2, 4, 6]), &[2, 4, 6]);
    check_bidirectional_collection(&mut FailFast, &BidirectionalOnly::new(vec!['x']), &['x']);
    check_bidirectional_collection(
        &mut FailFast,
        &Reversed::new(BidirectionalOnly::new(vec![1, 2, 3])),
        &[3, 2, 1],
    );
}

#[test]
#[should_panic(expected = "law violation: [sequence-order]")]
fn test_fail_fast_stops_at_first_wrong_value() {
    check_forward_collection(&mut FailFast, &CharView::new("ab"), &['a', 'c']);
}

#[test]
fn test_loose_limit_is_caught_at_every_position() {
    let mut report = ConformanceReport::new();
    check_forward_collection(&mut report, &LooseLimit { items: vec![1, 2, 3] }, &[1, 2, 3]);

    assert_eq!(report.broken_laws(), vec![Law::LimitedOffsetPastLimit]);
    // p_0 ..= p_3
    assert_eq!(report.violations_of(Law::LimitedOffsetPastLimit).count(), 4);
}

#[test]
fn test_drifting_backward_step_breaks_inverse() {
    let mut report = ConformanceReport::new();
    check_bidirectional_collection(
        &mut report,
        &DriftingBackward { items: vec![1, 2, 3, 4] },
        &[1, 2, 3, 4],
    );

    assert_eq!(
        report.broken_laws(),
        vec![Law::BackwardInverse, Law::NegativeOffset]
    );
    let inverse: Vec<_> = report.violations_of(Law::BackwardInverse).collect();
    assert_eq!(inverse.len(), 1);
    assert_eq!(inverse[0].message, "position_before(4)");
    assert_eq!(inverse[0].expected, "3");
    assert_eq!(inverse[0].actual, "2");
}

#[test]
fn test_passing_walk_reproduces_reference_twice() {
    let mut report = ConformanceReport::new();
    check_forward_collection(&mut report, &vec!["a", "b"], &["a", "b"]);
    assert_eq!(report.passed_counts()[&Law::SequenceOrder], 2);
    assert_eq!(report.passed_counts()[&Law::ElementAccess], 2);
    assert_eq!(report.passed_counts()[&Law::RepeatedTraversal], 1);
}

#[test]
fn test_empty_char_view() {
    let mut report = ConformanceReport::new();
    check_bidirectional_collection(&mut report, &CharView::new(""), &[]);
    report.assert_conformant();
}

#[test]
fn test_step_backwards_in_position_order_is_caught() {
    let mut report = ConformanceReport::new();
    check_forward_collection(&mut report, &SwappedSlots { items: vec![10, 20, 30] }, &[10, 20, 30]);

    assert_eq!(report.broken_laws(), vec![Law::PositionOrder]);
    let violation = &report.violations()[0];
    assert_eq!(violation.message, "position_after(2)");
    assert_eq!(violation.expected, "a position greater than 2");
    assert_eq!(violation.actual, "1");
}

#[test]
fn test_positions_must_match_the_walk_even_when_values_agree() {
    let mut report = ConformanceReport::new();
    check_forward_collection(&mut report, &RepeatingPositions { items: vec![7, 7, 7] }, &[7, 7, 7]);

    assert_eq!(report.broken_laws(), vec![Law::PositionEnumeration]);
    let messages: Vec<_> = report
        .violations_of(Law::PositionEnumeration)
        .map(|v| v.message.as_str())
        .collect();
    assert_eq!(messages, vec!["positions() item 1", "positions() item 2"]);
}

#[test]
fn test_single_use_positions_fail_second_traversal() {
    let mut report = ConformanceReport::new();
    check_forward_collection(&mut report, &SingleUse::new(vec![1, 2, 3]), &[1, 2, 3]);

    assert_eq!(report.broken_laws(), vec![Law::RepeatedTraversal]);
    assert_eq!(report.violations()[0].actual, "[]");
}

#[test]
fn test_offset_short_of_end_is_caught_from_every_position() {
    let mut report = ConformanceReport::new();
    check_forward_collection(&mut report, &ClampedOffset { items: vec![1, 2, 3] }, &[1, 2, 3]);

    assert_eq!(report.broken_laws(), vec![Law::OffsetToEnd]);
    assert_eq!(report.violations_of(Law::OffsetToEnd).count(), 3);
    assert_eq!(report.violations()[0].message, "offset(0, 3)");
    assert_eq!(report.violations()[0].actual, "2");
}

#[test]
fn test_inclusive_distance_is_caught_including_end_to_end() {
    let mut report = ConformanceReport::new();
    check_forward_collection(&mut report, &InclusiveDistance { items: vec![1, 2, 3] }, &[1, 2, 3]);

    assert_eq!(report.broken_laws(), vec![Law::DistanceToEnd]);
    // p_0, p_1, p_2 and distance(end, end)
    assert_eq!(report.violations_of(Law::DistanceToEnd).count(), 4);
    let last = report.violations().last().unwrap();
    assert_eq!(last.message, "distance(end, end)");
    assert_eq!(last.actual, "1");
}

#[test]
fn test_unsigned_distance_breaks_backward_distance_only() {
    let mut report = ConformanceReport::new();
    check_bidirectional_collection(&mut report, &UnsignedDistance { items: vec![1, 2, 3] }, &[1, 2, 3]);

    assert_eq!(report.broken_laws(), vec![Law::BackwardDistance]);
    // sign and value checks for p_1, p_2, p_3
    assert_eq!(report.violations_of(Law::BackwardDistance).count(), 6);
    assert_eq!(report.violations()[0].message, "distance(1, start) must not be positive");
}

#[test]
fn test_limited_offset_snapping_to_limit_is_caught() {
    let mut report = ConformanceReport::new();
    check_forward_collection(&mut report, &SnapToLimit { items: vec![1, 2, 3] }, &[1, 2, 3]);

    assert_eq!(report.broken_laws(), vec![Law::LimitedOffsetWithinLimit]);
    // limits p_1, p_2 and end
    assert_eq!(report.violations_of(Law::LimitedOffsetWithinLimit).count(), 3);
    let first = &report.violations()[0];
    assert_eq!(first.message, "limited_offset(start, 0, limit: 1)");
    assert_eq!(first.expected, "Some(0)");
    assert_eq!(first.actual, "Some(1)");
}

#[test]
fn test_landing_on_the_limit_must_succeed() {
    let mut report = ConformanceReport::new();
    check_forward_collection(&mut report, &ExclusiveLimit { items: vec![1, 2, 3] }, &[1, 2, 3]);

    assert_eq!(report.broken_laws(), vec![Law::LimitedOffsetAtLimit]);
    // two checks at each of p_0 ..= p_3
    assert_eq!(report.violations_of(Law::LimitedOffsetAtLimit).count(), 8);
    let zero_step: Vec<_> = report
        .violations()
        .iter()
        .filter(|v| v.message.ends_with("0, limit: itself)"))
        .collect();
    assert_eq!(zero_step.len(), 4);
    assert_eq!(zero_step[0].message, "limited_offset(0, 0, limit: itself)");
    assert_eq!(zero_step[0].actual, "None");
}
