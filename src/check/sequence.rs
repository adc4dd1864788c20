// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One-pass sequence laws: order, length, and exhausted-forever.

use std::fmt::Debug;

use super::LawContext;
use crate::collection::Sequence;
use crate::config::CheckConfig;
use crate::sink::{Law, SourceLocation, ViolationSink};

/// Draw every element of `sequence` and compare it against `reference`.
///
/// Also checks that the iterator ends exactly where the reference does and
/// keeps returning `None` afterwards.
#[track_caller]
pub fn check_sequence<S, Q>(sink: &mut S, sequence: &Q, reference: &[Q::Element])
where
    S: ViolationSink + ?Sized,
    Q: Sequence + ?Sized,
    Q::Element: PartialEq + Debug,
{
    check_sequence_with(&CheckConfig::default(), sink, sequence, reference);
}

#[track_caller]
pub fn check_sequence_with<S, Q>(
    config: &CheckConfig,
    sink: &mut S,
    sequence: &Q,
    reference: &[Q::Element],
) where
    S: ViolationSink + ?Sized,
    Q: Sequence + ?Sized,
    Q::Element: PartialEq + Debug,
{
    let mut ctx = LawContext::new(sink, config, SourceLocation::caller());
    run(&mut ctx, sequence, reference);
}

pub(crate) fn run<S, Q>(ctx: &mut LawContext<'_, S>, sequence: &Q, reference: &[Q::Element])
where
    S: ViolationSink + ?Sized,
    Q: Sequence + ?Sized,
    Q::Element: PartialEq + Debug,
{
    let _span = tracing::debug_span!("check_sequence", elements = reference.len()).entered();
    let expected_len = reference.len();
    let mut iter = sequence.make_iterator();

    if ctx.config().check_size_hint {
        let (lower, upper) = iter.size_hint();
        ctx.expect(
            Law::SizeHint,
            lower <= expected_len && upper.map_or(true, |upper| upper >= expected_len),
            format_args!("size_hint() before the first draw"),
            || format!("bounds around {expected_len}"),
            || format!("({lower}, {upper:?})"),
        );
    }

    let mut exhausted = false;
    for (offset, expected) in reference.iter().enumerate() {
        if let Some(actual) = iter.next() {
            ctx.expect_eq(
                Law::SequenceOrder,
                expected,
                &actual,
                format_args!("element {offset}"),
            );
        } else {
            ctx.fail(
                Law::SequenceLength,
                format_args!("iterator ended before element {offset} of {expected_len}"),
                format!("{expected:?}"),
                "None".to_string(),
            );
            exhausted = true;
            break;
        }
    }

    if !exhausted {
        match iter.next() {
            None => ctx.pass(Law::SequenceLength),
            Some(extra) => {
                // Draining could run forever, so the exhausted-forever law
                // is left unchecked for an overlong iterator.
                ctx.fail(
                    Law::SequenceLength,
                    format_args!("iterator kept going after {expected_len} elements"),
                    "exhaustion".to_string(),
                    format!("extra element {extra:?}"),
                );
                return;
            }
        }
    }

    for draw in 1..=ctx.config().exhausted_redraws {
        if let Some(revived) = iter.next() {
            ctx.fail(
                Law::ExhaustedForever,
                format_args!("draw {draw} after exhaustion"),
                "None".to_string(),
                format!("Some({revived:?})"),
            );
            return;
        }
    }
    ctx.pass(Law::ExhaustedForever);
}
