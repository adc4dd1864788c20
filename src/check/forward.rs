// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Forward collection laws.
//!
//! Walk `p_0 = start, p_1, …, p_n = end` with `position_after` and, at each
//! `p_i`, cross-check everything the collection claims about that position:
//!
//! | Law                           | Assertion                                            |
//! |-------------------------------|------------------------------------------------------|
//! | `position-enumeration`        | `positions()` yields `p_i` as its i-th item           |
//! | `position-order`              | `position_after(p_i) > p_i`                           |
//! | `element-access`              | `element(p_i) == reference[i]`                        |
//! | `offset-to-end`               | `offset(p_i, n - i) == end`                           |
//! | `limited-offset-within-limit` | `limited_offset(start, i - 1, p_i) == offset(start, i - 1)` |
//! | `limited-offset-at-limit`     | `limited_offset(start, i, p_i) == Some(p_i)`          |
//! | `limited-offset-past-limit`   | `limited_offset(start, i + 1, p_i) == None`           |
//! | `distance-to-end`             | `distance(p_i, end) == n - i`                         |
//!
//! The limit laws also run at `p_n = end`. Afterwards a second traversal
//! through a fresh `positions()` must read the reference again.

use std::fmt::Debug;

use super::{sequence, LawContext};
use crate::collection::Collection;
use crate::config::CheckConfig;
use crate::navigation::{generic_distance, generic_limited_offset, generic_offset};
use crate::sink::{Law, SourceLocation, ViolationSink};

/// Check the sequence laws, then walk the collection position by position.
#[track_caller]
pub fn check_forward_collection<S, C>(sink: &mut S, collection: &C, reference: &[C::Element])
where
    S: ViolationSink + ?Sized,
    C: Collection + ?Sized,
    C::Element: PartialEq + Debug,
{
    check_forward_collection_with(&CheckConfig::default(), sink, collection, reference);
}

#[track_caller]
pub fn check_forward_collection_with<S, C>(
    config: &CheckConfig,
    sink: &mut S,
    collection: &C,
    reference: &[C::Element],
) where
    S: ViolationSink + ?Sized,
    C: Collection + ?Sized,
    C::Element: PartialEq + Debug,
{
    let mut ctx = LawContext::new(sink, config, SourceLocation::caller());
    run(&mut ctx, collection, reference);
}

/// Returns the walked positions `p_0 ..= p_n` if the walk reached `end` in
/// exactly `n` steps, for the stronger checkers to reuse.
pub(crate) fn run<S, C>(
    ctx: &mut LawContext<'_, S>,
    collection: &C,
    reference: &[C::Element],
) -> Option<Vec<C::Position>>
where
    S: ViolationSink + ?Sized,
    C: Collection + ?Sized,
    C::Element: PartialEq + Debug,
{
    sequence::run(ctx, collection, reference);

    let _span =
        tracing::debug_span!("check_forward_collection", elements = reference.len()).entered();
    let n = reference.len();

    ctx.expect_eq(Law::Count, &n, &collection.count(), format_args!("count()"));
    ctx.expect_eq(
        Law::Count,
        &reference.is_empty(),
        &collection.is_empty(),
        format_args!("is_empty()"),
    );

    let start = collection.start_position();
    let end = collection.end_position();
    let walk = walk_to_end(ctx, collection, &start, &end, n)?;
    let mut declared = collection.positions();

    for (i, (current, expected)) in walk.iter().zip(reference).enumerate() {
        match declared.next() {
            Some(listed) => {
                ctx.expect_eq(
                    Law::PositionEnumeration,
                    current,
                    &listed,
                    format_args!("positions() item {i}"),
                );
            }
            None => ctx.fail(
                Law::PositionEnumeration,
                format_args!("positions() ended early"),
                format!("{current:?} at item {i}"),
                "None".to_string(),
            ),
        }

        ctx.expect_eq(
            Law::ElementAccess,
            expected,
            &collection.element(current),
            format_args!("element at {current:?} (offset {i})"),
        );

        let remaining = (n - i) as isize;
        ctx.expect_eq(
            Law::OffsetToEnd,
            &end,
            &generic_offset(collection, current, remaining),
            format_args!("offset({current:?}, {remaining})"),
        );
        check_limits(ctx, collection, &start, current, i);
        ctx.expect_eq(
            Law::DistanceToEnd,
            &remaining,
            &generic_distance(collection, current, &end),
            format_args!("distance({current:?}, end)"),
        );
    }

    if let Some(extra) = declared.next() {
        ctx.fail(
            Law::PositionEnumeration,
            format_args!("positions() kept going past the last element"),
            "None".to_string(),
            format!("{extra:?}"),
        );
    }

    check_limits(ctx, collection, &start, &end, n);
    ctx.expect_eq(
        Law::DistanceToEnd,
        &0,
        &generic_distance(collection, &end, &end),
        format_args!("distance(end, end)"),
    );

    let reread: Vec<C::Element> = collection
        .positions()
        .map(|position| collection.element(&position))
        .collect();
    ctx.expect_eq(
        Law::RepeatedTraversal,
        reference,
        reread.as_slice(),
        format_args!("second traversal through positions()"),
    );

    Some(walk)
}

/// Step from `start` exactly `n` times, checking that every step moves
/// strictly forward and that the last one lands on `end`. Returns
/// `p_0 ..= p_n`, or `None` (after reporting) if the walk is the wrong length;
/// the remaining laws are meaningless without a valid walk.
fn walk_to_end<S, C>(
    ctx: &mut LawContext<'_, S>,
    collection: &C,
    start: &C::Position,
    end: &C::Position,
    n: usize,
) -> Option<Vec<C::Position>>
where
    S: ViolationSink + ?Sized,
    C: Collection + ?Sized,
{
    let mut walk = Vec::with_capacity(n + 1);
    let mut current = start.clone();

    for i in 0..n {
        if current == *end {
            ctx.fail(
                Law::WalkLength,
                format_args!("walk from start reached end after {i} steps"),
                format!("{n} steps"),
                format!("{i} steps"),
            );
            return None;
        }
        let next = collection.position_after(&current);
        ctx.expect(
            Law::PositionOrder,
            next > current,
            format_args!("position_after({current:?})"),
            || format!("a position greater than {current:?}"),
            || format!("{next:?}"),
        );
        walk.push(std::mem::replace(&mut current, next));
    }

    if current != *end {
        ctx.fail(
            Law::WalkLength,
            format_args!("walk from start did not reach end after {n} steps"),
            format!("{end:?}"),
            format!("{current:?}"),
        );
        return None;
    }
    ctx.pass(Law::WalkLength);
    walk.push(current);
    Some(walk)
}

/// Limited-offset laws for the position `current`, `i` steps from `start`.
fn check_limits<S, C>(
    ctx: &mut LawContext<'_, S>,
    collection: &C,
    start: &C::Position,
    current: &C::Position,
    i: usize,
) where
    S: ViolationSink + ?Sized,
    C: Collection + ?Sized,
{
    let i = i as isize;

    if i >= 1 {
        let unlimited = generic_offset(collection, start, i - 1);
        ctx.expect_eq(
            Law::LimitedOffsetWithinLimit,
            &Some(unlimited),
            &generic_limited_offset(collection, start, i - 1, current),
            format_args!("limited_offset(start, {}, limit: {current:?})", i - 1),
        );
    }

    ctx.expect_eq(
        Law::LimitedOffsetAtLimit,
        &Some(current.clone()),
        &generic_limited_offset(collection, start, i, current),
        format_args!("limited_offset(start, {i}, limit: {current:?})"),
    );
    ctx.expect_eq(
        Law::LimitedOffsetAtLimit,
        &Some(current.clone()),
        &generic_limited_offset(collection, current, 0, current),
        format_args!("limited_offset({current:?}, 0, limit: itself)"),
    );

    ctx.expect_eq(
        Law::LimitedOffsetPastLimit,
        &None,
        &generic_limited_offset(collection, start, i + 1, current),
        format_args!("limited_offset(start, {}, limit: {current:?})", i + 1),
    );
}
