// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bidirectional laws: backward steps exactly undo forward steps, and
//! negative offsets agree with them.

use std::fmt::Debug;

use super::{forward, LawContext};
use crate::collection::BidirectionalCollection;
use crate::config::CheckConfig;
use crate::navigation::{generic_distance, generic_limited_offset, generic_offset};
use crate::sink::{Law, SourceLocation, ViolationSink};

/// Check the forward laws, then walk back from every visited position.
#[track_caller]
pub fn check_bidirectional_collection<S, C>(
    sink: &mut S,
    collection: &C,
    reference: &[C::Element],
) where
    S: ViolationSink + ?Sized,
    C: BidirectionalCollection + ?Sized,
    C::Element: PartialEq + Debug,
{
    check_bidirectional_collection_with(&CheckConfig::default(), sink, collection, reference);
}

#[track_caller]
pub fn check_bidirectional_collection_with<S, C>(
    config: &CheckConfig,
    sink: &mut S,
    collection: &C,
    reference: &[C::Element],
) where
    S: ViolationSink + ?Sized,
    C: BidirectionalCollection + ?Sized,
    C::Element: PartialEq + Debug,
{
    let mut ctx = LawContext::new(sink, config, SourceLocation::caller());
    run(&mut ctx, collection, reference);
}

pub(crate) fn run<S, C>(
    ctx: &mut LawContext<'_, S>,
    collection: &C,
    reference: &[C::Element],
) -> Option<Vec<C::Position>>
where
    S: ViolationSink + ?Sized,
    C: BidirectionalCollection + ?Sized,
    C::Element: PartialEq + Debug,
{
    let walk = forward::run(ctx, collection, reference)?;

    let _span =
        tracing::debug_span!("check_bidirectional_collection", elements = reference.len())
            .entered();

    for pair in walk.windows(2) {
        let (before, after) = (&pair[0], &pair[1]);
        ctx.expect_eq(
            Law::BackwardInverse,
            before,
            &collection.position_before(after),
            format_args!("position_before({after:?})"),
        );
    }

    let start = &walk[0];
    for (i, position) in walk.iter().enumerate() {
        let back = -(i as isize);

        let distance = generic_distance(collection, position, start);
        ctx.expect(
            Law::BackwardDistance,
            distance <= 0,
            format_args!("distance({position:?}, start) must not be positive"),
            || "<= 0".to_string(),
            || distance.to_string(),
        );
        ctx.expect_eq(
            Law::BackwardDistance,
            &back,
            &distance,
            format_args!("distance({position:?}, start)"),
        );

        ctx.expect_eq(
            Law::NegativeOffset,
            start,
            &generic_offset(collection, position, back),
            format_args!("offset({position:?}, {back})"),
        );
        ctx.expect_eq(
            Law::NegativeOffset,
            &Some(start.clone()),
            &generic_limited_offset(collection, position, back, start),
            format_args!("limited_offset({position:?}, {back}, limit: start)"),
        );
        ctx.expect_eq(
            Law::LimitedOffsetPastLimit,
            &None,
            &generic_limited_offset(collection, position, back - 1, start),
            format_args!("limited_offset({position:?}, {}, limit: start)", back - 1),
        );
    }

    Some(walk)
}
