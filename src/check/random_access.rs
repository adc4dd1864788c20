// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random-access laws: bulk navigation between the ends is correct *and*
//! takes zero single steps.

use std::fmt::Debug;
use std::rc::Rc;

use super::{bidirectional, LawContext};
use crate::collection::{Collection, RandomAccessCollection};
use crate::config::CheckConfig;
use crate::ledger::{Instrumented, LedgerHandle, LedgerSnapshot, OperationLedger};
use crate::navigation::{generic_distance, generic_limited_offset, generic_offset};
use crate::sink::{Law, SourceLocation, ViolationSink};

/// Check the bidirectional laws through an [`Instrumented`] view of
/// `collection`, then check the O(1) laws against the ledger.
///
/// The step-free laws can only fail when `ledger` is the handle shared by an
/// instrumented base *inside* `collection`, e.g. an adapter over
/// `Instrumented<Vec<T>>`; that is what catches the adapter stepping through
/// its base. With `None` a fresh ledger sits on top of the collection, sees
/// only bulk calls being delegated, and stays at zero: the values are still
/// checked, the cost is not.
///
/// Returns the ledger counts after the last bulk operation, which are zero
/// for a conforming collection.
#[track_caller]
pub fn check_random_access_collection<S, C>(
    sink: &mut S,
    collection: &C,
    reference: &[C::Element],
    ledger: Option<&LedgerHandle>,
) -> LedgerSnapshot
where
    S: ViolationSink + ?Sized,
    C: RandomAccessCollection + ?Sized,
    C::Element: PartialEq + Debug,
{
    check_random_access_collection_with(&CheckConfig::default(), sink, collection, reference, ledger)
}

#[track_caller]
pub fn check_random_access_collection_with<S, C>(
    config: &CheckConfig,
    sink: &mut S,
    collection: &C,
    reference: &[C::Element],
    ledger: Option<&LedgerHandle>,
) -> LedgerSnapshot
where
    S: ViolationSink + ?Sized,
    C: RandomAccessCollection + ?Sized,
    C::Element: PartialEq + Debug,
{
    let mut ctx = LawContext::new(sink, config, SourceLocation::caller());
    run(&mut ctx, collection, reference, ledger)
}

pub(crate) fn run<S, C>(
    ctx: &mut LawContext<'_, S>,
    collection: &C,
    reference: &[C::Element],
    ledger: Option<&LedgerHandle>,
) -> LedgerSnapshot
where
    S: ViolationSink + ?Sized,
    C: RandomAccessCollection + ?Sized,
    C::Element: PartialEq + Debug,
{
    let ledger = ledger.map_or_else(OperationLedger::shared, Rc::clone);
    let instrumented = Instrumented::new(collection, Rc::clone(&ledger));

    if bidirectional::run(ctx, &instrumented, reference).is_none() {
        tracing::debug!("walk failed, skipping constant-time laws");
        return ledger.snapshot();
    }

    let _span =
        tracing::debug_span!("check_random_access_collection", elements = reference.len())
            .entered();

    let n = reference.len() as isize;
    let start = instrumented.start_position();
    let end = instrumented.end_position();
    ledger.reset();

    let forward = generic_distance(&instrumented, &start, &end);
    ctx.expect_eq(Law::RandomAccessDistance, &n, &forward, format_args!("distance(start, end)"));
    expect_step_free(ctx, &ledger, "distance(start, end)");

    let backward = generic_distance(&instrumented, &end, &start);
    ctx.expect_eq(Law::RandomAccessDistance, &-n, &backward, format_args!("distance(end, start)"));
    expect_step_free(ctx, &ledger, "distance(end, start)");

    let to_end = generic_offset(&instrumented, &start, n);
    ctx.expect_eq(Law::RandomAccessOffset, &end, &to_end, format_args!("offset(start, {n})"));
    expect_step_free(ctx, &ledger, "offset(start, +count)");

    let to_start = generic_offset(&instrumented, &end, -n);
    ctx.expect_eq(Law::RandomAccessOffset, &start, &to_start, format_args!("offset(end, {})", -n));
    expect_step_free(ctx, &ledger, "offset(end, -count)");

    let limited_to_end = generic_limited_offset(&instrumented, &start, n, &end);
    ctx.expect_eq(
        Law::RandomAccessLimitedOffset,
        &Some(end.clone()),
        &limited_to_end,
        format_args!("limited_offset(start, {n}, limit: end)"),
    );
    expect_step_free(ctx, &ledger, "limited_offset(start, +count, limit: end)");

    let limited_to_start = generic_limited_offset(&instrumented, &end, -n, &start);
    ctx.expect_eq(
        Law::RandomAccessLimitedOffset,
        &Some(start.clone()),
        &limited_to_start,
        format_args!("limited_offset(end, {}, limit: start)", -n),
    );
    expect_step_free(ctx, &ledger, "limited_offset(end, -count, limit: start)");

    let count = instrumented.count();
    ctx.expect_eq(Law::Count, &reference.len(), &count, format_args!("count()"));
    expect_step_free(ctx, &ledger, "count()");

    ledger.snapshot()
}

/// Both ledger counters must still be zero. A nonzero count is reported and
/// cleared so the next operation is judged on its own.
fn expect_step_free<S: ViolationSink + ?Sized>(
    ctx: &mut LawContext<'_, S>,
    ledger: &OperationLedger,
    operation: &str,
) {
    let snapshot = ledger.snapshot();
    let clean = ctx.expect(
        Law::StepFree,
        snapshot.is_zero(),
        format_args!("{operation} fell back to single steps"),
        || LedgerSnapshot::default().to_string(),
        || snapshot.to_string(),
    );
    if !clean {
        ledger.reset();
    }
}
