// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Mutable laws: a write is visible at its own position and nowhere else.

use std::fmt::Debug;

use super::LawContext;
use crate::collection::MutableCollection;
use crate::config::CheckConfig;
use crate::error::CheckerMisuse;
use crate::sink::{Law, SourceLocation, ViolationSink};

/// Overwrite `collection` with `source`, read it back, then do the same with
/// `source` reversed.
///
/// `source` must have exactly as many elements as the collection and must
/// not be a palindrome (which includes empty and single-element sources);
/// otherwise nothing is written and [`CheckerMisuse`] is returned.
#[track_caller]
pub fn check_mutable_collection<S, C>(
    sink: &mut S,
    collection: &mut C,
    source: &[C::Element],
) -> Result<(), CheckerMisuse>
where
    S: ViolationSink + ?Sized,
    C: MutableCollection + ?Sized,
    C::Element: Clone + PartialEq + Debug,
{
    check_mutable_collection_with(&CheckConfig::default(), sink, collection, source)
}

#[track_caller]
pub fn check_mutable_collection_with<S, C>(
    config: &CheckConfig,
    sink: &mut S,
    collection: &mut C,
    source: &[C::Element],
) -> Result<(), CheckerMisuse>
where
    S: ViolationSink + ?Sized,
    C: MutableCollection + ?Sized,
    C::Element: Clone + PartialEq + Debug,
{
    let count = collection.count();
    if source.len() != count {
        return Err(CheckerMisuse::LengthMismatch {
            expected: count,
            actual: source.len(),
        });
    }
    if source.iter().eq(source.iter().rev()) {
        return Err(CheckerMisuse::PalindromicSource { len: source.len() });
    }

    let mut ctx = LawContext::new(sink, config, SourceLocation::caller());
    let _span = tracing::debug_span!("check_mutable_collection", elements = count).entered();

    let positions: Vec<C::Position> = collection.positions().collect();
    let reversed: Vec<C::Element> = source.iter().rev().cloned().collect();

    overwrite(collection, &positions, source);
    read_back(&mut ctx, collection, source, "source");

    overwrite(collection, &positions, &reversed);
    read_back(&mut ctx, collection, &reversed, "reversed source");

    let after: Vec<C::Position> = collection.positions().collect();
    ctx.expect_eq(
        Law::PositionStability,
        positions.as_slice(),
        after.as_slice(),
        format_args!("positions() after writes"),
    );

    Ok(())
}

fn overwrite<C>(collection: &mut C, positions: &[C::Position], values: &[C::Element])
where
    C: MutableCollection + ?Sized,
    C::Element: Clone,
{
    for (position, value) in positions.iter().zip(values) {
        collection.set_element(position, value.clone());
    }
}

fn read_back<S, C>(
    ctx: &mut LawContext<'_, S>,
    collection: &C,
    expected: &[C::Element],
    label: &str,
) where
    S: ViolationSink + ?Sized,
    C: MutableCollection + ?Sized,
    C::Element: PartialEq + Debug,
{
    let positions: Vec<C::Position> = collection.positions().collect();
    for (i, (position, value)) in positions.iter().zip(expected).enumerate() {
        ctx.expect_eq(
            Law::WriteReadBack,
            value,
            &collection.element(position),
            format_args!("element {i} after writing the {label}"),
        );
    }
    if positions.len() != expected.len() {
        ctx.fail(
            Law::WriteReadBack,
            format_args!("element count after writing the {label}"),
            expected.len().to_string(),
            positions.len().to_string(),
        );
    }
}
