// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the O(1) index arithmetic behind `Vec` and `VecDeque`.
//!
//! The constant-time `limited_offset` must give exactly the answer a
//! one-step-at-a-time walk gives, for every in-range move and every limit.

#![no_main]

use arbitrary::Arbitrary;
use collection_laws::containers::{index_distance, limited_offset_index, offset_index, BidirectionalOnly};
use collection_laws::navigation::limited_offset_by_stepping;

#[derive(Debug, Arbitrary)]
struct Move {
    len: u8,
    from: u8,
    limit: u8,
    by: i16,
}

libfuzzer_sys::fuzz_target!(|input: Move| {
    let len = input.len as usize;
    let from = input.from as usize % (len + 1);
    let limit = input.limit as usize % (len + 1);
    // clamp the move so the walk stays inside 0..=len
    let by = (input.by as isize).clamp(-(from as isize), (len - from) as isize);

    let target = offset_index(from, by);
    assert_eq!(index_distance(from, target), by);

    let model = BidirectionalOnly::new(vec![(); len]);
    let walked = limited_offset_by_stepping(&model, &from, by, &limit);
    assert_eq!(
        limited_offset_index(from, by, limit),
        walked,
        "from {from} by {by} with limit {limit} in 0..={len}"
    );
});
