// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for `CharView` and `Reversed` over arbitrary UTF-8.
//!
//! Byte-offset positions over variable-width characters are where an
//! off-by-one hides. Every string must pass the bidirectional laws in both
//! directions.

#![no_main]

use collection_laws::containers::{CharView, Reversed};
use collection_laws::{check_bidirectional_collection, FailFast};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    // the forward checker is quadratic; long inputs only slow the fuzzer
    if text.len() > 256 {
        return;
    }
    let chars: Vec<char> = text.chars().collect();
    check_bidirectional_collection(&mut FailFast, &CharView::new(text), &chars);

    let backwards: Vec<char> = chars.iter().rev().copied().collect();
    check_bidirectional_collection(&mut FailFast, &Reversed::new(CharView::new(text)), &backwards);
});
