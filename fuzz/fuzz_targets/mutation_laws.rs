// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the mutable checker's preconditions and round trip.
//!
//! Misuse (wrong length, palindromic source) must be rejected before any
//! write; everything else must round-trip on a `Vec`.

#![no_main]

use arbitrary::Arbitrary;
use collection_laws::{check_mutable_collection, CheckerMisuse, ConformanceReport};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    initial: Vec<i16>,
    source: Vec<i16>,
}

fuzz_target!(|input: Input| {
    let mut numbers = input.initial.clone();
    let mut report = ConformanceReport::new();

    match check_mutable_collection(&mut report, &mut numbers, &input.source) {
        Ok(()) => {
            report.assert_conformant();
            let reversed: Vec<i16> = input.source.iter().rev().copied().collect();
            assert_eq!(numbers, reversed);
        }
        Err(misuse) => {
            assert_eq!(numbers, input.initial, "rejected check wrote anyway");
            assert_eq!(report.assertions(), 0);
            match misuse {
                CheckerMisuse::LengthMismatch { expected, actual } => {
                    assert_eq!(expected, input.initial.len());
                    assert_eq!(actual, input.source.len());
                }
                CheckerMisuse::PalindromicSource { len } => {
                    assert!(input.source.iter().eq(input.source.iter().rev()));
                    assert_eq!(len, input.source.len());
                }
            }
        }
    }
});
