//! Fixtures shared across unit tests, integration tests, benches and the CLI.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::collection::Collection;

/// `n` distinct, non-monotonic values: `[0, 7, 14, …]` taken modulo a prime
/// larger than any sensible `n`, so no two adjacent elements are equal and a
/// reversed copy is never mistaken for the original.
pub fn sample_reference(n: usize) -> Vec<i64> {
    const MODULUS: i64 = 1_000_003;
    (0..n as i64).map(|i| (i * 7_919) % MODULUS).collect()
}

/// A write source of `len` elements that is not a palindrome, or `None` when
/// no such source exists (`len < 2`).
pub fn non_palindromic_source(len: usize) -> Option<Vec<i64>> {
    if len < 2 {
        return None;
    }
    Some((0..len as i64).map(|i| -(i + 1)).collect())
}

/// `n` characters cycling through one-, two-, three- and four-byte UTF-8
/// encodings, so byte offsets and character counts disagree.
pub fn sample_text(n: usize) -> String {
    ['a', 'é', '€', '😀', 'z'].iter().cycle().take(n).collect()
}

/// Read every element through `positions()`.
pub fn elements_of<C: Collection + ?Sized>(collection: &C) -> Vec<C::Element> {
    collection
        .positions()
        .map(|position| collection.element(&position))
        .collect()
}
