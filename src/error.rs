// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for checker misuse.
//!
//! These are not law violations. They mean the check itself was set up so
//! that it could not prove anything, so it refuses to run.

/// The checker was called with inputs that make its laws vacuous.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckerMisuse {
    #[error("source sequence has {actual} elements but the collection holds {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error(
        "source sequence of {len} elements reads the same reversed, so the write/read round trip proves nothing"
    )]
    PalindromicSource { len: usize },
}
