// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for collection-laws index arithmetic.
//!
//! This standalone crate extracts the O(1) navigation used by the `Vec` and
//! `VecDeque` reference containers and proves it equivalent to walking one
//! position at a time.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: `limited_offset_index` never panics, for any inputs
//! 2. **Model agreement**: it matches a one-step-at-a-time walk
//! 3. **Limit respected**: a `Some` result never lies past the limit
//! 4. **Distance**: `index_distance(p, offset_index(p, k)) == k`

// ============================================================================
// INDEX ARITHMETIC (copied from src/containers/indexed.rs)
// ============================================================================

/// `position + by`; panics if the result leaves `usize`.
pub fn offset_index(position: usize, by: isize) -> usize {
    match position.checked_add_signed(by) {
        Some(target) => target,
        None => panic!("offset {by} from index {position} is out of range"),
    }
}

/// `position + by`, or `None` if the move would pass `limit`.
pub fn limited_offset_index(position: usize, by: isize, limit: usize) -> Option<usize> {
    let distance = by.unsigned_abs();
    // INVARIANT: LIMIT_NEVER_CROSSED, the subtractions below only run when
    // the limit lies on the side of travel
    let passes_limit = if by >= 0 {
        limit >= position && distance > limit - position
    } else {
        limit <= position && distance > position - limit
    };
    if passes_limit {
        return None;
    }
    position.checked_add_signed(by)
}

pub fn index_distance(from: usize, to: usize) -> isize {
    to as isize - from as isize
}

// ============================================================================
// STEPPING MODEL
// ============================================================================

/// Reference semantics: take `|by|` single steps, refusing to leave `limit`.
pub fn limited_offset_by_stepping(position: usize, by: isize, limit: usize) -> Option<usize> {
    let mut current = position;
    for _ in 0..by.unsigned_abs() {
        if current == limit {
            return None;
        }
        current = if by >= 0 { current + 1 } else { current - 1 };
    }
    Some(current)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Largest container the bounded proofs explore.
    const MAX_LEN: usize = 8;

    /// Verify limited_offset_index never panics, whatever the inputs.
    #[kani::proof]
    fn verify_limited_offset_no_panic() {
        let position: usize = kani::any();
        let by: isize = kani::any();
        let limit: usize = kani::any();

        let _ = limited_offset_index(position, by, limit);
    }

    /// Verify the O(1) answer equals the stepping model for every in-range
    /// move in a container of up to MAX_LEN elements.
    #[kani::proof]
    #[kani::unwind(10)] // MAX_LEN steps + 2
    fn verify_matches_stepping_model() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let position: usize = kani::any_where(|&p| p <= len);
        let limit: usize = kani::any_where(|&l| l <= len);
        let by: isize = kani::any_where(|&k: &isize| {
            k >= -(position as isize) && k <= (len - position) as isize
        });

        kani::assert(
            limited_offset_index(position, by, limit)
                == limited_offset_by_stepping(position, by, limit),
            "constant-time limited offset must match the stepping model",
        );
    }

    /// Verify a successful move never ends beyond a limit ahead of it.
    #[kani::proof]
    fn verify_result_respects_limit() {
        let position: usize = kani::any();
        let by: isize = kani::any();
        let limit: usize = kani::any();

        if let Some(target) = limited_offset_index(position, by, limit) {
            if by >= 0 && limit >= position {
                kani::assert(target <= limit, "forward move overshot its limit");
            }
            if by < 0 && limit <= position {
                kani::assert(target >= limit, "backward move overshot its limit");
            }
        }
    }

    /// Verify distance inverts offset for moves that stay in range.
    #[kani::proof]
    fn verify_distance_inverts_offset() {
        let position: usize = kani::any_where(|&p| p <= isize::MAX as usize / 2);
        let by: isize = kani::any_where(|&k: &isize| {
            k > isize::MIN / 2 && k < isize::MAX / 2 && position.checked_add_signed(k).is_some()
        });

        let target = offset_index(position, by);
        kani::assert(
            index_distance(position, target) == by,
            "distance must undo offset",
        );
    }
}
