//! Offset and limit arithmetic against a stepping model.

use super::common::sample_reference;
use collection_laws::containers::{limited_offset_index, BidirectionalOnly};
use collection_laws::navigation::{generic_distance, generic_limited_offset, generic_offset};
use proptest::prelude::*;

/// A container length and two positions inside it, plus a signed step
/// count that stays within `0..=len` from the first position.
fn move_strategy() -> impl Strategy<Value = (usize, usize, usize, isize)> {
    (0usize..20).prop_flat_map(|len| {
        (Just(len), 0..=len, 0..=len).prop_flat_map(|(len, from, limit)| {
            let back = -(from as isize);
            let ahead = (len - from) as isize;
            (Just(len), Just(from), Just(limit), back..=ahead)
        })
    })
}

proptest! {
    /// Property: O(1) limited offsets agree with walking one step at a time.
    #[test]
    fn prop_limited_offset_matches_stepping((len, from, limit, by) in move_strategy()) {
        let stepping = BidirectionalOnly::new(sample_reference(len));
        let walked = generic_limited_offset(&stepping, &from, by, &limit);
        prop_assert_eq!(limited_offset_index(from, by, limit), walked);
    }

    /// Property: the not-reached sentinel appears exactly when the move
    /// would cross the limit; otherwise the result is the plain offset.
    #[test]
    fn prop_limit_sentinel_iff_crossed((len, from, limit, by) in move_strategy()) {
        let numbers = sample_reference(len);
        let target = generic_offset(&numbers, &from, by);
        let crossed = if by >= 0 {
            from <= limit && limit < target
        } else {
            target < limit && limit <= from
        };

        let limited = generic_limited_offset(&numbers, &from, by, &limit);
        if crossed {
            prop_assert_eq!(limited, None);
        } else {
            prop_assert_eq!(limited, Some(target));
        }
    }

    /// Property: distance is antisymmetric and agrees with offset.
    #[test]
    fn prop_distance_inverts_offset((len, from, _limit, by) in move_strategy()) {
        let numbers = BidirectionalOnly::new(sample_reference(len));
        let target = generic_offset(&numbers, &from, by);
        prop_assert_eq!(generic_distance(&numbers, &from, &target), by);
        prop_assert_eq!(generic_distance(&numbers, &target, &from), -by);
    }
}
