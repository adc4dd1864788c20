// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The capability hierarchy every checker is written against.
//!
//! ```text
//! Sequence                         one pass over values, no positions
//! └── Collection                   positions, forward stepping, offsets, distance
//!     ├── BidirectionalCollection  exact backward stepping, negative offsets
//!     │   └── RandomAccessCollection   offsets and distance in O(1)
//!     └── MutableCollection        replace the value at a position in place
//! ```
//!
//! `Collection` ships linear defaults for `offset`, `limited_offset` and
//! `distance` built on `position_after`. A random-access container overrides
//! them; a bidirectional one overrides the offsets with the helpers in
//! [`crate::navigation`] so that negative offsets work.

use std::fmt::Debug;

/// Something that can hand out a fresh one-pass iterator over its values.
pub trait Sequence {
    type Element;

    type Iter<'a>: Iterator<Item = Self::Element>
    where
        Self: 'a;

    fn make_iterator(&self) -> Self::Iter<'_>;
}

/// A multi-pass sequence whose values live at ordered positions.
///
/// Positions are produced only by the collection itself. Walking from
/// `start_position` with `position_after` visits every position exactly once,
/// in strictly increasing order, and ends at `end_position`, which holds no
/// element.
pub trait Collection: Sequence {
    type Position: Ord + Clone + Debug;

    type Positions<'a>: Iterator<Item = Self::Position>
    where
        Self: 'a;

    fn start_position(&self) -> Self::Position;

    fn end_position(&self) -> Self::Position;

    /// The value at `position`. `position` must not be `end_position`.
    fn element(&self, position: &Self::Position) -> Self::Element;

    fn position_after(&self, position: &Self::Position) -> Self::Position;

    /// Every valid element position, from start to end (exclusive).
    fn positions(&self) -> Self::Positions<'_>;

    /// The position `by` steps away from `position`.
    ///
    /// The default walks forward one step at a time and therefore only
    /// accepts `by >= 0`.
    fn offset(&self, position: &Self::Position, by: isize) -> Self::Position {
        assert!(
            by >= 0,
            "forward-only collection cannot be offset by {by} (negative)"
        );
        let mut current = position.clone();
        for _ in 0..by {
            current = self.position_after(&current);
        }
        current
    }

    /// Like [`offset`](Self::offset), but `None` when the walk would pass
    /// `limit`. Landing exactly on `limit` is fine. A limit lying behind the
    /// direction of travel never applies.
    fn limited_offset(
        &self,
        position: &Self::Position,
        by: isize,
        limit: &Self::Position,
    ) -> Option<Self::Position> {
        assert!(
            by >= 0,
            "forward-only collection cannot be offset by {by} (negative)"
        );
        let mut current = position.clone();
        for _ in 0..by {
            if current == *limit {
                return None;
            }
            current = self.position_after(&current);
        }
        Some(current)
    }

    /// Signed number of steps from `from` to `to`.
    ///
    /// The default counts forward steps from the smaller of the two positions,
    /// so it needs nothing beyond `position_after` and the position order.
    fn distance(&self, from: &Self::Position, to: &Self::Position) -> isize {
        let (mut current, last, sign) = if from <= to {
            (from.clone(), to, 1)
        } else {
            (to.clone(), from, -1)
        };
        let mut steps = 0isize;
        while current != *last {
            current = self.position_after(&current);
            steps += 1;
        }
        sign * steps
    }

    fn count(&self) -> usize {
        self.distance(&self.start_position(), &self.end_position())
            .unsigned_abs()
    }

    fn is_empty(&self) -> bool {
        self.start_position() == self.end_position()
    }
}

/// A collection that can also step backwards, exactly undoing `position_after`.
///
/// Implementors should override [`Collection::offset`] and
/// [`Collection::limited_offset`] (for instance with
/// [`offset_by_stepping`](crate::navigation::offset_by_stepping)) so that
/// negative offsets are accepted.
pub trait BidirectionalCollection: Collection {
    fn position_before(&self, position: &Self::Position) -> Self::Position;
}

/// Marker: `offset`, `limited_offset`, `distance` and `count` run in O(1)
/// and never fall back to single steps.
pub trait RandomAccessCollection: BidirectionalCollection {}

/// A collection whose values can be replaced in place. Writing never changes
/// the set of positions.
pub trait MutableCollection: Collection {
    fn set_element(&mut self, position: &Self::Position, value: Self::Element);
}

// A shared reference is the same collection, read-only.

impl<C: Sequence + ?Sized> Sequence for &C {
    type Element = C::Element;
    type Iter<'a>
        = C::Iter<'a>
    where
        Self: 'a;

    fn make_iterator(&self) -> Self::Iter<'_> {
        <C as Sequence>::make_iterator(*self)
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    type Position = C::Position;
    type Positions<'a>
        = C::Positions<'a>
    where
        Self: 'a;

    fn start_position(&self) -> Self::Position {
        <C as Collection>::start_position(*self)
    }

    fn end_position(&self) -> Self::Position {
        <C as Collection>::end_position(*self)
    }

    fn element(&self, position: &Self::Position) -> Self::Element {
        <C as Collection>::element(*self, position)
    }

    fn position_after(&self, position: &Self::Position) -> Self::Position {
        <C as Collection>::position_after(*self, position)
    }

    fn positions(&self) -> Self::Positions<'_> {
        <C as Collection>::positions(*self)
    }

    fn offset(&self, position: &Self::Position, by: isize) -> Self::Position {
        <C as Collection>::offset(*self, position, by)
    }

    fn limited_offset(
        &self,
        position: &Self::Position,
        by: isize,
        limit: &Self::Position,
    ) -> Option<Self::Position> {
        <C as Collection>::limited_offset(*self, position, by, limit)
    }

    fn distance(&self, from: &Self::Position, to: &Self::Position) -> isize {
        <C as Collection>::distance(*self, from, to)
    }

    fn count(&self) -> usize {
        <C as Collection>::count(*self)
    }

    fn is_empty(&self) -> bool {
        <C as Collection>::is_empty(*self)
    }
}

impl<C: BidirectionalCollection + ?Sized> BidirectionalCollection for &C {
    fn position_before(&self, position: &Self::Position) -> Self::Position {
        <C as BidirectionalCollection>::position_before(*self, position)
    }
}

impl<C: RandomAccessCollection + ?Sized> RandomAccessCollection for &C {}
