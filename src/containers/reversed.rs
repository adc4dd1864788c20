// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A view of a bidirectional collection back to front.

use std::cmp::Ordering;

use crate::collection::{
    BidirectionalCollection, Collection, MutableCollection, RandomAccessCollection, Sequence,
};
use crate::navigation::{IndexingIterator, PositionWalk};

/// A base position, ordered backwards.
///
/// `ReversedPosition(p)` denotes the element *before* `p` in the base, so
/// `ReversedPosition(base.end)` is the first position of the reversed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReversedPosition<P>(pub P);

impl<P: Ord> PartialOrd for ReversedPosition<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord> Ord for ReversedPosition<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // INVARIANT: REVERSED_ORDER, a < b in the view iff b < a in the base
        other.0.cmp(&self.0)
    }
}

/// Bulk navigation maps straight onto the base with the sign flipped, so the
/// view is random-access whenever the base is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reversed<C> {
    base: C,
}

impl<C: BidirectionalCollection> Reversed<C> {
    pub fn new(base: C) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &C {
        &self.base
    }

    pub fn into_base(self) -> C {
        self.base
    }
}

impl<C: BidirectionalCollection> Sequence for Reversed<C> {
    type Element = C::Element;
    type Iter<'a>
        = IndexingIterator<'a, Self>
    where
        Self: 'a;

    fn make_iterator(&self) -> Self::Iter<'_> {
        IndexingIterator::new(self)
    }
}

impl<C: BidirectionalCollection> Collection for Reversed<C> {
    type Position = ReversedPosition<C::Position>;
    type Positions<'a>
        = PositionWalk<'a, Self>
    where
        Self: 'a;

    fn start_position(&self) -> Self::Position {
        ReversedPosition(self.base.end_position())
    }

    fn end_position(&self) -> Self::Position {
        ReversedPosition(self.base.start_position())
    }

    fn element(&self, position: &Self::Position) -> C::Element {
        self.base.element(&self.base.position_before(&position.0))
    }

    fn position_after(&self, position: &Self::Position) -> Self::Position {
        ReversedPosition(self.base.position_before(&position.0))
    }

    fn positions(&self) -> Self::Positions<'_> {
        PositionWalk::new(self)
    }

    fn offset(&self, position: &Self::Position, by: isize) -> Self::Position {
        ReversedPosition(self.base.offset(&position.0, -by))
    }

    fn limited_offset(
        &self,
        position: &Self::Position,
        by: isize,
        limit: &Self::Position,
    ) -> Option<Self::Position> {
        self.base
            .limited_offset(&position.0, -by, &limit.0)
            .map(ReversedPosition)
    }

    fn distance(&self, from: &Self::Position, to: &Self::Position) -> isize {
        self.base.distance(&to.0, &from.0)
    }

    fn count(&self) -> usize {
        self.base.count()
    }

    fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

impl<C: BidirectionalCollection> BidirectionalCollection for Reversed<C> {
    fn position_before(&self, position: &Self::Position) -> Self::Position {
        ReversedPosition(self.base.position_after(&position.0))
    }
}

impl<C: RandomAccessCollection> RandomAccessCollection for Reversed<C> {}

impl<C: BidirectionalCollection + MutableCollection> MutableCollection for Reversed<C> {
    fn set_element(&mut self, position: &Self::Position, value: C::Element) {
        let target = self.base.position_before(&position.0);
        self.base.set_element(&target, value);
    }
}
