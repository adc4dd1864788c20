// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vectors that only admit to part of what they can do.
//!
//! `ForwardOnly` relies entirely on the linear `Collection` defaults and
//! `BidirectionalOnly` on the stepping helpers, so checking them exercises
//! exactly those code paths.

use crate::collection::{BidirectionalCollection, Collection, MutableCollection, Sequence};
use crate::navigation::{
    limited_offset_by_stepping, offset_by_stepping, IndexingIterator, PositionWalk,
};

/// A forward-only, mutable list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ForwardOnly<T> {
    items: Vec<T>,
}

impl<T> ForwardOnly<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Sequence for ForwardOnly<T> {
    type Element = T;
    type Iter<'a>
        = IndexingIterator<'a, Self>
    where
        Self: 'a;

    fn make_iterator(&self) -> Self::Iter<'_> {
        IndexingIterator::new(self)
    }
}

impl<T: Clone> Collection for ForwardOnly<T> {
    type Position = usize;
    type Positions<'a>
        = PositionWalk<'a, Self>
    where
        Self: 'a;

    fn start_position(&self) -> usize {
        0
    }

    fn end_position(&self) -> usize {
        self.items.len()
    }

    fn element(&self, position: &usize) -> T {
        self.items[*position].clone()
    }

    fn position_after(&self, position: &usize) -> usize {
        assert!(
            *position < self.items.len(),
            "cannot step past the end of a {}-element list",
            self.items.len()
        );
        position + 1
    }

    fn positions(&self) -> Self::Positions<'_> {
        PositionWalk::new(self)
    }
}

impl<T: Clone> MutableCollection for ForwardOnly<T> {
    fn set_element(&mut self, position: &usize, value: T) {
        self.items[*position] = value;
    }
}

/// A bidirectional, mutable list with linear offsets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BidirectionalOnly<T> {
    items: Vec<T>,
}

impl<T> BidirectionalOnly<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> Sequence for BidirectionalOnly<T> {
    type Element = T;
    type Iter<'a>
        = IndexingIterator<'a, Self>
    where
        Self: 'a;

    fn make_iterator(&self) -> Self::Iter<'_> {
        IndexingIterator::new(self)
    }
}

impl<T: Clone> Collection for BidirectionalOnly<T> {
    type Position = usize;
    type Positions<'a>
        = PositionWalk<'a, Self>
    where
        Self: 'a;

    fn start_position(&self) -> usize {
        0
    }

    fn end_position(&self) -> usize {
        self.items.len()
    }

    fn element(&self, position: &usize) -> T {
        self.items[*position].clone()
    }

    fn position_after(&self, position: &usize) -> usize {
        assert!(
            *position < self.items.len(),
            "cannot step past the end of a {}-element list",
            self.items.len()
        );
        position + 1
    }

    fn positions(&self) -> Self::Positions<'_> {
        PositionWalk::new(self)
    }

    fn offset(&self, position: &usize, by: isize) -> usize {
        offset_by_stepping(self, position, by)
    }

    fn limited_offset(&self, position: &usize, by: isize, limit: &usize) -> Option<usize> {
        limited_offset_by_stepping(self, position, by, limit)
    }
}

impl<T: Clone> BidirectionalCollection for BidirectionalOnly<T> {
    fn position_before(&self, position: &usize) -> usize {
        assert!(*position > 0, "cannot step before the start of a list");
        position - 1
    }
}

impl<T: Clone> MutableCollection for BidirectionalOnly<T> {
    fn set_element(&mut self, position: &usize, value: T) {
        self.items[*position] = value;
    }
}

/// A bare [`Sequence`] over a cloneable iterator; each pass starts from a
/// fresh clone.
#[derive(Debug, Clone)]
pub struct IterSequence<I> {
    iter: I,
}

impl<I: Iterator + Clone> IterSequence<I> {
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I: Iterator + Clone> Sequence for IterSequence<I> {
    type Element = I::Item;
    type Iter<'a>
        = I
    where
        Self: 'a;

    fn make_iterator(&self) -> I {
        self.iter.clone()
    }
}
