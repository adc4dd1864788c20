// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Navigation helpers shared by checkers and container implementations.
//!
//! The `generic_*` functions always dispatch through the [`Collection`]
//! trait. A concrete type is free to define an inherent `offset` or
//! `distance` with a different meaning; method-call syntax would pick that
//! one, these functions never do.

use std::iter::FusedIterator;

use crate::collection::{BidirectionalCollection, Collection};

/// `<C as Collection>::offset`, immune to inherent methods of the same name.
#[inline]
pub fn generic_offset<C: Collection + ?Sized>(
    collection: &C,
    position: &C::Position,
    by: isize,
) -> C::Position {
    <C as Collection>::offset(collection, position, by)
}

/// `<C as Collection>::limited_offset`.
#[inline]
pub fn generic_limited_offset<C: Collection + ?Sized>(
    collection: &C,
    position: &C::Position,
    by: isize,
    limit: &C::Position,
) -> Option<C::Position> {
    <C as Collection>::limited_offset(collection, position, by, limit)
}

/// `<C as Collection>::distance`.
#[inline]
pub fn generic_distance<C: Collection + ?Sized>(
    collection: &C,
    from: &C::Position,
    to: &C::Position,
) -> isize {
    <C as Collection>::distance(collection, from, to)
}

/// Linear offset in either direction, for bidirectional collections without
/// O(1) navigation.
pub fn offset_by_stepping<C: BidirectionalCollection + ?Sized>(
    collection: &C,
    position: &C::Position,
    by: isize,
) -> C::Position {
    let mut current = position.clone();
    if by >= 0 {
        for _ in 0..by {
            current = collection.position_after(&current);
        }
    } else {
        for _ in 0..by.unsigned_abs() {
            current = collection.position_before(&current);
        }
    }
    current
}

/// Linear limited offset in either direction.
pub fn limited_offset_by_stepping<C: BidirectionalCollection + ?Sized>(
    collection: &C,
    position: &C::Position,
    by: isize,
    limit: &C::Position,
) -> Option<C::Position> {
    let mut current = position.clone();
    for _ in 0..by.unsigned_abs() {
        if current == *limit {
            return None;
        }
        current = if by >= 0 {
            collection.position_after(&current)
        } else {
            collection.position_before(&current)
        };
    }
    Some(current)
}

/// Iterates a collection's values by walking its positions.
#[derive(Debug)]
pub struct IndexingIterator<'a, C: Collection + ?Sized> {
    collection: &'a C,
    position: C::Position,
    end: C::Position,
}

impl<'a, C: Collection + ?Sized> IndexingIterator<'a, C> {
    pub fn new(collection: &'a C) -> Self {
        Self {
            collection,
            position: collection.start_position(),
            end: collection.end_position(),
        }
    }
}

impl<C: Collection + ?Sized> Iterator for IndexingIterator<'_, C> {
    type Item = C::Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.end {
            return None;
        }
        let value = self.collection.element(&self.position);
        self.position = self.collection.position_after(&self.position);
        Some(value)
    }
}

impl<C: Collection + ?Sized> FusedIterator for IndexingIterator<'_, C> {}

/// Yields every element position of a collection, start to end.
#[derive(Debug)]
pub struct PositionWalk<'a, C: Collection + ?Sized> {
    collection: &'a C,
    position: C::Position,
    end: C::Position,
}

impl<'a, C: Collection + ?Sized> PositionWalk<'a, C> {
    pub fn new(collection: &'a C) -> Self {
        Self {
            collection,
            position: collection.start_position(),
            end: collection.end_position(),
        }
    }
}

impl<C: Collection + ?Sized> Iterator for PositionWalk<'_, C> {
    type Item = C::Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.end {
            return None;
        }
        let next = self.collection.position_after(&self.position);
        Some(std::mem::replace(&mut self.position, next))
    }
}

impl<C: Collection + ?Sized> FusedIterator for PositionWalk<'_, C> {}
