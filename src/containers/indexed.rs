// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `Vec<T>` and `VecDeque<T>`: random-access, mutable, indexed by `usize`.

use std::collections::{vec_deque, VecDeque};
use std::iter::Cloned;
use std::ops::Range;
use std::slice;

use crate::collection::{
    BidirectionalCollection, Collection, MutableCollection, RandomAccessCollection, Sequence,
};

/// `position + by` in O(1).
///
/// # Panics
/// If the result would be negative or overflow `usize`.
#[inline]
pub fn offset_index(position: usize, by: isize) -> usize {
    match position.checked_add_signed(by) {
        Some(target) => target,
        None => panic!("offset {by} from index {position} is out of range"),
    }
}

/// `position + by` in O(1), or `None` if the move would pass `limit`.
///
/// The limit only applies when it lies in the direction of travel (or at
/// `position` itself). Landing exactly on `limit` is allowed.
#[inline]
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

#[inline]
pub fn index_distance(from: usize, to: usize) -> isize {
    to as isize - from as isize
}

impl<T: Clone> Sequence for Vec<T> {
    type Element = T;
    type Iter<'a>
        = Cloned<slice::Iter<'a, T>>
    where
        Self: 'a;

    fn make_iterator(&self) -> Self::Iter<'_> {
        self.iter().cloned()
    }
}

impl<T: Clone> Collection for Vec<T> {
    type Position = usize;
    type Positions<'a>
        = Range<usize>
    where
        Self: 'a;

    fn start_position(&self) -> usize {
        0
    }

    fn end_position(&self) -> usize {
        self.len()
    }

    fn element(&self, position: &usize) -> T {
        self[*position].clone()
    }

    fn position_after(&self, position: &usize) -> usize {
        position + 1
    }

    fn positions(&self) -> Range<usize> {
        0..self.len()
    }

    fn offset(&self, position: &usize, by: isize) -> usize {
        offset_index(*position, by)
    }

    fn limited_offset(&self, position: &usize, by: isize, limit: &usize) -> Option<usize> {
        limited_offset_index(*position, by, *limit)
    }

    fn distance(&self, from: &usize, to: &usize) -> isize {
        index_distance(*from, *to)
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T: Clone> BidirectionalCollection for Vec<T> {
    fn position_before(&self, position: &usize) -> usize {
        position - 1
    }
}

impl<T: Clone> RandomAccessCollection for Vec<T> {}

impl<T: Clone> MutableCollection for Vec<T> {
    fn set_element(&mut self, position: &usize, value: T) {
        self[*position] = value;
    }
}

impl<T: Clone> Sequence for VecDeque<T> {
    type Element = T;
    type Iter<'a>
        = Cloned<vec_deque::Iter<'a, T>>
    where
        Self: 'a;

    fn make_iterator(&self) -> Self::Iter<'_> {
        self.iter().cloned()
    }
}

impl<T: Clone> Collection for VecDeque<T> {
    type Position = usize;
    type Positions<'a>
        = Range<usize>
    where
        Self: 'a;

    fn start_position(&self) -> usize {
        0
    }

    fn end_position(&self) -> usize {
        self.len()
    }

    fn element(&self, position: &usize) -> T {
        self[*position].clone()
    }

    fn position_after(&self, position: &usize) -> usize {
        position + 1
    }

    fn positions(&self) -> Range<usize> {
        0..self.len()
    }

    fn offset(&self, position: &usize, by: isize) -> usize {
        offset_index(*position, by)
    }

    fn limited_offset(&self, position: &usize, by: isize, limit: &usize) -> Option<usize> {
        limited_offset_index(*position, by, *limit)
    }

    fn distance(&self, from: &usize, to: &usize) -> isize {
        index_distance(*from, *to)
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<T: Clone> BidirectionalCollection for VecDeque<T> {
    fn position_before(&self, position: &usize) -> usize {
        position - 1
    }
}

impl<T: Clone> RandomAccessCollection for VecDeque<T> {}

impl<T: Clone> MutableCollection for VecDeque<T> {
    fn set_element(&mut self, position: &usize, value: T) {
        self[*position] = value;
    }
}
