// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A `str` viewed as a bidirectional collection of `char`s.

use std::str::Chars;

use crate::collection::{BidirectionalCollection, Collection, Sequence};
use crate::navigation::{limited_offset_by_stepping, offset_by_stepping, PositionWalk};

/// Characters of a borrowed string, positioned by UTF-8 byte offset.
///
/// Steps are one to four bytes wide, so positions are not `0..count` and
/// the view is bidirectional but not random-access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharView<'t> {
    text: &'t str,
}

impl<'t> CharView<'t> {
    pub fn new(text: &'t str) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &'t str {
        self.text
    }

    fn char_at(&self, position: usize) -> char {
        match self.text[position..].chars().next() {
            Some(c) => c,
            None => panic!(
                "no character at byte {position} of a {}-byte string",
                self.text.len()
            ),
        }
    }
}

impl<'t> Sequence for CharView<'t> {
    type Element = char;
    type Iter<'a>
        = Chars<'t>
    where
        Self: 'a;

    fn make_iterator(&self) -> Chars<'t> {
        self.text.chars()
    }
}

impl<'t> Collection for CharView<'t> {
    type Position = usize;
    type Positions<'a>
        = PositionWalk<'a, Self>
    where
        Self: 'a;

    fn start_position(&self) -> usize {
        0
    }

    fn end_position(&self) -> usize {
        self.text.len()
    }

    fn element(&self, position: &usize) -> char {
        self.char_at(*position)
    }

    fn position_after(&self, position: &usize) -> usize {
        // INVARIANT: CHAR_BOUNDARY, every position is a char boundary or the end
        position + self.char_at(*position).len_utf8()
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

    fn distance(&self, from: &usize, to: &usize) -> isize {
        if from <= to {
            self.text[*from..*to].chars().count() as isize
        } else {
            -(self.text[*to..*from].chars().count() as isize)
        }
    }

    fn count(&self) -> usize {
        self.text.chars().count()
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl<'t> BidirectionalCollection for CharView<'t> {
    fn position_before(&self, position: &usize) -> usize {
        match self.text[..*position].chars().next_back() {
            Some(c) => position - c.len_utf8(),
            None => panic!("no character before the start of the string"),
        }
    }
}
