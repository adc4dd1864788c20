// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reference containers, one for each rung of the hierarchy.
//!
//! | Container              | Strongest capability | Mutable | Position            |
//! |------------------------|----------------------|---------|---------------------|
//! | `Vec<T>`, `VecDeque<T>`| random access        | yes     | `usize` index       |
//! | `Reversed<C>`          | same as `C`          | if `C`  | `ReversedPosition`  |
//! | `CharView<'_>`         | bidirectional        | no      | UTF-8 byte offset   |
//! | `BidirectionalOnly<T>` | bidirectional        | yes     | `usize` index       |
//! | `ForwardOnly<T>`       | collection           | yes     | `usize` index       |
//! | `IterSequence<I>`      | sequence             | no      | none                |
//!
//! They exist to exercise the checkers (and to be exercised by them): the
//! restricted wrappers deliberately skip the O(1) overrides so the default
//! stepping paths get checked too.

mod chars;
mod indexed;
mod restricted;
mod reversed;

pub use chars::CharView;
pub use indexed::{index_distance, limited_offset_index, offset_index};
pub use restricted::{BidirectionalOnly, ForwardOnly, IterSequence};
pub use reversed::{Reversed, ReversedPosition};
