// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Step counting for complexity laws.
//!
//! A type system can say that `distance` exists, not that it is O(1). To
//! prove the latter, wrap the base container in [`Instrumented`]: every call
//! to `position_after` or `position_before` lands in a shared
//! [`OperationLedger`]. Bulk navigation that quietly decomposes into single
//! steps shows up as a nonzero count.
//!
//! ```
//! use collection_laws::{Collection, Instrumented, OperationLedger};
//!
//! let ledger = OperationLedger::shared();
//! let numbers = Instrumented::new(vec![1, 2, 3], ledger.clone());
//! let copy = numbers.clone();
//!
//! copy.position_after(&0);
//! assert_eq!(ledger.increments(), 1);
//! assert_eq!(copy.distance(&0, &3), 3);
//! assert_eq!(ledger.increments(), 1);
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use crate::collection::{
    BidirectionalCollection, Collection, MutableCollection, RandomAccessCollection, Sequence,
};

/// Shared handle to a ledger. Clones point at the same counters.
pub type LedgerHandle = Rc<OperationLedger>;

/// Counts single-step navigation calls.
///
/// Counters use `Cell`, so a ledger is updated through `&self` from every
/// wrapper holding the handle. Not `Sync`; checks are single-threaded.
#[derive(Debug, Default)]
pub struct OperationLedger {
    increments: Cell<u64>,
    decrements: Cell<u64>,
}

impl OperationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh ledger behind a shareable handle.
    pub fn shared() -> LedgerHandle {
        Rc::new(Self::new())
    }

    pub fn record_increment(&self) {
        self.increments.set(self.increments.get() + 1);
    }

    pub fn record_decrement(&self) {
        self.decrements.set(self.decrements.get() + 1);
    }

    pub fn increments(&self) -> u64 {
        self.increments.get()
    }

    pub fn decrements(&self) -> u64 {
        self.decrements.get()
    }

    pub fn reset(&self) {
        tracing::trace!(
            increments = self.increments.get(),
            decrements = self.decrements.get(),
            "ledger reset"
        );
        self.increments.set(0);
        self.decrements.set(0);
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            increments: self.increments(),
            decrements: self.decrements(),
        }
    }

    pub fn is_untouched(&self) -> bool {
        self.snapshot().is_zero()
    }
}

/// Point-in-time copy of a ledger's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct LedgerSnapshot {
    pub increments: u64,
    pub decrements: u64,
}

impl LedgerSnapshot {
    pub fn is_zero(&self) -> bool {
        self.increments == 0 && self.decrements == 0
    }
}

impl fmt::Display for LedgerSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{increments: {}, decrements: {}}}",
            self.increments, self.decrements
        )
    }
}

/// Delegating wrapper that records single steps in a shared ledger.
///
/// Everything except `position_after` and `position_before` passes straight
/// through to the base, including the bulk operations (`offset`,
/// `limited_offset`, `distance`, `count`). If the base implements those by
/// stepping, it steps on itself and the ledger stays at zero; the ledger
/// catches an *adapter* built on top of an instrumented base that steps
/// through the base instead of asking it for bulk navigation.
#[derive(Debug)]
pub struct Instrumented<C> {
    base: C,
    ledger: LedgerHandle,
}

impl<C> Instrumented<C> {
    pub fn new(base: C, ledger: LedgerHandle) -> Self {
        Self { base, ledger }
    }

    pub fn ledger(&self) -> &LedgerHandle {
        &self.ledger
    }

    pub fn base(&self) -> &C {
        &self.base
    }

    pub fn into_base(self) -> C {
        self.base
    }
}

// INVARIANT: a clone shares the ledger (Rc::clone), it never forks the counts.
impl<C: Clone> Clone for Instrumented<C> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            ledger: Rc::clone(&self.ledger),
        }
    }
}

impl<C: Sequence> Sequence for Instrumented<C> {
    type Element = C::Element;
    type Iter<'a>
        = C::Iter<'a>
    where
        Self: 'a;

    fn make_iterator(&self) -> Self::Iter<'_> {
        self.base.make_iterator()
    }
}

impl<C: Collection> Collection for Instrumented<C> {
    type Position = C::Position;
    type Positions<'a>
        = C::Positions<'a>
    where
        Self: 'a;

    fn start_position(&self) -> Self::Position {
        self.base.start_position()
    }

    fn end_position(&self) -> Self::Position {
        self.base.end_position()
    }

    fn element(&self, position: &Self::Position) -> Self::Element {
        self.base.element(position)
    }

    fn position_after(&self, position: &Self::Position) -> Self::Position {
        self.ledger.record_increment();
        self.base.position_after(position)
    }

    fn positions(&self) -> Self::Positions<'_> {
        self.base.positions()
    }

    fn offset(&self, position: &Self::Position, by: isize) -> Self::Position {
        self.base.offset(position, by)
    }

    fn limited_offset(
        &self,
        position: &Self::Position,
        by: isize,
        limit: &Self::Position,
    ) -> Option<Self::Position> {
        self.base.limited_offset(position, by, limit)
    }

    fn distance(&self, from: &Self::Position, to: &Self::Position) -> isize {
        self.base.distance(from, to)
    }

    fn count(&self) -> usize {
        self.base.count()
    }

    fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

impl<C: BidirectionalCollection> BidirectionalCollection for Instrumented<C> {
    fn position_before(&self, position: &Self::Position) -> Self::Position {
        self.ledger.record_decrement();
        self.base.position_before(position)
    }
}

impl<C: RandomAccessCollection> RandomAccessCollection for Instrumented<C> {}

impl<C: MutableCollection> MutableCollection for Instrumented<C> {
    fn set_element(&mut self, position: &Self::Position, value: Self::Element) {
        self.base.set_element(position, value);
    }
}
