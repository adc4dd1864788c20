// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where law violations go.
//!
//! Checkers never panic on a misbehaving container. They hand each
//! [`Violation`] to a [`ViolationSink`] and keep checking, so a single run
//! reports every broken law rather than the first one. What happens next is
//! the sink's policy:
//!
//! - [`ConformanceReport`] records and continues (the default for suites).
//! - [`FailFast`] panics on the first violation (handy in a plain `#[test]`).
//! - `Vec<Violation>` just collects.

use std::collections::BTreeMap;
use std::fmt;
use std::panic::Location;

use serde::Serialize;

use crate::probe::Capability;

/// Every law the checkers assert, grouped by the capability that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Law {
    // Sequence
    SizeHint,
    SequenceOrder,
    SequenceLength,
    ExhaustedForever,
    // Collection
    Count,
    WalkLength,
    PositionEnumeration,
    PositionOrder,
    ElementAccess,
    OffsetToEnd,
    LimitedOffsetWithinLimit,
    LimitedOffsetAtLimit,
    LimitedOffsetPastLimit,
    DistanceToEnd,
    RepeatedTraversal,
    // Bidirectional
    BackwardInverse,
    BackwardDistance,
    NegativeOffset,
    // Random access
    RandomAccessDistance,
    RandomAccessOffset,
    RandomAccessLimitedOffset,
    StepFree,
    // Mutable
    WriteReadBack,
    PositionStability,
}

impl Law {
    pub const fn as_str(self) -> &'static str {
        match self {
            Law::SizeHint => "size-hint",
            Law::SequenceOrder => "sequence-order",
            Law::SequenceLength => "sequence-length",
            Law::ExhaustedForever => "exhausted-forever",
            Law::Count => "count",
            Law::WalkLength => "walk-length",
            Law::PositionEnumeration => "position-enumeration",
            Law::PositionOrder => "position-order",
            Law::ElementAccess => "element-access",
            Law::OffsetToEnd => "offset-to-end",
            Law::LimitedOffsetWithinLimit => "limited-offset-within-limit",
            Law::LimitedOffsetAtLimit => "limited-offset-at-limit",
            Law::LimitedOffsetPastLimit => "limited-offset-past-limit",
            Law::DistanceToEnd => "distance-to-end",
            Law::RepeatedTraversal => "repeated-traversal",
            Law::BackwardInverse => "backward-inverse",
            Law::BackwardDistance => "backward-distance",
            Law::NegativeOffset => "negative-offset",
            Law::RandomAccessDistance => "random-access-distance",
            Law::RandomAccessOffset => "random-access-offset",
            Law::RandomAccessLimitedOffset => "random-access-limited-offset",
            Law::StepFree => "step-free",
            Law::WriteReadBack => "write-read-back",
            Law::PositionStability => "position-stability",
        }
    }

    /// The capability whose checker asserts this law.
    pub const fn capability(self) -> Capability {
        match self {
            Law::SizeHint | Law::SequenceOrder | Law::SequenceLength | Law::ExhaustedForever => {
                Capability::Sequence
            }
            Law::Count
            | Law::WalkLength
            | Law::PositionEnumeration
            | Law::PositionOrder
            | Law::ElementAccess
            | Law::OffsetToEnd
            | Law::LimitedOffsetWithinLimit
            | Law::LimitedOffsetAtLimit
            | Law::LimitedOffsetPastLimit
            | Law::DistanceToEnd
            | Law::RepeatedTraversal => Capability::Collection,
            Law::BackwardInverse | Law::BackwardDistance | Law::NegativeOffset => {
                Capability::Bidirectional
            }
            Law::RandomAccessDistance
            | Law::RandomAccessOffset
            | Law::RandomAccessLimitedOffset
            | Law::StepFree => Capability::RandomAccess,
            Law::WriteReadBack | Law::PositionStability => Capability::Mutable,
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Call site of the public check that found the violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// One broken law: what was expected, what the container produced, and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub law: Law,
    pub message: String,
    pub expected: String,
    pub actual: String,
    pub location: SourceLocation,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: expected {}, got {} (checked at {})",
            self.law, self.message, self.expected, self.actual, self.location
        )
    }
}

/// Receives the outcome of every assertion a checker makes.
pub trait ViolationSink {
    fn record(&mut self, violation: Violation);

    /// Called for every assertion that held. Ignored by default.
    fn passed(&mut self, law: Law) {
        let _ = law;
    }
}

impl ViolationSink for Vec<Violation> {
    fn record(&mut self, violation: Violation) {
        self.push(violation);
    }
}

impl<S: ViolationSink + ?Sized> ViolationSink for &mut S {
    fn record(&mut self, violation: Violation) {
        (**self).record(violation);
    }

    fn passed(&mut self, law: Law) {
        (**self).passed(law);
    }
}

/// Record-and-continue sink with per-law assertion counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConformanceReport {
    passed: BTreeMap<Law, usize>,
    violations: Vec<Violation>,
}

impl ConformanceReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_conformant(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn violations_of(&self, law: Law) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.law == law)
    }

    /// Laws that were violated at least once, in declaration order.
    pub fn broken_laws(&self) -> Vec<Law> {
        let mut laws: Vec<Law> = self.violations.iter().map(|v| v.law).collect();
        laws.sort_unstable();
        laws.dedup();
        laws
    }

    /// Assertions that held, by law.
    pub fn passed_counts(&self) -> &BTreeMap<Law, usize> {
        &self.passed
    }

    /// Total assertions made, passing or not.
    pub fn assertions(&self) -> usize {
        self.passed.values().sum::<usize>() + self.violations.len()
    }

    pub fn merge(&mut self, other: ConformanceReport) {
        for (law, count) in other.passed {
            *self.passed.entry(law).or_default() += count;
        }
        self.violations.extend(other.violations);
    }

    /// Panic with every recorded violation if there are any.
    #[track_caller]
    pub fn assert_conformant(&self) {
        if self.is_conformant() {
            return;
        }
        let lines: Vec<String> = self.violations.iter().map(|v| format!("  {v}")).collect();
        panic!(
            "{} law violation(s) in {} assertions:\n{}",
            self.violations.len(),
            self.assertions(),
            lines.join("\n")
        );
    }
}

impl ViolationSink for ConformanceReport {
    fn record(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    fn passed(&mut self, law: Law) {
        *self.passed.entry(law).or_default() += 1;
    }
}

/// Panics on the first violation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailFast;

impl ViolationSink for FailFast {
    fn record(&mut self, violation: Violation) {
        panic!("law violation: {violation}");
    }
}
