// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The checkers, one per capability.
//!
//! Each stronger checker runs the weaker ones first and then adds its own
//! laws:
//!
//! ```text
//! check_sequence
//!   └─ check_forward_collection
//!        └─ check_bidirectional_collection
//!             └─ check_random_access_collection   (+ Instrumented / ledger)
//! check_mutable_collection                        (independent)
//! ```
//!
//! Every public entry point is `#[track_caller]`, so violations carry the
//! location of the test that asked for the check. Each also has a `_with`
//! twin taking a [`CheckConfig`].
//!
//! # Example
//!
//! ```
//! use collection_laws::{check_random_access_collection, ConformanceReport};
//!
//! let mut report = ConformanceReport::new();
//! let ledger = check_random_access_collection(&mut report, &vec![10, 20, 30], &[10, 20, 30], None);
//!
//! report.assert_conformant();
//! assert!(ledger.is_zero());
//! ```

mod bidirectional;
mod forward;
mod mutable;
mod random_access;
mod sequence;

pub use bidirectional::{check_bidirectional_collection, check_bidirectional_collection_with};
pub use forward::{check_forward_collection, check_forward_collection_with};
pub use mutable::{check_mutable_collection, check_mutable_collection_with};
pub use random_access::{check_random_access_collection, check_random_access_collection_with};
pub use sequence::{check_sequence, check_sequence_with};

use std::fmt::{self, Debug};

use crate::config::CheckConfig;
use crate::sink::{Law, SourceLocation, Violation, ViolationSink};

/// State threaded through one public check call and the weaker checks it runs.
pub(crate) struct LawContext<'a, S: ViolationSink + ?Sized> {
    sink: &'a mut S,
    config: &'a CheckConfig,
    location: SourceLocation,
}

impl<'a, S: ViolationSink + ?Sized> LawContext<'a, S> {
    pub(crate) fn new(sink: &'a mut S, config: &'a CheckConfig, location: SourceLocation) -> Self {
        Self {
            sink,
            config,
            location,
        }
    }

    pub(crate) fn config(&self) -> &CheckConfig {
        self.config
    }

    pub(crate) fn pass(&mut self, law: Law) {
        self.sink.passed(law);
    }

    pub(crate) fn fail(
        &mut self,
        law: Law,
        message: fmt::Arguments<'_>,
        expected: String,
        actual: String,
    ) {
        let message = message.to_string();
        tracing::warn!(%law, %expected, %actual, location = %self.location, "{message}");
        self.sink.record(Violation {
            law,
            message,
            expected,
            actual,
            location: self.location,
        });
    }

    /// Pass if `holds`, otherwise record a violation with the given
    /// descriptions of what was expected and what happened.
    pub(crate) fn expect(
        &mut self,
        law: Law,
        holds: bool,
        message: fmt::Arguments<'_>,
        expected: impl FnOnce() -> String,
        actual: impl FnOnce() -> String,
    ) -> bool {
        if holds {
            self.pass(law);
        } else {
            self.fail(law, message, expected(), actual());
        }
        holds
    }

    pub(crate) fn expect_eq<T: PartialEq + Debug + ?Sized>(
        &mut self,
        law: Law,
        expected: &T,
        actual: &T,
        message: fmt::Arguments<'_>,
    ) -> bool {
        self.expect(
            law,
            expected == actual,
            message,
            || format!("{expected:?}"),
            || format!("{actual:?}"),
        )
    }
}
