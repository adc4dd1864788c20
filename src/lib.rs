// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Conformance checks for sequence and collection implementations.
//!
//! A type that implements [`Collection`] or [`RandomAccessCollection`] makes
//! promises the compiler cannot check: that walking from the start reaches the
//! end, that `distance` agrees with stepping, that random-access navigation
//! never secretly steps one position at a time. This crate checks those
//! promises against a reference list of the elements the container should
//! hold.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────┐   ┌────────────────┐   ┌──────────────────┐
//! │ collection.rs │──▶│  navigation.rs │──▶│     check/*      │
//! │ (hierarchy)   │   │ (generic_*,    │   │ (one checker per │
//! └───────────────┘   │  stepping)     │   │  capability)     │
//!         │           └────────────────┘   └──────────────────┘
//!         ▼                                   │          │
//! ┌───────────────┐   ┌────────────────┐      ▼          ▼
//! │  ledger.rs    │──▶│ Instrumented<C>│   sink.rs    config.rs
//! │ (step counts) │   └────────────────┘  (reports)   (tunables)
//! └───────────────┘
//! ```
//!
//! | Module        | Role                                                   |
//! |---------------|--------------------------------------------------------|
//! | `collection`  | `Sequence` → `Collection` → bidirectional → random access |
//! | `navigation`  | trait-dispatched offsets, stepping helpers, iterators  |
//! | `ledger`      | `OperationLedger` and the `Instrumented` wrapper       |
//! | `check`       | the law checkers                                       |
//! | `sink`        | `Law`, `Violation`, `ConformanceReport`, `FailFast`    |
//! | `probe`       | compile-time capability detection                      |
//! | `containers`  | reference containers for every rung                    |
//!
//! # Usage
//!
//! ```
//! use collection_laws::containers::CharView;
//! use collection_laws::{check_bidirectional_collection, ConformanceReport, Law};
//!
//! let mut report = ConformanceReport::new();
//! check_bidirectional_collection(&mut report, &CharView::new("añb"), &['a', 'ñ', 'b']);
//!
//! assert!(report.is_conformant());
//! assert!(report.passed_counts()[&Law::BackwardInverse] > 0);
//! ```

pub mod check;
pub mod collection;
pub mod config;
pub mod containers;
pub mod error;
pub mod ledger;
pub mod navigation;
pub mod probe;
pub mod sink;
pub mod testing;

pub use check::{
    check_bidirectional_collection, check_bidirectional_collection_with,
    check_forward_collection, check_forward_collection_with, check_mutable_collection,
    check_mutable_collection_with, check_random_access_collection,
    check_random_access_collection_with, check_sequence, check_sequence_with,
};
pub use collection::{
    BidirectionalCollection, Collection, MutableCollection, RandomAccessCollection, Sequence,
};
pub use config::CheckConfig;
pub use error::CheckerMisuse;
pub use ledger::{Instrumented, LedgerHandle, LedgerSnapshot, OperationLedger};
pub use navigation::{generic_distance, generic_limited_offset, generic_offset};
pub use probe::{Capability, CapabilitySet};
pub use sink::{ConformanceReport, FailFast, Law, SourceLocation, Violation, ViolationSink};
