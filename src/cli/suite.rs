// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The conformance suite: every reference container through every checker
//! its capabilities qualify it for.

use std::collections::VecDeque;
use std::rc::Rc;

use clap::ValueEnum;
use serde::Serialize;

use collection_laws::containers::{BidirectionalOnly, CharView, ForwardOnly, IterSequence, Reversed};
use collection_laws::testing::{non_palindromic_source, sample_reference, sample_text};
use collection_laws::{
    capabilities_of, check_bidirectional_collection_with, check_forward_collection_with,
    check_mutable_collection_with, check_random_access_collection_with, check_sequence_with,
    CapabilitySet, CheckConfig, CheckerMisuse, ConformanceReport, Instrumented, LedgerSnapshot,
    MutableCollection, OperationLedger,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerKind {
    Vec,
    VecDeque,
    Reversed,
    Chars,
    BidirectionalOnly,
    ForwardOnly,
    IterSequence,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 7] = [
        ContainerKind::Vec,
        ContainerKind::VecDeque,
        ContainerKind::Reversed,
        ContainerKind::Chars,
        ContainerKind::BidirectionalOnly,
        ContainerKind::ForwardOnly,
        ContainerKind::IterSequence,
    ];

    /// Rust type the container is checked as.
    pub const fn type_name(self) -> &'static str {
        match self {
            ContainerKind::Vec => "Vec<i64>",
            ContainerKind::VecDeque => "VecDeque<i64>",
            ContainerKind::Reversed => "Reversed<Instrumented<Vec<i64>>>",
            ContainerKind::Chars => "CharView<'_>",
            ContainerKind::BidirectionalOnly => "BidirectionalOnly<i64>",
            ContainerKind::ForwardOnly => "ForwardOnly<i64>",
            ContainerKind::IterSequence => "IterSequence<vec::IntoIter<i64>>",
        }
    }

    pub fn capabilities(self) -> CapabilitySet {
        match self {
            ContainerKind::Vec => capabilities_of!(Vec<i64>),
            ContainerKind::VecDeque => capabilities_of!(VecDeque<i64>),
            ContainerKind::Reversed => capabilities_of!(Reversed<Instrumented<Vec<i64>>>),
            ContainerKind::Chars => capabilities_of!(CharView<'static>),
            ContainerKind::BidirectionalOnly => capabilities_of!(BidirectionalOnly<i64>),
            ContainerKind::ForwardOnly => capabilities_of!(ForwardOnly<i64>),
            ContainerKind::IterSequence => capabilities_of!(IterSequence<std::vec::IntoIter<i64>>),
        }
    }
}

/// Result of checking one container.
#[derive(Debug, Serialize)]
pub struct SuiteOutcome {
    pub container: ContainerKind,
    pub type_name: &'static str,
    pub elements: usize,
    pub capabilities: CapabilitySet,
    /// Ledger counts after the constant-time laws; random-access containers only.
    pub ledger: Option<LedgerSnapshot>,
    /// Whether the write/read-back laws ran (they need at least two elements).
    pub mutation_checked: bool,
    pub report: ConformanceReport,
}

impl SuiteOutcome {
    fn new(container: ContainerKind, elements: usize) -> Self {
        Self {
            container,
            type_name: container.type_name(),
            elements,
            capabilities: container.capabilities(),
            ledger: None,
            mutation_checked: false,
            report: ConformanceReport::new(),
        }
    }

    pub fn is_conformant(&self) -> bool {
        self.report.is_conformant()
    }
}

pub fn run_all(
    containers: &[ContainerKind],
    elements: usize,
    config: &CheckConfig,
) -> Result<Vec<SuiteOutcome>, CheckerMisuse> {
    containers
        .iter()
        .map(|&container| run(container, elements, config))
        .collect()
}

pub fn run(
    container: ContainerKind,
    elements: usize,
    config: &CheckConfig,
) -> Result<SuiteOutcome, CheckerMisuse> {
    let _span = tracing::info_span!("suite", container = container.type_name(), elements).entered();
    let mut outcome = SuiteOutcome::new(container, elements);
    let reference = sample_reference(elements);
    let report = &mut outcome.report;

    match container {
        ContainerKind::Vec => {
            let mut numbers = reference.clone();
            outcome.ledger = Some(check_random_access_collection_with(
                config, report, &numbers, &reference, None,
            ));
            outcome.mutation_checked = check_writes(config, report, &mut numbers)?;
        }
        ContainerKind::VecDeque => {
            let mut numbers: VecDeque<i64> = reference.iter().copied().collect();
            outcome.ledger = Some(check_random_access_collection_with(
                config, report, &numbers, &reference, None,
            ));
            outcome.mutation_checked = check_writes(config, report, &mut numbers)?;
        }
        ContainerKind::Reversed => {
            let ledger = OperationLedger::shared();
            let mut reversed = Reversed::new(Instrumented::new(reference.clone(), Rc::clone(&ledger)));
            let backwards: Vec<i64> = reference.iter().rev().copied().collect();
            outcome.ledger = Some(check_random_access_collection_with(
                config,
                report,
                &reversed,
                &backwards,
                Some(&ledger),
            ));
            outcome.mutation_checked = check_writes(config, report, &mut reversed)?;
        }
        ContainerKind::Chars => {
            let text = sample_text(elements);
            let chars: Vec<char> = text.chars().collect();
            check_bidirectional_collection_with(config, report, &CharView::new(&text), &chars);
        }
        ContainerKind::BidirectionalOnly => {
            let mut numbers = BidirectionalOnly::new(reference.clone());
            check_bidirectional_collection_with(config, report, &numbers, &reference);
            outcome.mutation_checked = check_writes(config, report, &mut numbers)?;
        }
        ContainerKind::ForwardOnly => {
            let mut numbers = ForwardOnly::new(reference.clone());
            check_forward_collection_with(config, report, &numbers, &reference);
            outcome.mutation_checked = check_writes(config, report, &mut numbers)?;
        }
        ContainerKind::IterSequence => {
            let sequence = IterSequence::new(reference.clone().into_iter());
            check_sequence_with(config, report, &sequence, &reference);
        }
    }

    tracing::info!(
        assertions = outcome.report.assertions(),
        violations = outcome.report.violations().len(),
        "container checked"
    );
    Ok(outcome)
}

/// Run the mutation laws when a non-palindromic source of the right length
/// exists. Returns whether they ran.
fn check_writes<C>(
    config: &CheckConfig,
    report: &mut ConformanceReport,
    collection: &mut C,
) -> Result<bool, CheckerMisuse>
where
    C: MutableCollection<Element = i64>,
{
    let len = collection.count();
    match non_palindromic_source(len) {
        Some(source) => {
            check_mutable_collection_with(config, report, collection, &source)?;
            Ok(true)
        }
        None => {
            tracing::debug!(len, "too few elements for a non-palindromic source, skipping writes");
            Ok(false)
        }
    }
}
