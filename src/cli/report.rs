// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rendering suite outcomes and the probe table.

use serde::Serialize;

use collection_laws::{Capability, CapabilitySet};

use super::display::*;
use super::suite::{ContainerKind, SuiteOutcome};

/// One row of `collection-laws probe`.
#[derive(Debug, Serialize)]
pub struct ProbeRow {
    pub container: ContainerKind,
    pub type_name: &'static str,
    pub capabilities: CapabilitySet,
}

pub fn probe_rows() -> Vec<ProbeRow> {
    ContainerKind::ALL
        .iter()
        .map(|&container| ProbeRow {
            container,
            type_name: container.type_name(),
            capabilities: container.capabilities(),
        })
        .collect()
}

pub fn print_probe(rows: &[ProbeRow]) {
    const NAME_WIDTH: usize = 34;
    const CELL_WIDTH: usize = 9;

    double_header();
    title("CAPABILITY PROBE");
    double_footer();

    section_top("Capabilities");
    let mut header = format!(" {}", pad_right("", NAME_WIDTH));
    for capability in Capability::ALL {
        header.push_str(&pad_right(&short_name(capability), CELL_WIDTH));
    }
    row(&themed(GRAY, &[BOLD], &header));

    for probe in rows {
        let mut line = format!(" {}", pad_right(probe.type_name, NAME_WIDTH));
        for capability in Capability::ALL {
            let cell = capability_cell(capability, probe.capabilities.contains(capability));
            line.push_str(&pad_right(&cell, CELL_WIDTH));
        }
        row(&line);
    }
    section_bot();
}

fn short_name(capability: Capability) -> String {
    match capability {
        Capability::Sequence => "seq".to_string(),
        Capability::Collection => "coll".to_string(),
        Capability::Bidirectional => "bidi".to_string(),
        Capability::RandomAccess => "random".to_string(),
        Capability::Mutable => "mut".to_string(),
    }
}

pub fn print_outcomes(outcomes: &[SuiteOutcome]) {
    let failing = outcomes.iter().filter(|o| !o.is_conformant()).count();

    double_header();
    title("COLLECTION LAWS");
    double_footer();

    for outcome in outcomes {
        section_top(outcome.type_name);
        let strongest = outcome
            .capabilities
            .strongest_read_capability()
            .map_or("none", Capability::as_str);
        row(&format!(
            " {}  {} elements, checked as {}{}",
            verdict(outcome.is_conformant()),
            outcome.elements,
            themed(CYAN, &[], strongest),
            if outcome.mutation_checked {
                " + mutable"
            } else {
                ""
            }
        ));

        let passed: usize = outcome.report.passed_counts().values().sum();
        row(&format!(
            "   assertions {}  passed {}  violated {}",
            outcome.report.assertions(),
            themed(GREEN, &[], &passed.to_string()),
            themed(
                if outcome.is_conformant() { GRAY } else { RED },
                &[],
                &outcome.report.violations().len().to_string()
            ),
        ));
        if let Some(ledger) = outcome.ledger {
            row(&format!(
                "   ledger after constant-time laws  {}",
                ledger_counts(ledger.increments, ledger.decrements)
            ));
        }

        for violation in outcome.report.violations() {
            row(&format!("   {}", law_label(violation.law)));
            let detail = format!(
                "{}: expected {}, got {}",
                violation.message, violation.expected, violation.actual
            );
            row(&format!("     {}", truncate(&detail, BOX_WIDTH - 6)));
        }
        section_bot();
    }

    let summary = if failing == 0 {
        themed(BRIGHT_GREEN, &[BOLD], &format!("all {} containers conform", outcomes.len()))
    } else {
        themed(
            RED,
            &[BOLD],
            &format!("{failing} of {} containers broke a law", outcomes.len()),
        )
    };
    println!("{summary}");
}
