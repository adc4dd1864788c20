// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the collection-laws command-line interface.
//!
//! Two subcommands: `check` runs every applicable checker over the bundled
//! reference containers, `probe` prints which capabilities each of them
//! implements.

pub mod display;
pub mod report;
pub mod suite;

use clap::{Parser, Subcommand, ValueEnum};

use suite::ContainerKind;

#[derive(Parser)]
#[command(
    name = "collection-laws",
    about = "Checks sequence and collection implementations against their laws",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the conformance suite over the reference containers
    Check {
        /// Container to check; every container when omitted
        #[arg(short, long, value_enum)]
        container: Option<ContainerKind>,

        /// Number of elements in each reference sequence
        #[arg(short, long, default_value = "16")]
        elements: usize,

        /// Extra draws an exhausted iterator must answer with None
        #[arg(long, default_value = "3")]
        redraws: usize,

        /// Skip the size_hint bracketing law
        #[arg(long)]
        no_size_hint: bool,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the capability table for the reference containers
    Probe {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
