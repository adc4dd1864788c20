// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use tracing_subscriber::EnvFilter;

use collection_laws::CheckConfig;

mod cli;
use cli::report::{print_outcomes, print_probe, probe_rows};
use cli::suite::{run_all, ContainerKind};
use cli::{Cli, Commands, OutputFormat};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            container,
            elements,
            redraws,
            no_size_hint,
            format,
        } => {
            let config = CheckConfig::default()
                .with_exhausted_redraws(redraws)
                .with_size_hint_check(!no_size_hint);
            let containers = match container {
                Some(kind) => vec![kind],
                None => ContainerKind::ALL.to_vec(),
            };

            let outcomes = match run_all(&containers, elements, &config) {
                Ok(outcomes) => outcomes,
                Err(e) => {
                    eprintln!("❌ {}", e);
                    std::process::exit(2);
                }
            };

            match format {
                OutputFormat::Text => print_outcomes(&outcomes),
                OutputFormat::Json => print_json(&outcomes),
            }

            if outcomes.iter().any(|o| !o.is_conformant()) {
                std::process::exit(1);
            }
        }
        Commands::Probe { format } => {
            let rows = probe_rows();
            match format {
                OutputFormat::Text => print_probe(&rows),
                OutputFormat::Json => print_json(&rows),
            }
        }
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("❌ failed to serialize output: {}", e);
            std::process::exit(2);
        }
    }
}
