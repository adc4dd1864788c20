//! Custom cargo commands for the collection-laws crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (no kani, no fuzzing)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask kani      - Run the kani proofs
//!   cargo xtask fuzz      - Run every fuzz target briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["navigation_arithmetic", "char_view_laws", "mutation_laws"];

/// Functions duplicated into the standalone kani crate.
const MIRRORED_FUNCTIONS: &[&str] = &["offset_index", "limited_offset_index", "index_distance"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("kani") => kani()?,
        Some("fuzz") => {
            let seconds = env::args()
                .nth(2)
                .map(|s| s.parse::<u64>())
                .transpose()
                .context("fuzz duration must be a number of seconds")?
                .unwrap_or(30);
            fuzz(seconds)?;
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify           Run full verification suite (tests + clippy + mirror check + kani)
  test             Run all Rust tests
  check            Quick check (cargo check + test + clippy)
  bench            Run benchmarks
  kani             Run the kani proofs in kani-proofs/
  fuzz [SECONDS]   Run each fuzz target for SECONDS (default 30)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("collection-laws Verification Suite");
    println!("==========================================\n");

    println!("[1/5] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/5] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/5] Checking kani mirror of the index arithmetic...");
    verify_mirrored_functions()?;
    println!("✓ Mirror matches\n");

    println!("[5/5] Running kani proofs...");
    kani()?;
    println!("✓ Kani proofs hold\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check (no kani, no fuzzing)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run the standalone kani crate
fn kani() -> Result<()> {
    let dir = project_root()?.join("kani-proofs");
    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&dir)
        .status()
        .context("Failed to run cargo kani (is kani installed?)")?;

    if !status.success() {
        bail!("kani proofs failed");
    }
    Ok(())
}

/// Run every fuzz target for a fixed time
fn fuzz(seconds: u64) -> Result<()> {
    let dir = project_root()?.join("fuzz");
    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {target} for {seconds}s...", i + 1, FUZZ_TARGETS.len());
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--"])
            .arg(format!("-max_total_time={seconds}"))
            .current_dir(&dir)
            .status()
            .with_context(|| format!("Failed to run cargo fuzz for {target}"))?;

        if !status.success() {
            bail!("fuzz target {target} found a failure");
        }
    }
    println!("\n✓ No fuzz failures");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 3 {
        bail!(
            "Expected at least 3 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

/// The kani crate proves copies of the index arithmetic; the copies must not
/// drift from the originals.
fn verify_mirrored_functions() -> Result<()> {
    let root = project_root()?;
    let original = read(&root.join("src/containers/indexed.rs"))?;
    let mirror = read(&root.join("kani-proofs/src/lib.rs"))?;

    for name in MIRRORED_FUNCTIONS {
        let ours = function_body(&original, name)
            .with_context(|| format!("{name} not found in src/containers/indexed.rs"))?;
        let theirs = function_body(&mirror, name)
            .with_context(|| format!("{name} not found in kani-proofs/src/lib.rs"))?;
        if ours != theirs {
            bail!("{name} differs between src/containers/indexed.rs and kani-proofs/src/lib.rs");
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Lines from `pub fn name(` through the closing brace at column 0, with
/// whitespace-only differences ignored.
fn function_body(source: &str, name: &str) -> Option<String> {
    let signature = format!("pub fn {name}(");
    let mut lines = source.lines().skip_while(|line| !line.starts_with(&signature));
    let first = lines.next()?;
    let mut body = vec![first.trim().to_string()];
    for line in lines {
        body.push(line.trim().to_string());
        if line == "}" {
            return Some(body.join("\n"));
        }
    }
    None
}
