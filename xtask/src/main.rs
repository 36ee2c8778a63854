//! Custom cargo commands for unisearch.
//!
//! Usage:
//!   cargo xtask test             - Run all tests
//!   cargo xtask check            - check + test + clippy, native and wasm features
//!   cargo xtask bench            - Run the match benchmarks
//!   cargo xtask fuzz [SECS]      - Run every fuzz target for SECS seconds each

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["query_matching", "key_sequences"];
const DEFAULT_FUZZ_SECS: u64 = 60;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let secs = match args.next() {
                Some(s) => s
                    .parse()
                    .with_context(|| format!("Invalid fuzz duration '{}'", s))?,
                None => DEFAULT_FUZZ_SECS,
            };
            fuzz(secs)?
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
  test          Run all Rust tests
  check         cargo check (cli and wasm features) + test + clippy
  bench         Run benchmarks
  fuzz [SECS]   Run each fuzz target for SECS seconds (default {})
"#,
        DEFAULT_FUZZ_SECS
    );
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("Running checks...\n");

    println!("[1/4] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/4] cargo check --features wasm...");
    run_cargo(&["check", "--lib", "--no-default-features", "--features", "wasm"])?;

    println!("[3/4] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[4/4] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("\n✓ Checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench", "--bench", "match_bench"])
}

fn fuzz(secs: u64) -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    let max_time = format!("-max_total_time={}", secs);
    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {} for {}s...", i + 1, FUZZ_TARGETS.len(), target, secs);
        run_in(
            &fuzz_dir,
            &["+nightly", "fuzz", "run", target, "--", &max_time],
        )?;
    }
    println!("\n✓ No crashes");
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
    run_in(&project_root()?, args)
}

fn run_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
