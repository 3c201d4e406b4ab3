//! CLI entry point for the scripted regression harness: reads
//! `check("...")` lines from files named on the command line, or from
//! stdin when none are given, and reports a pass/fail summary.

use bignum_check::{parse_check_line, render_sides, run_check};
use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(about = "Replay scripted bignum check(\"LHS OP RHS\") expressions")]
struct Args {
    /// Script files to replay. Reads stdin if none are given.
    files: Vec<PathBuf>,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut passed = 0usize;
    let mut failed = 0usize;

    if args.files.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            run_line(&line?, &mut passed, &mut failed);
        }
    } else {
        for path in &args.files {
            let contents = std::fs::read_to_string(path)?;
            for line in contents.lines() {
                run_line(line, &mut passed, &mut failed);
            }
        }
    }

    info!(passed, failed, "regression run complete");
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn run_line(line: &str, passed: &mut usize, failed: &mut usize) {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return;
    }

    let parsed = match parse_check_line(line) {
        Ok(p) => p,
        Err(e) => {
            warn!(%line, error = %e, "skipping unparseable line");
            return;
        }
    };

    match run_check(&parsed) {
        Ok(true) => *passed += 1,
        Ok(false) => {
            *failed += 1;
            match render_sides(&parsed) {
                Ok((lhs, rhs)) => error!(%line, lhs, rhs, "check failed"),
                Err(_) => error!(%line, "check failed"),
            }
        }
        Err(e) => {
            *failed += 1;
            error!(%line, error = %e, "check errored");
        }
    }
}
