//! CLI integration tests using assert_cmd.
//!
//! Argument validation runs through assert_cmd; the live-scan scenario
//! spawns the binary directly, reads the first discovery lines from stdout,
//! and kills the process (the scan itself never terminates on its own).

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::{BufRead, BufReader};
use std::process::{Command as StdCommand, Stdio};

#[allow(deprecated)]
fn primescan() -> Command {
    Command::cargo_bin("primescan").unwrap()
}

// --- Help and arg validation ---

#[test]
fn help_shows_all_options() {
    primescan().arg("--help").assert().success().stdout(
        predicate::str::contains("--start")
            .and(predicate::str::contains("--accelerated"))
            .and(predicate::str::contains("--yield-every"))
            .and(predicate::str::contains("--threads")),
    );
}

#[test]
fn non_integer_start_fails_at_parse() {
    primescan()
        .args(["--start", "twelve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn negative_start_fails_at_parse() {
    // The candidate domain is unsigned; a negative offset is rejected by clap
    primescan()
        .args(["--start", "-5"])
        .assert()
        .failure();
}

#[test]
fn zero_yield_interval_is_rejected() {
    primescan()
        .args(["--yield-every", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn unknown_flag_fails() {
    primescan()
        .arg("--nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

// --- Live scan scenarios ---

/// Spawn the binary, read `lines` discovery lines from stdout, kill it.
fn scan_lines(args: &[&str], lines: usize) -> Vec<String> {
    let mut child = StdCommand::new(env!("CARGO_BIN_EXE_primescan"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn primescan");

    let stdout = child.stdout.take().expect("stdout was piped");
    let collected: Vec<String> = BufReader::new(stdout)
        .lines()
        .take(lines)
        .map(|l| l.expect("stdout line"))
        .collect();

    child.kill().expect("failed to kill primescan");
    let _ = child.wait();
    collected
}

#[test]
fn scan_from_eight_prints_eleven_thirteen_seventeen() {
    let lines = scan_lines(&["--start", "8"], 3);
    assert_eq!(lines, vec!["11 is prime.", "13 is prime.", "17 is prime."]);
}

#[test]
fn accelerated_scan_agrees_with_scalar() {
    let scalar = scan_lines(&["--start", "90"], 3);
    let vector = scan_lines(&["--start", "90", "--accelerated"], 3);
    assert_eq!(scalar, vector);
    assert_eq!(scalar, vec!["97 is prime.", "101 is prime.", "103 is prime."]);
}

#[test]
fn default_scan_starts_at_one() {
    let lines = scan_lines(&[], 4);
    assert_eq!(
        lines,
        vec!["2 is prime.", "3 is prime.", "5 is prime.", "7 is prime."]
    );
}
