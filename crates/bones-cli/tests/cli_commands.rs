//! Integration tests for the `bones` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bones() -> Command {
    let mut cmd = Command::cargo_bin("bones").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---------------------------------------------------------------------------
// argument validation
// ---------------------------------------------------------------------------

#[test]
fn no_dice_is_a_quiet_no_op() {
    bones().assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn odd_token_count_is_rejected() {
    bones()
        .args(["2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("paired"));
}

#[test]
fn unknown_die_type_is_rejected() {
    bones()
        .args(["2", "xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown die type 'xyz'"));
}

#[test]
fn malformed_count_is_rejected() {
    bones()
        .args(["x", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid die count 'x'"));
}

#[test]
fn zero_sided_die_is_rejected() {
    bones()
        .args(["2", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1 side"));
}

// ---------------------------------------------------------------------------
// mode defaults and overrides
// ---------------------------------------------------------------------------

#[test]
fn plain_dice_default_to_spread() {
    bones()
        .args(["--seed", "1", "2", "6"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+ \d+\n$").unwrap());
}

#[test]
fn nwod_dice_default_to_tally() {
    bones()
        .args(["--seed", "2", "3", "nwod"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+\n$").unwrap());
}

#[test]
fn fudge_tally_can_go_negative() {
    bones()
        .args(["--seed", "3", "4", "fudge"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^-?\d+\n$").unwrap());
}

#[test]
fn mode_flag_forces_tally_on_plain_dice() {
    bones()
        .args(["--seed", "4", "--mode", "tally", "2", "6"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+\n$").unwrap());
}

#[test]
fn mode_flag_forces_spread_on_nwod_dice() {
    // At least the two pool dice; explosions only add faces.
    bones()
        .args(["--seed", "5", "--mode", "spread", "2", "nwod"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+( \d+)+\n$").unwrap());
}

#[test]
fn tally_above_flips_plain_dice_to_tally() {
    bones()
        .args(["--seed", "6", "-t", "4", "3", "6"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+\n$").unwrap());
}

#[test]
fn nwod_flags_are_accepted_together() {
    bones()
        .args(["--seed", "7", "-o", "-b", "3", "nwod"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^-?\d+\n$").unwrap());
}

#[test]
fn multiple_sets_print_in_order() {
    // One spread line with exactly two faces, then one tally line.
    bones()
        .args(["--seed", "8", "2", "6", "2", "nwod"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+ \d+\n\d+\n$").unwrap());
}

// ---------------------------------------------------------------------------
// repeats, totals, and determinism
// ---------------------------------------------------------------------------

#[test]
fn repeat_prints_one_line_per_repetition() {
    bones()
        .args(["--seed", "9", "-r", "3", "1", "6"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^(\d+\n){3}$").unwrap());
}

#[test]
fn sum_prints_a_total() {
    bones()
        .args(["--seed", "10", "-s", "2", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:"));
}

#[test]
fn repeated_sums_render_a_summary_table() {
    bones()
        .args(["--seed", "11", "-r", "3", "-s", "2", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results").and(predicate::str::contains("Total")));
}

#[test]
fn seeded_runs_are_reproducible() {
    let args = ["--seed", "12", "-r", "5", "3", "nwod", "2", "6"];
    let first = bones().args(args).output().unwrap();
    let second = bones().args(args).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn debug_shows_raw_faces() {
    bones()
        .args(["--seed", "13", "--debug", "1", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("["));
}

// ---------------------------------------------------------------------------
// repeat-until-target
// ---------------------------------------------------------------------------

#[test]
fn target_mode_reports_the_summary() {
    // 3d6 sums to at least 3, so a target of 1 always lands in one roll.
    bones()
        .args(["--seed", "14", "-u", "1", "3", "6"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Target: 1")
                .and(predicate::str::contains("Rolls: 1"))
                .and(predicate::str::contains("Tally:")),
        );
}

#[test]
fn target_mode_stops_at_the_repeat_cap() {
    bones()
        .args(["--seed", "15", "-u", "1000000", "-r", "2", "1", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Target: 1000000").and(predicate::str::contains("Rolls: 2")));
}

// ---------------------------------------------------------------------------
// table lookups
// ---------------------------------------------------------------------------

#[test]
fn table_lookup_prints_the_matching_line() {
    let dir = TempDir::new().unwrap();
    let table = dir.path().join("oracle.txt");
    fs::write(&table, "one\ntwo\nthree\nfour\nfive\nsix\n").unwrap();

    bones()
        .args(["--seed", "16", "1", "6", "--table"])
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^  \d+: (one|two|three|four|five|six)$").unwrap());
}

#[test]
fn table_lookup_marks_missing_entries() {
    let dir = TempDir::new().unwrap();
    let table = dir.path().join("short.txt");
    fs::write(&table, "only\n").unwrap();

    // A d6 face of 2-6 has no entry; face 1 hits the only line. Either
    // way the lookup line renders.
    bones()
        .args(["--seed", "17", "1", "6", "--table"])
        .arg(&table)
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^  \d+: (only|\(no entry\))$").unwrap());
}

#[test]
fn missing_table_file_is_an_error() {
    bones()
        .args(["1", "6", "--table", "/nonexistent/table.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read table"));
}

// ---------------------------------------------------------------------------
// json output
// ---------------------------------------------------------------------------

#[test]
fn json_output_is_one_document_per_run() {
    let output = bones()
        .args(["--seed", "18", "--json", "2", "6", "1", "nwod"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let repeats = value.as_array().unwrap();
    assert_eq!(repeats.len(), 1);

    let sets = repeats[0].as_array().unwrap();
    assert_eq!(sets.len(), 2);
    // Spread set serializes as a face array, tally set as a bare number.
    assert!(sets[0].is_array());
    assert!(sets[1].is_i64());
}

#[test]
fn json_repeats_once_per_repetition() {
    let output = bones()
        .args(["--seed", "19", "--json", "-r", "4", "1", "6"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 4);
}

#[test]
fn json_target_mode_reports_the_summary_object() {
    let output = bones()
        .args(["--seed", "20", "--json", "-u", "1", "3", "6"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["target"], 1);
    assert_eq!(value["rolls"], 1);
    assert!(value["tally"].as_i64().unwrap() >= 3);
}
