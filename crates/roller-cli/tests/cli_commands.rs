//! Integration tests for the roller CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stats_path(dir: &TempDir) -> PathBuf {
    dir.path().join("stats.json")
}

/// `roller` with a temp stats file and colour disabled.
fn roller(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roller").unwrap();
    cmd.env("NO_COLOR", "1")
        .arg("--stats-file")
        .arg(stats_path(dir));
    cmd
}

fn stored(dir: &TempDir) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(stats_path(dir)).unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_single_faced_dice_with_modifier() {
    let dir = TempDir::new().unwrap();
    roller(&dir)
        .args(["roll", "3d1", "-m", "Luck=3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3d1: [1, 1, 1] = 3"))
        .stdout(predicate::str::contains("• Luck: +3"))
        .stdout(predicate::str::contains("RESULT: 6"));
}

#[test]
fn roll_negative_unlabelled_modifier() {
    let dir = TempDir::new().unwrap();
    roller(&dir)
        .args(["roll", "d1", "-m", "-4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("• Modifier: -4"))
        .stdout(predicate::str::contains("RESULT: -3"));
}

#[test]
fn roll_defaults_to_d20() {
    let dir = TempDir::new().unwrap();
    roller(&dir)
        .arg("roll")
        .assert()
        .success()
        .stdout(predicate::str::contains("1d20: ["));
}

#[test]
fn roll_uses_stat_modifier() {
    let dir = TempDir::new().unwrap();
    // Default sheet: DEX 12 -> +1.
    roller(&dir)
        .args(["roll", "2d1", "--use", "dex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("• DEX Modifier: +1"))
        .stdout(predicate::str::contains("RESULT: 3"));
}

#[test]
fn roll_json_output() {
    let dir = TempDir::new().unwrap();
    let output = roller(&dir)
        .args(["roll", "2d1", "-m", "Luck=3", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 5);
    assert_eq!(json["components"][0]["kind"], "dice");
    assert_eq!(json["components"][0]["individual_results"], serde_json::json!([1, 1]));
    assert_eq!(json["components"][0]["subtotal"], 2);
    assert_eq!(json["components"][1]["kind"], "modifier");
    assert_eq!(json["components"][1]["label"], "Luck");
}

#[test]
fn roll_seed_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let run = || {
        roller(&dir)
            .args(["--seed", "42", "roll", "4d20", "--json"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn roll_rejects_complex_notation() {
    let dir = TempDir::new().unwrap();
    roller(&dir)
        .args(["roll", "2d6+3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dice notation"));
}

#[test]
fn roll_rejects_zero_dice() {
    let dir = TempDir::new().unwrap();
    roller(&dir)
        .args(["roll", "0d6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn roll_rejects_oversized_pool() {
    let dir = TempDir::new().unwrap();
    roller(&dir)
        .args(["roll", "4000000000d6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn roll_unknown_stat_fails() {
    let dir = TempDir::new().unwrap();
    roller(&dir)
        .args(["roll", "--use", "CHA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown stat: CHA"));
}

#[test]
fn roll_does_not_write_stats() {
    let dir = TempDir::new().unwrap();
    roller(&dir).arg("roll").assert().success();
    assert!(!stats_path(&dir).exists());
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_list_defaults() {
    let dir = TempDir::new().unwrap();
    roller(&dir)
        .args(["stats", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("STR"))
        .stdout(predicate::str::contains("DEX"))
        .stdout(predicate::str::contains("2 stats"));
}

#[test]
fn stats_add_persists() {
    let dir = TempDir::new().unwrap();
    roller(&dir)
        .args(["stats", "add", "CON", "14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added CON (14)"));

    assert_eq!(
        stored(&dir),
        serde_json::json!([
            {"name": "STR", "value": 11},
            {"name": "DEX", "value": 12},
            {"name": "CON", "value": 14}
        ])
    );
}

#[test]
fn stats_add_negative_value() {
    let dir = TempDir::new().unwrap();
    roller(&dir)
        .args(["stats", "add", "Sanity", "-3"])
        .assert()
        .success();
    assert_eq!(stored(&dir)[2], serde_json::json!({"name": "Sanity", "value": -3}));
}

#[test]
fn stats_remove_and_set() {
    let dir = TempDir::new().unwrap();
    roller(&dir)
        .args(["stats", "remove", "str"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed STR"));
    roller(&dir)
        .args(["stats", "set", "DEX", "18"])
        .assert()
        .success();

    assert_eq!(stored(&dir), serde_json::json!([{"name": "DEX", "value": 18}]));
}

#[test]
fn stats_modifier_floors() {
    let dir = TempDir::new().unwrap();
    roller(&dir).args(["stats", "add", "WIS", "9"]).assert().success();
    roller(&dir)
        .args(["stats", "modifier", "wis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WIS Modifier: -1"));
}

#[test]
fn corrupt_stats_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(stats_path(&dir), "this is not json").unwrap();
    roller(&dir)
        .args(["stats", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("STR"))
        .stdout(predicate::str::contains("2 stats"));
}

#[test]
fn unwritable_stats_file_reports_error() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("roller")
        .unwrap()
        .arg("--stats-file")
        .arg(dir.path())
        .args(["stats", "add", "CON", "14"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot write"));
}

// ---------------------------------------------------------------------------
// shell
// ---------------------------------------------------------------------------

#[test]
fn shell_session() {
    let dir = TempDir::new().unwrap();
    roller(&dir)
        .arg("shell")
        .write_stdin("dice set 1 2d1\nmod add Luck 3\nuse DEX\nroll\nstat add INT 16\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2d1: [1, 1] = 2"))
        .stdout(predicate::str::contains("• DEX Modifier: +1"))
        .stdout(predicate::str::contains("RESULT: 6"))
        .stdout(predicate::str::contains("Added INT (16)."));

    assert_eq!(stored(&dir)[2], serde_json::json!({"name": "INT", "value": 16}));
}

#[test]
fn shell_no_save_on_edit() {
    let dir = TempDir::new().unwrap();
    roller(&dir)
        .args(["shell", "--no-save-on-edit"])
        .write_stdin("stat set STR 18\nquit\n")
        .assert()
        .success();
    assert!(!stats_path(&dir).exists());
}

#[test]
fn shell_reports_errors_and_continues() {
    let dir = TempDir::new().unwrap();
    roller(&dir)
        .arg("shell")
        .write_stdin("dice add 2d6+1\nmods\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid dice notation"))
        .stdout(predicate::str::contains("No modifiers."));
}
