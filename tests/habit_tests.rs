//! Integration tests for habit editing, marking and the week grid

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_tracker, tracker_cmd};

fn list_output(temp: &TempDir) -> String {
    let output = tracker_cmd(temp.path()).arg("list").output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_first_run_seeds_example_habits() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    tracker_cmd(temp.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wake early"))
        .stdout(predicate::str::contains("Exercise"))
        .stdout(predicate::str::contains("Deep work (2h)"))
        .stdout(predicate::str::contains("0/7"));

    assert!(temp
        .path()
        .join(".discipline/discipline-table-v1.json")
        .exists());
}

#[test]
fn test_add_habit_appends_in_order() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    tracker_cmd(temp.path())
        .args(["add", "Read", "20", "pages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'Read 20 pages'"));

    let list = list_output(&temp);
    let last = list.lines().last().unwrap();
    assert!(last.starts_with("4  "));
    assert!(last.ends_with("  Read 20 pages"));
}

#[test]
fn test_add_blank_habit_changes_nothing() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    let before = list_output(&temp);

    tracker_cmd(temp.path())
        .args(["add", "   "])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(list_output(&temp), before);
}

#[test]
fn test_rename_habit() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    tracker_cmd(temp.path())
        .args(["rename", "Exercise", "Run 5k"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed to 'Run 5k'"));

    let list = list_output(&temp);
    assert!(list.contains("Run 5k"));
    assert!(!list.contains("Exercise"));
}

#[test]
fn test_rename_to_blank_keeps_name() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    tracker_cmd(temp.path())
        .args(["rename", "1", "  "])
        .assert()
        .success();

    assert!(list_output(&temp).contains("Wake early"));
}

#[test]
fn test_unknown_habit_fails() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    tracker_cmd(temp.path())
        .args(["toggle", "Swim", "2024-01-01"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("discipline list"));
}

#[test]
fn test_remove_with_yes() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    tracker_cmd(temp.path())
        .args(["toggle", "2", "2024-01-01"])
        .assert()
        .success();

    tracker_cmd(temp.path())
        .args(["remove", "2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 'Exercise'"));

    assert!(!list_output(&temp).contains("Exercise"));
    let stored = fs::read_to_string(temp.path().join(".discipline/discipline-table-v1.json")).unwrap();
    assert!(!stored.contains("2024-01-01"));
}

#[test]
fn test_remove_declined_keeps_habit() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    tracker_cmd(temp.path())
        .args(["remove", "Exercise"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));

    assert!(list_output(&temp).contains("Exercise"));
}

#[test]
fn test_remove_confirmed_on_stdin() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    tracker_cmd(temp.path())
        .args(["remove", "Exercise"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    assert!(!list_output(&temp).contains("Exercise"));
}

#[test]
fn test_toggle_updates_week_totals() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    for day in ["2024-01-01", "2024-01-03"] {
        tracker_cmd(temp.path())
            .args(["toggle", "1", day])
            .assert()
            .success()
            .stdout(predicate::str::contains("Checked 'Wake early' on"));
    }
    tracker_cmd(temp.path())
        .args(["toggle", "Exercise", "2024-01-01"])
        .assert()
        .success();

    let output = tracker_cmd(temp.path())
        .args(["show", "--week", "2024-01-05"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.starts_with("Week of Jan 1 - Jan 7 (2024-01-01)"));
    let wake = stdout.lines().find(|l| l.contains("Wake early")).unwrap();
    assert!(wake.ends_with("2/7"));
    let exercise = stdout.lines().find(|l| l.contains("Exercise")).unwrap();
    assert!(exercise.ends_with("1/7"));
    let total = stdout.lines().find(|l| l.contains("Total")).unwrap();
    let counts: Vec<&str> = total.split_whitespace().skip(1).collect();
    assert_eq!(counts, vec!["2", "0", "1", "0", "0", "0", "0"]);
}

#[test]
fn test_toggle_twice_restores() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    tracker_cmd(temp.path())
        .args(["toggle", "1", "2024-01-01"])
        .assert()
        .stdout(predicate::str::contains("Checked"));
    tracker_cmd(temp.path())
        .args(["toggle", "1", "2024-01-01"])
        .assert()
        .stdout(predicate::str::contains("Unchecked"));

    tracker_cmd(temp.path())
        .args(["show", "--week", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/7").not());
}

#[test]
fn test_show_other_weeks() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    tracker_cmd(temp.path())
        .args(["toggle", "1", "2023-12-27"])
        .assert()
        .success();

    tracker_cmd(temp.path())
        .args(["show", "--week", "2024-01-03", "--shift=-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dec 25 - Dec 31"))
        .stdout(predicate::str::contains("1/7"));

    tracker_cmd(temp.path())
        .args(["show", "--week", "2024-01-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/7").not());
}

#[test]
fn test_invalid_week_reference() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    tracker_cmd(temp.path())
        .args(["show", "--week", "someday"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}
