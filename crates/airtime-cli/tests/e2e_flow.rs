//! End-to-end tests for the timetable editing and live-state flow.
//!
//! Each test drives the real binary against a timetable file in a temp
//! directory, using --offset-ms to pin "now" near a fixed event date so
//! status assertions are deterministic.

use std::path::Path;
use std::process::{Command, Output};

use chrono::{DateTime, Local, TimeZone};
use tempfile::TempDir;

fn airtime(timetable: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_airtime"))
        .env("AIRTIME_TIMETABLE_PATH", timetable)
        .args(args)
        .output()
        .expect("failed to run airtime")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert_success(output);
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

/// Offset that makes the shifted clock read (approximately) `target`.
fn offset_to(target: &DateTime<Local>) -> String {
    (*target - Local::now()).num_milliseconds().to_string()
}

fn event_local(hour: u32, min: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2001, 1, 1, hour, min, 0).unwrap()
}

fn init_event(timetable: &Path) {
    let output = airtime(
        timetable,
        &[
            "init",
            "--title",
            "Signal Night",
            "--date",
            "2001-01-01",
            "--time",
            "22:00",
        ],
    );
    assert_success(&output);
}

fn add_slot(timetable: &Path, name: &str, minutes: &str) {
    let output = airtime(
        timetable,
        &["slots", "add", "--name", name, "--minutes", minutes],
    );
    assert_success(&output);
}

#[test]
fn init_creates_file_and_refuses_overwrite() {
    let temp = TempDir::new().unwrap();
    let timetable = temp.path().join("timetable.json");

    init_event(&timetable);
    assert!(timetable.exists());

    let output = airtime(&timetable, &["init", "--date", "2001-01-01"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));

    let output = airtime(&timetable, &["init", "--date", "2002-02-02", "--force"]);
    assert_success(&output);
}

#[test]
fn slot_edits_produce_contiguous_windows() {
    let temp = TempDir::new().unwrap();
    let timetable = temp.path().join("timetable.json");
    init_event(&timetable);

    add_slot(&timetable, "Nova", "60");
    add_slot(&timetable, "Volta", "30");

    let report = stdout_json(&airtime(&timetable, &["show", "--json"]));
    let slots = report["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 2);

    let end0: DateTime<Local> = slots[0]["end"].as_str().unwrap().parse().unwrap();
    let start0: DateTime<Local> = slots[0]["start"].as_str().unwrap().parse().unwrap();
    let start1: DateTime<Local> = slots[1]["start"].as_str().unwrap().parse().unwrap();
    assert_eq!(start0, event_local(22, 0));
    assert_eq!(end0, start1);
    assert_eq!((start1 - start0).num_minutes(), 60);
}

#[test]
fn status_tracks_the_shifted_clock_through_the_event() {
    let temp = TempDir::new().unwrap();
    let timetable = temp.path().join("timetable.json");
    init_event(&timetable);
    add_slot(&timetable, "Nova", "60");
    add_slot(&timetable, "Volta", "30");

    let cases = [
        (event_local(12, 0), "STANDBY"),
        (event_local(20, 30), "UPCOMING"),
        (event_local(22, 10), "ON_AIR_BLOCK"),
        (event_local(23, 59), "FINISHED"),
    ];
    for (target, expected) in cases {
        let report = stdout_json(&airtime(
            &timetable,
            &["status", "--json", "--offset-ms", &offset_to(&target)],
        ));
        assert_eq!(report["status"], *expected, "at {target}");
    }

    // 10 minutes into slot 0: Nova is on air with ~50 minutes left
    let report = stdout_json(&airtime(
        &timetable,
        &[
            "status",
            "--json",
            "--offset-ms",
            &offset_to(&event_local(22, 10)),
        ],
    ));
    assert_eq!(report["current_index"], 0);
    assert_eq!(report["current_slot"], "Nova");
    assert_eq!(report["next_slot"], "Volta");
    let remaining = report["remaining_in_current_secs"].as_i64().unwrap();
    // Allow slack for the wall-clock reads between offset calculation and run
    assert!((2950..=3000).contains(&remaining), "remaining {remaining}");
}

#[test]
fn reorder_and_duplicate_shift_later_windows() {
    let temp = TempDir::new().unwrap();
    let timetable = temp.path().join("timetable.json");
    init_event(&timetable);
    add_slot(&timetable, "Nova", "60");
    add_slot(&timetable, "Volta", "30");

    assert_success(&airtime(&timetable, &["slots", "move", "0", "1"]));
    let report = stdout_json(&airtime(&timetable, &["slots", "list", "--json"]));
    let names: Vec<_> = report["slots"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Volta", "Nova"]);

    assert_success(&airtime(&timetable, &["slots", "duplicate", "0"]));
    let report = stdout_json(&airtime(&timetable, &["show", "--json"]));
    let slots = report["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 3);

    // The duplicate occupies the old window of its source; Nova moved later
    let start1: DateTime<Local> = slots[1]["start"].as_str().unwrap().parse().unwrap();
    let start2: DateTime<Local> = slots[2]["start"].as_str().unwrap().parse().unwrap();
    assert_eq!(start1, event_local(22, 30));
    assert_eq!(start2, event_local(23, 0));
    assert_ne!(slots[0]["id"], slots[1]["id"]);
}

#[test]
fn malformed_duration_is_neutralized_not_fatal() {
    let temp = TempDir::new().unwrap();
    let timetable = temp.path().join("timetable.json");
    init_event(&timetable);
    add_slot(&timetable, "Nova", "60");

    let output = airtime(
        &timetable,
        &["slots", "set", "0", "--minutes", "-45"],
    );
    assert_success(&output);

    let report = stdout_json(&airtime(&timetable, &["show", "--json"]));
    let slot = &report["slots"][0];
    assert_eq!(slot["duration_minutes"], 0.0);
    assert_eq!(slot["start"], slot["end"]);
}

#[test]
fn out_of_bounds_index_fails_loudly() {
    let temp = TempDir::new().unwrap();
    let timetable = temp.path().join("timetable.json");
    init_event(&timetable);

    let output = airtime(&timetable, &["slots", "remove", "3"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("out of bounds"));
}

#[test]
fn set_start_moves_every_window() {
    let temp = TempDir::new().unwrap();
    let timetable = temp.path().join("timetable.json");
    init_event(&timetable);
    add_slot(&timetable, "Nova", "60");

    assert_success(&airtime(
        &timetable,
        &["set-start", "--date", "2001-01-02", "--time", "20:00"],
    ));

    let report = stdout_json(&airtime(&timetable, &["show", "--json"]));
    let start0: DateTime<Local> = report["slots"][0]["start"].as_str().unwrap().parse().unwrap();
    assert_eq!(start0, Local.with_ymd_and_hms(2001, 1, 2, 20, 0, 0).unwrap());
}

#[test]
fn empty_timetable_still_reports_a_status() {
    let temp = TempDir::new().unwrap();
    let timetable = temp.path().join("timetable.json");
    init_event(&timetable);

    let report = stdout_json(&airtime(
        &timetable,
        &[
            "status",
            "--json",
            "--offset-ms",
            &offset_to(&event_local(20, 0)),
        ],
    ));
    assert_eq!(report["status"], "UPCOMING");
    assert_eq!(report["current_index"], serde_json::Value::Null);
    assert_eq!(report["event_start"], report["event_end"]);
}
