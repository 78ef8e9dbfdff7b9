// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

#[test]
fn add_then_sync_drains_the_queue() {
    let temp = init_temp();
    add_task(&temp, "task-1");
    add_task(&temp, "task-2");

    doq()
        .arg("status")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 pending"));

    doq()
        .arg("sync")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Sync success: 2 synced"));

    doq()
        .arg("status")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 pending"));
}

#[test]
fn add_rejects_bad_arguments() {
    let temp = init_temp();

    doq()
        .args(["add", "merge", "task", "task-1"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid operation"));

    doq()
        .args(["add", "create", "task", "task-1", "--data", "[1,2]"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON object"));
}

#[test]
fn sync_is_recorded_in_history_and_stats() {
    let temp = init_temp();
    add_task(&temp, "task-1");

    doq().arg("sync").current_dir(temp.path()).assert().success();

    doq()
        .arg("history")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("manual_sync"))
        .stdout(predicate::str::contains("1 processed"));

    doq()
        .arg("stats")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total syncs: 1"))
        .stdout(predicate::str::contains("Success rate: 100.0%"));
}

#[test]
fn disabled_cloud_records_failures() {
    let temp = init_temp();
    std::fs::write(
        temp.path().join(".doq/config.toml"),
        "[cloud]\nenabled = false\n",
    )
    .unwrap();
    add_task(&temp, "task-1");

    doq()
        .arg("sync")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("cloud sync is disabled"))
        .stdout(predicate::str::contains("1 failed"));
}

#[test]
fn clear_empties_the_queue() {
    let temp = init_temp();
    add_task(&temp, "task-1");
    add_task(&temp, "task-2");

    doq()
        .arg("clear")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 queued item(s)"));

    doq()
        .arg("status")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 pending"));

    // The clear itself shows up in history.
    doq()
        .arg("history")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("clear_queue"));
}

#[test]
fn offline_mode_toggle_is_reflected_in_status() {
    let temp = init_temp();

    doq()
        .args(["offline", "on"])
        .current_dir(temp.path())
        .assert()
        .success();

    doq()
        .arg("status")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: offline"));

    doq()
        .args(["offline", "off"])
        .current_dir(temp.path())
        .assert()
        .success();

    doq()
        .arg("status")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: online"));

    doq()
        .args(["offline", "sideways"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid offline mode"));
}
