// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn doq() -> Command {
    cargo_bin_cmd!("doq")
}

/// Helper to create an initialized temp directory with a deterministic
/// transport: zero latency, no injected failures.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    doq().arg("init").current_dir(temp.path()).assert().success();

    std::fs::write(
        temp.path().join(".doq/config.toml"),
        "[cloud]\nenabled = true\nlatency_ms = 0\nfailure_rate = 0.0\n",
    )
    .unwrap();
    temp
}

/// Helper to queue a create mutation for a task.
pub fn add_task(temp: &TempDir, entity_id: &str) {
    doq()
        .args([
            "add",
            "create",
            "task",
            entity_id,
            "--data",
            r#"{"title": "test task"}"#,
        ])
        .current_dir(temp.path())
        .assert()
        .success();
}
