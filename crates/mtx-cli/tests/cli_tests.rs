// Dweve MTX - MatrixMarket Exchange Format Reader
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

const COORDINATE: &str = "%%MatrixMarket matrix coordinate real general\n\
%%Test collection\n\
%TEST ID 42\n\
3 3 2\n\
1 1 1.5\n\
3 2 -2.0\n";

fn mtx_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mtx").expect("Failed to find mtx binary");
    cmd.env_remove("MTX_MAX_ENTRIES").env_remove("RUST_LOG");
    cmd
}

fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    mtx_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MatrixMarket"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_no_subcommand_fails() {
    mtx_cmd().assert().failure();
}

// ===== Validate Command Tests =====

#[test]
fn test_validate_valid_file() {
    let file = create_temp_file(COORDINATE, ".mtx");

    mtx_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Size: 3 x 3"))
        .stdout(predicate::str::contains("Entries: 2"));
}

#[test]
fn test_validate_short_read_exit_code() {
    let file = create_temp_file(
        "%%MatrixMarket matrix coordinate real general\n3 3 3\n1 1 1.0\n2 2 2.0\n",
        ".mtx",
    );

    mtx_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .code(24)
        .stderr(predicate::str::contains("code -24"));
}

#[test]
fn test_validate_bad_token_reports_line() {
    let file = create_temp_file(
        "%%MatrixMarket matrix coordinate integer general\n2 2 1\n1 x 3\n",
        ".mtx",
    );

    mtx_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .code(21)
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_validate_missing_file() {
    mtx_cmd()
        .arg("validate")
        .arg("does/not/exist.mtx")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("can't open file"));
}

#[test]
fn test_validate_empty_file() {
    let file = create_temp_file("% only a comment\n", ".mtx");

    mtx_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .code(12);
}

#[test]
fn test_validate_unsupported_format() {
    let file = create_temp_file("irrelevant", ".hb");

    mtx_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .code(65)
        .stderr(predicate::str::contains("Harwell-Boeing"));
}

#[test]
fn test_validate_unrecognized_extension() {
    let file = create_temp_file(COORDINATE, ".txt");

    mtx_cmd().arg("validate").arg(file.path()).assert().code(66);
}

#[test]
fn test_validate_lenient_accepts_real_hermitian() {
    let file = create_temp_file(
        "%%MatrixMarket matrix coordinate real hermitian\n2 2 1\n1 1 1.0\n",
        ".mtx",
    );

    mtx_cmd().arg("validate").arg(file.path()).assert().code(6);

    mtx_cmd()
        .arg("validate")
        .arg("--lenient")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("lenient"));
}

#[test]
fn test_validate_max_entries_flag() {
    let file = create_temp_file(COORDINATE, ".mtx");

    mtx_cmd()
        .arg("validate")
        .arg("--max-entries")
        .arg("1")
        .arg(file.path())
        .assert()
        .code(1);
}

#[test]
fn test_validate_max_entries_env() {
    let file = create_temp_file(COORDINATE, ".mtx");

    mtx_cmd()
        .env("MTX_MAX_ENTRIES", "1")
        .arg("validate")
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot allocate"));

    mtx_cmd()
        .env("MTX_MAX_ENTRIES", "1")
        .arg("validate")
        .arg("--max-entries")
        .arg("10")
        .arg(file.path())
        .assert()
        .success();
}

#[test]
fn test_validate_invalid_env() {
    let file = create_temp_file(COORDINATE, ".mtx");

    mtx_cmd()
        .env("MTX_MAX_ENTRIES", "lots")
        .arg("validate")
        .arg(file.path())
        .assert()
        .code(67)
        .stderr(predicate::str::contains("MTX_MAX_ENTRIES"));
}

// ===== Inspect Command Tests =====

#[test]
fn test_inspect_text() {
    let file = create_temp_file(COORDINATE, ".mtx");

    mtx_cmd()
        .arg("inspect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("coordinate"))
        .stdout(predicate::str::contains("Test collection"))
        .stdout(predicate::str::contains("TEST ID = 42"));
}

#[test]
fn test_inspect_verbose_lists_entries() {
    let file = create_temp_file(COORDINATE, ".mtx");

    mtx_cmd()
        .arg("inspect")
        .arg("--verbose")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(3, 2) -2"));
}

#[test]
fn test_inspect_json() {
    let file = create_temp_file(COORDINATE, ".mtx");

    let output = mtx_cmd()
        .arg("inspect")
        .arg("--format")
        .arg("json")
        .arg(file.path())
        .output()
        .expect("Failed to run mtx");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("inspect output is not JSON");
    assert_eq!(report["header"]["layout"], "coordinate");
    assert_eq!(report["header"]["rows"], 3);
    assert_eq!(report["stored_entries"], 2);
    assert_eq!(report["collection"], "Test collection");
    assert_eq!(report["structured_comments"][0]["value"], "42");
    assert!(report.get("data").is_none());
}

#[test]
fn test_inspect_packed_array() {
    let file = create_temp_file(
        "%%MatrixMarket matrix array real symmetric\n3 3\n1\n2\n3\n4\n5\n6\n",
        ".mtx",
    );

    let output = mtx_cmd()
        .args(["inspect", "-f", "json", "-v"])
        .arg(file.path())
        .output()
        .expect("Failed to run mtx");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["storage"], "lower");
    assert_eq!(report["stored_entries"], 6);
    assert_eq!(report["data"]["values"].as_array().unwrap().len(), 6);
}

// ===== Codes Command Tests =====

#[test]
fn test_codes_text() {
    mtx_cmd()
        .arg("codes")
        .assert()
        .success()
        .stdout(predicate::str::contains("-11"))
        .stdout(predicate::str::contains("EOF before header"))
        .stdout(predicate::str::contains("short read"));
}

#[test]
fn test_codes_json() {
    let output = mtx_cmd()
        .args(["codes", "--format", "json"])
        .output()
        .expect("Failed to run mtx");
    let table: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(table.as_array().unwrap().len(), 16);
}
