// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end checks for the `iris-settings` binary against a scratch
//! config dir.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn cli(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("iris-settings").unwrap();
    cmd.arg("--config-dir").arg(dir);
    cmd
}

#[test]
fn show_renders_defaults_on_first_run() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("jpegQuality"))
        .stdout(predicate::str::contains("95%"))
        .stdout(predicate::str::contains("medium"))
        .stdout(predicate::str::contains("(locked)"));
}

#[test]
fn set_clamps_and_persists_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .args(["set", "jpegQuality", "150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jpegQuality = 100%"));
    cli(dir.path())
        .args(["get", "jpegQuality"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100"));
}

#[test]
fn redundant_set_reports_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path()).args(["set", "raw10", "true"]).assert().success();
    cli(dir.path())
        .args(["set", "raw10", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("raw10 unchanged"));
}

#[test]
fn enabling_dual_exposure_unlocks_the_preview_tier() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .args(["set", "dualExposureControls", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dualExposureControls = on"));
    cli(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("(locked)").not());
}

#[test]
fn unknown_setting_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .args(["get", "shutterAngle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown setting"));
}

#[test]
fn preview_tier_out_of_domain_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .args(["set", "cameraPreviewQuality", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn reset_restores_defaults() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path()).args(["set", "jpegQuality", "10"]).assert().success();
    cli(dir.path()).arg("reset").assert().success();
    cli(dir.path())
        .args(["get", "jpegQuality"])
        .assert()
        .success()
        .stdout(predicate::str::contains("95"));
}
