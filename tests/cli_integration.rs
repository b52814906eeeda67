//! CLI integration tests for gdext-build.
//!
//! These exercise the binary end to end without invoking git or scons:
//! the build precondition failure happens before any tool runs, and
//! verification only inspects the filesystem.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use gdext_build::core::artifact::{artifact_name, Variant};
use gdext_build::{Arch, Platform};

/// Get the gdext-build binary command.
fn gdext_build() -> Command {
    Command::cargo_bin("gdext-build").unwrap()
}

/// Create a temporary directory for test projects.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// The artifact name the binary will expect on this host.
fn host_artifact(variant: Variant) -> String {
    artifact_name(
        "cosine_calculator",
        Platform::host(),
        variant,
        Arch::host().as_str(),
    )
}

fn stage(bin_dir: &Path, name: &str, size: usize) {
    fs::create_dir_all(bin_dir).unwrap();
    fs::write(bin_dir.join(name), vec![0u8; size]).unwrap();
}

// ============================================================================
// gdext-build build
// ============================================================================

#[test]
fn test_build_refuses_to_run_outside_plugin_directory() {
    let tmp = temp_dir();

    gdext_build()
        .args(["build", "--no-color"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("extension source not found"));

    // Nothing ran: no clone, no output directory
    assert!(!tmp.path().join("godot-cpp").exists());
    assert!(!tmp.path().join("bin").exists());
}

#[test]
fn test_build_precondition_respects_plugin_name() {
    let tmp = temp_dir();

    // Source for a differently named plugin does not satisfy the check
    fs::create_dir_all(tmp.path().join("src")).unwrap();
    fs::write(tmp.path().join("src/other_plugin.cpp"), "// stub").unwrap();

    gdext_build()
        .args(["build", "--no-color"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cosine_calculator"));
}

// ============================================================================
// gdext-build verify
// ============================================================================

#[test]
fn test_verify_succeeds_when_all_artifacts_present() {
    let tmp = temp_dir();
    let bin_dir = tmp.path().join("bin");
    stage(&bin_dir, &host_artifact(Variant::Debug), 2048);
    stage(&bin_dir, &host_artifact(Variant::Release), 1024);

    gdext_build()
        .args(["verify", "--no-color"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(host_artifact(Variant::Debug)))
        .stdout(predicate::str::contains(host_artifact(Variant::Release)))
        .stdout(predicate::str::contains("MB"))
        .stdout(predicate::str::contains("all expected artifacts present"));
}

#[test]
fn test_verify_reports_the_missing_variant() {
    let tmp = temp_dir();
    let bin_dir = tmp.path().join("bin");
    stage(&bin_dir, &host_artifact(Variant::Debug), 2048);

    gdext_build()
        .args(["verify", "--no-color"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(host_artifact(Variant::Release)))
        .stdout(predicate::str::contains("missing"))
        // The present file is still reported with its size
        .stdout(predicate::str::contains(host_artifact(Variant::Debug)))
        .stderr(predicate::str::contains("1 expected artifact(s) missing"));
}

#[test]
fn test_verify_empty_directory_lists_both_files() {
    let tmp = temp_dir();

    gdext_build()
        .args(["verify", "--no-color"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("2 expected artifact(s) missing"));
}

#[test]
fn test_verify_honors_plugin_flag() {
    let tmp = temp_dir();
    let bin_dir = tmp.path().join("bin");
    let debug = artifact_name("waveform", Platform::host(), Variant::Debug, Arch::host().as_str());
    let release = artifact_name("waveform", Platform::host(), Variant::Release, Arch::host().as_str());
    stage(&bin_dir, &debug, 64);
    stage(&bin_dir, &release, 64);

    gdext_build()
        .args(["verify", "--plugin", "waveform", "--no-color"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("libwaveform."));
}

// ============================================================================
// gdext-build doctor
// ============================================================================

#[test]
fn test_doctor_prints_a_report() {
    let tmp = temp_dir();

    // Status depends on what is installed on the host, so only the report
    // shape is asserted.
    gdext_build()
        .args(["doctor", "--no-color"])
        .current_dir(tmp.path())
        .assert()
        .stdout(predicate::str::contains("Preflight checks:"))
        .stdout(predicate::str::contains("SCons"))
        .stdout(predicate::str::contains("C++ Compiler"))
        .stdout(predicate::str::contains("Summary:"));
}
