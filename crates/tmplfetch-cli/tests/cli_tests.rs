//! Integration tests for tmplfetch-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use tmplfetch_core::test_utils::TestHttpServer;
use tmplfetch_core::test_utils::sample_archive;

fn tmplfetch_cmd() -> Command {
    cargo_bin_cmd!("tmplfetch")
}

#[test]
fn test_version_flag() {
    tmplfetch_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tmplfetch"));
}

#[test]
fn test_help_flag() {
    tmplfetch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pull"));
}

#[test]
fn test_pull_help() {
    tmplfetch_cmd()
        .arg("pull")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--overwrite"));
}

#[test]
fn test_pull_writes_templates() {
    let server = TestHttpServer::serve(200, sample_archive());
    let temp = TempDir::new().expect("failed to create temp dir");

    tmplfetch_cmd()
        .arg("pull")
        .arg(server.url())
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Fetched 2 template(s)"));

    assert!(temp.path().join("template/go/handler.go").is_file());
    assert!(temp.path().join("template/node/handler.js").is_file());
    assert!(!temp.path().join("master.zip").exists());
    assert_eq!(server.requests(), vec!["/archive/master.zip"]);
}

#[test]
fn test_pull_json_output() {
    let server = TestHttpServer::serve(200, sample_archive());
    let temp = TempDir::new().expect("failed to create temp dir");

    let output = tmplfetch_cmd()
        .arg("--json")
        .arg("pull")
        .arg(server.url())
        .arg("--dir")
        .arg(temp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "pull");
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["fetched_languages"][0], "go");
    assert_eq!(json["data"]["fetched_languages"][1], "node");
    assert_eq!(json["data"]["archive_reused"], false);
}

#[test]
fn test_pull_reports_existing_languages() {
    let server = TestHttpServer::serve(200, sample_archive());
    let temp = TempDir::new().expect("failed to create temp dir");
    fs::create_dir_all(temp.path().join("template/go")).unwrap();
    fs::write(temp.path().join("template/go/handler.go"), "local").unwrap();

    tmplfetch_cmd()
        .arg("pull")
        .arg(server.url())
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Cannot overwrite"))
        .stdout(predicate::str::contains("--overwrite"));

    let kept = fs::read_to_string(temp.path().join("template/go/handler.go")).unwrap();
    assert_eq!(kept, "local");
    assert!(temp.path().join("template/node/handler.js").is_file());
}

#[test]
fn test_pull_overwrite_replaces_existing() {
    let server = TestHttpServer::serve(200, sample_archive());
    let temp = TempDir::new().expect("failed to create temp dir");
    fs::create_dir_all(temp.path().join("template/go")).unwrap();
    fs::write(temp.path().join("template/go/handler.go"), "local").unwrap();

    tmplfetch_cmd()
        .arg("pull")
        .arg(server.url())
        .arg("--overwrite")
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Cannot overwrite").not());

    let replaced = fs::read_to_string(temp.path().join("template/go/handler.go")).unwrap();
    assert_eq!(replaced, "package function\n");
}

#[test]
fn test_pull_not_found_fails() {
    let server = TestHttpServer::serve(404, Vec::new());
    let temp = TempDir::new().expect("failed to create temp dir");

    tmplfetch_cmd()
        .arg("pull")
        .arg(server.url())
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("archive/master.zip"))
        .stderr(predicate::str::contains("404"));

    assert!(!temp.path().join("template").exists());
    assert!(!temp.path().join("master.zip").exists());
}

#[test]
fn test_pull_invalid_local_archive_fails() {
    let temp = TempDir::new().expect("failed to create temp dir");
    fs::write(temp.path().join("master.zip"), b"not a zip").unwrap();

    tmplfetch_cmd()
        .arg("pull")
        .arg("--dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid template archive"));
}

#[test]
fn test_completion_bash() {
    tmplfetch_cmd()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("tmplfetch"));
}
