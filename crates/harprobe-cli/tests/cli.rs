use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn get_harprobe_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("harprobe")
}

fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(filename)
}

/// Scratch directory laid out like a working directory with the default file names
fn workspace_with(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (fixture, name) in files {
        std::fs::copy(fixture_path(fixture), temp_dir.path().join(name)).unwrap();
    }
    temp_dir
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_help() {
    let mut cmd = Command::new(get_harprobe_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--domain-map"))
        .stdout(predicate::str::contains("--lenient-cookies"));
}

#[test]
fn test_default_captures() {
    let dir = workspace_with(&[
        ("first.har", "first.har"),
        ("second.har", "second.har"),
        ("domain_map.json", "domain_map.json"),
    ]);

    let mut cmd = Command::new(get_harprobe_bin());
    cmd.current_dir(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Common to all captures"));

    let first = read_json(&dir.path().join("first.json"));
    assert_eq!(first["num_reqs"], 7);
    assert_eq!(first["num_cross_origin_redirections"], 1);
    assert_eq!(
        first["potential_tracking_cookies"][0],
        serde_json::json!(["IDE", "abc", "doubleclick.net"])
    );
    assert_eq!(
        first["non_get_request_origins"][0],
        serde_json::json!(["https", 443, "stats.g.doubleclick.net"])
    );

    let common = read_json(&dir.path().join("common.json"));
    assert_eq!(
        common["common_third_party_domains"],
        serde_json::json!(["google-analytics.com", "tracker.io"])
    );
}

#[test]
fn test_explicit_paths_and_json_format() {
    let dir = workspace_with(&[("first.har", "run-a.har"), ("second.har", "run-b.har")]);

    let mut cmd = Command::new(get_harprobe_bin());
    cmd.current_dir(dir.path())
        .arg("run-a.har")
        .arg("run-b.har")
        .arg("--domain-map")
        .arg(fixture_path("domain_map.json"))
        .arg("--common-output")
        .arg("both.json")
        .arg("--format")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["captures"].as_array().unwrap().len(), 2);
    assert_eq!(
        report["common"]["common_cookies"],
        serde_json::json!([["uid", "u123", "tracker.io"]])
    );

    assert!(dir.path().join("run-a.json").exists());
    assert!(dir.path().join("run-b.json").exists());
    assert!(dir.path().join("both.json").exists());
}

#[test]
fn test_single_path_is_usage_error() {
    let mut cmd = Command::new(get_harprobe_bin());
    cmd.arg("only.har");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("expected zero or two HAR paths"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_non_har_path_is_usage_error() {
    let mut cmd = Command::new(get_harprobe_bin());
    cmd.arg("a.har").arg("b.txt");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("not a .har file"));
}

#[test]
fn test_unknown_flag_exits_with_one() {
    let mut cmd = Command::new(get_harprobe_bin());
    cmd.arg("--no-such-flag");

    cmd.assert().code(1);
}

#[test]
fn test_missing_capture_is_fatal() {
    let dir = workspace_with(&[("domain_map.json", "domain_map.json")]);

    let mut cmd = Command::new(get_harprobe_bin());
    cmd.current_dir(dir.path());

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("first.har"));
    assert!(!dir.path().join("common.json").exists());
}

#[test]
fn test_missing_domain_map_is_fatal() {
    let dir = workspace_with(&[("first.har", "first.har"), ("second.har", "second.har")]);

    let mut cmd = Command::new(get_harprobe_bin());
    cmd.current_dir(dir.path());

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("domain_map.json"));
}

#[test]
fn test_lenient_cookies_flag() {
    let dir = workspace_with(&[
        ("malformed-cookie.har", "first.har"),
        ("second.har", "second.har"),
        ("domain_map.json", "domain_map.json"),
    ]);

    let mut strict = Command::new(get_harprobe_bin());
    strict.current_dir(dir.path());
    strict
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Malformed Set-Cookie"));

    let mut lenient = Command::new(get_harprobe_bin());
    lenient.current_dir(dir.path()).arg("--lenient-cookies");
    lenient.assert().success();

    let common = read_json(&dir.path().join("common.json"));
    assert_eq!(
        common["common_cookies"],
        serde_json::json!([["uid", "u123", "tracker.io"]])
    );
}
