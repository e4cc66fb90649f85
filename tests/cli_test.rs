//! Integration tests for the devrank binary.

use assert_cmd::Command;
use predicates::str::contains;
use std::fs;

fn metrics_json() -> &'static str {
    r#"{
        "commits": 400,
        "all_commits": true,
        "prs": 15,
        "issues": 2,
        "reviews": 2,
        "stars": 0.1,
        "followers": 2,
        "repos": 10
    }"#
}

#[test]
fn json_format_reports_level_and_percentile() {
    let output = Command::cargo_bin("devrank")
        .unwrap()
        .arg("--format")
        .arg("json")
        .write_stdin(metrics_json())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["level"], "A+");
    assert!((value["percentile"].as_f64().unwrap() - 50.0).abs() < 1e-9);
    assert_eq!(value["breakdown"]["scores"].as_array().unwrap().len(), 6);
}

#[test]
fn reads_metrics_from_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("metrics.json");
    fs::write(&input_path, metrics_json()).unwrap();

    Command::cargo_bin("devrank")
        .unwrap()
        .arg(&input_path)
        .assert()
        .success()
        .stdout(contains("Level:"))
        .stdout(contains("pull requests"));
}

#[test]
fn writes_output_file_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("rank.json");

    Command::cargo_bin("devrank")
        .unwrap()
        .arg("--format")
        .arg("json")
        .arg("-o")
        .arg(&out_path)
        .write_stdin(metrics_json())
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(value["level"], "A+");
}

#[test]
fn negative_metric_fails_with_a_diagnostic() {
    Command::cargo_bin("devrank")
        .unwrap()
        .write_stdin(r#"{"commits": -3}"#)
        .assert()
        .failure()
        .stderr(contains("invalid metric"));
}

#[test]
fn malformed_json_fails() {
    Command::cargo_bin("devrank")
        .unwrap()
        .write_stdin("{ nope")
        .assert()
        .failure()
        .stderr(contains("parse"));
}

#[test]
fn explicit_config_file_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"
            [[grades]]
            threshold = 100.0
            label = "only-band"
        "#,
    )
    .unwrap();

    let output = Command::cargo_bin("devrank")
        .unwrap()
        .arg("--format")
        .arg("json")
        .arg("--config")
        .arg(&config_path)
        .write_stdin(metrics_json())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["level"], "only-band");
}

#[test]
fn broken_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("broken.toml");
    fs::write(&config_path, "[calibration]\nprs_median = -1.0").unwrap();

    Command::cargo_bin("devrank")
        .unwrap()
        .arg("--config")
        .arg(&config_path)
        .write_stdin(metrics_json())
        .assert()
        .failure()
        .stderr(contains("failed to load config"));
}
