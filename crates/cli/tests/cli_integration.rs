//! CLI integration tests for every subcommand.
//!
//! Uses `assert_cmd` to spawn the `jobcompat` binary and verify
//! exit codes, stdout content, and stderr content.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper: create a Command for the `jobcompat` binary with a clean
/// version environment.
fn jobcompat() -> Command {
    let mut cmd = cargo_bin_cmd!("jobcompat");
    cmd.env_remove("JOBCOMPAT_HADOOP_VERSION");
    cmd
}

fn write_jobconf(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("jobconf.json");
    fs::write(&path, contents).unwrap();
    path
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    jobcompat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Hadoop jobconf name translation toolkit",
        ));
}

#[test]
fn version_exits_0() {
    jobcompat()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jobcompat"));
}

// ──────────────────────────────────────────────
// 2. translate
// ──────────────────────────────────────────────

#[test]
fn translate_to_yarn_names() {
    jobcompat()
        .args([
            "translate",
            "mapred.job.tracker",
            "map.input.file",
            "--hadoop-version",
            "2.7.3",
        ])
        .assert()
        .success()
        .stdout("mapreduce.jobtracker.address\nmapreduce.map.input.file\n");
}

#[test]
fn translate_reads_version_from_env() {
    jobcompat()
        .env("JOBCOMPAT_HADOOP_VERSION", "1.0.3")
        .args(["translate", "mapreduce.jobtracker.address"])
        .assert()
        .success()
        .stdout("mapred.job.tracker\n");
}

#[test]
fn translate_passes_unknown_names_through() {
    jobcompat()
        .args(["translate", "my.own.key", "--hadoop-version", "2.0"])
        .assert()
        .success()
        .stdout("my.own.key\n");
}

#[test]
fn translate_json_output() {
    let output = jobcompat()
        .args([
            "--output",
            "json",
            "translate",
            "user.name",
            "--hadoop-version",
            "2.0",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["hadoop_version"], "2.0");
    assert_eq!(json["translations"]["user.name"], "mapreduce.job.user.name");
}

#[test]
fn translate_without_version_fails() {
    jobcompat()
        .args(["translate", "user.name"])
        .assert()
        .failure();
}

#[test]
fn translate_with_malformed_version_exits_1() {
    jobcompat()
        .args(["translate", "user.name", "--hadoop-version", "latest"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid version 'latest'"));
}

// ──────────────────────────────────────────────
// 3. aliases
// ──────────────────────────────────────────────

#[test]
fn aliases_lists_sorted_names() {
    jobcompat()
        .args(["aliases", "mapreduce.jobtracker.address"])
        .assert()
        .success()
        .stdout("mapred.job.tracker\nmapreduce.jobtracker.address\n");
}

#[test]
fn aliases_of_unknown_name_is_the_name() {
    jobcompat()
        .args(["aliases", "my.own.key"])
        .assert()
        .success()
        .stdout("my.own.key\n");
}

// ──────────────────────────────────────────────
// 4. get
// ──────────────────────────────────────────────

#[test]
fn get_from_env_uses_aliases() {
    jobcompat()
        .env("mapreduce_map_input_file", "/data/part-00000")
        .args(["get", "map.input.file"])
        .assert()
        .success()
        .stdout("/data/part-00000\n");
}

#[test]
fn get_falls_back_to_default() {
    jobcompat()
        .env_remove("jobcompat_test_unset")
        .args(["get", "jobcompat.test.unset", "--default", "fallback"])
        .assert()
        .success()
        .stdout("fallback\n");
}

#[test]
fn get_unset_without_default_exits_1() {
    jobcompat()
        .env_remove("jobcompat_test_unset")
        .args(["get", "jobcompat.test.unset"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is not set"));
}

#[test]
fn get_from_jobconf_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_jobconf(&tmp, r#"{"mapreduce.job.user.name": "dave"}"#);
    jobcompat()
        .args(["get", "user.name", "--jobconf"])
        .arg(&path)
        .assert()
        .success()
        .stdout("dave\n");
}

#[test]
fn get_missing_jobconf_file_exits_1() {
    jobcompat()
        .args(["get", "user.name", "--jobconf", "nonexistent_jobconf_xyz.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error reading file"));
}

// ──────────────────────────────────────────────
// 5. translate-jobconf
// ──────────────────────────────────────────────

#[test]
fn translate_jobconf_for_version_warns_once() {
    let tmp = TempDir::new().unwrap();
    let path = write_jobconf(&tmp, r#"{"mapred.job.tracker": "x"}"#);
    let output = jobcompat()
        .args(["translate-jobconf", "--hadoop-version", "2.0"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["mapred.job.tracker"], "x");
    assert_eq!(json["mapreduce.jobtracker.address"], "x");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("WARN").count(), 1);
    assert!(stderr.contains("mapred.job.tracker -> mapreduce.jobtracker.address"));
}

#[test]
fn translate_jobconf_for_all_versions() {
    let tmp = TempDir::new().unwrap();
    let path = write_jobconf(&tmp, r#"{"mapreduce.job.user.name": "dave"}"#);
    let output = jobcompat()
        .args(["--output", "json", "translate-jobconf"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["jobconf"]["user.name"], "dave");
    assert_eq!(json["renamed"], serde_json::json!({}));
}

#[test]
fn translate_jobconf_quiet_suppresses_warning() {
    let tmp = TempDir::new().unwrap();
    let path = write_jobconf(&tmp, r#"{"mapred.job.tracker": "x"}"#);
    jobcompat()
        .args(["--quiet", "translate-jobconf", "--hadoop-version", "2.0"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn translate_jobconf_invalid_json_exits_1() {
    let tmp = TempDir::new().unwrap();
    let path = write_jobconf(&tmp, "{not json");
    jobcompat()
        .args(["--output", "json", "translate-jobconf"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("\"error\""));
}

// ──────────────────────────────────────────────
// 6. version-gte and uses-yarn
// ──────────────────────────────────────────────

#[test]
fn version_gte_compares_loosely() {
    jobcompat()
        .args(["version-gte", "1.2.1", "1.2"])
        .assert()
        .success()
        .stdout("true\n");
    jobcompat()
        .args(["version-gte", "0.23", "1"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn version_gte_rejects_malformed_versions() {
    jobcompat()
        .args(["version-gte", "1..2", "1"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn uses_yarn_truth_table() {
    for (version, expected) in [
        ("0.20.2", "false\n"),
        ("0.23.0", "true\n"),
        ("1.0.3", "false\n"),
        ("2.0.0", "true\n"),
    ] {
        jobcompat()
            .args(["uses-yarn", version])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn uses_yarn_json_output() {
    jobcompat()
        .args(["--output", "json", "uses-yarn", "2.7.3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\": true"));
}
