use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_file_path(prefix: &str) -> PathBuf {
    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("diffx-{prefix}-{nonce}.json"))
}

#[test]
fn diffx_cli_prints_native_report_for_changed_files() {
    let left = temp_file_path("left-native");
    let right = temp_file_path("right-native");
    fs::write(&left, r#"{"host": "old"}"#).expect("write left");
    fs::write(&right, r#"{"host": "new"}"#).expect("write right");

    let output = Command::new(env!("CARGO_BIN_EXE_diffx"))
        .arg(&left)
        .arg(&right)
        .output()
        .expect("run diffx");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("host"));
    assert!(stdout.contains("old"));
    assert!(stdout.contains("new"));
}

#[test]
fn diffx_cli_emits_json_output() {
    let left = temp_file_path("left-json");
    let right = temp_file_path("right-json");
    fs::write(&left, r#"{"host": "old"}"#).expect("write left");
    fs::write(&right, r#"{"host": "new"}"#).expect("write right");

    let output = Command::new(env!("CARGO_BIN_EXE_diffx"))
        .arg("--format")
        .arg("json")
        .arg(&left)
        .arg(&right)
        .output()
        .expect("run diffx --format json");

    assert!(output.status.success());
    let results: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid diff json");
    let entries = results.as_array().expect("json array of differences");
    assert!(entries.iter().any(|entry| entry["path"] == "host"));
}

#[test]
fn diffx_cli_fails_for_missing_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_diffx"))
        .arg("/definitely/missing-left.json")
        .arg("/definitely/missing-right.json")
        .output()
        .expect("run diffx");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("diffx:"));
}

#[test]
fn diffx_cli_brief_mode_reports_equal_and_differ() {
    let same_left = temp_file_path("left-brief-equal");
    let same_right = temp_file_path("right-brief-equal");
    fs::write(&same_left, r#"{"host": "same"}"#).expect("write left");
    fs::write(&same_right, r#"{"host": "same"}"#).expect("write right");

    let equal_output = Command::new(env!("CARGO_BIN_EXE_diffx"))
        .arg("--brief")
        .arg(&same_left)
        .arg(&same_right)
        .output()
        .expect("run diffx --brief (equal)");
    assert!(equal_output.status.success());
    assert_eq!(String::from_utf8_lossy(&equal_output.stdout), "equal\n");

    let diff_left = temp_file_path("left-brief-differ");
    let diff_right = temp_file_path("right-brief-differ");
    fs::write(&diff_left, r#"{"host": "old"}"#).expect("write left");
    fs::write(&diff_right, r#"{"host": "new"}"#).expect("write right");

    let differ_output = Command::new(env!("CARGO_BIN_EXE_diffx"))
        .arg("--brief")
        .arg(&diff_left)
        .arg(&diff_right)
        .output()
        .expect("run diffx --brief (differ)");
    assert!(differ_output.status.success());
    assert_eq!(String::from_utf8_lossy(&differ_output.stdout), "differ\n");
}

#[test]
fn diffx_cli_quiet_mode_suppresses_stdout() {
    let left = temp_file_path("left-quiet");
    let right = temp_file_path("right-quiet");
    fs::write(&left, r#"{"host": "old"}"#).expect("write left");
    fs::write(&right, r#"{"host": "new"}"#).expect("write right");

    let output = Command::new(env!("CARGO_BIN_EXE_diffx"))
        .arg("--quiet")
        .arg(&left)
        .arg(&right)
        .output()
        .expect("run diffx --quiet");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}
