use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn audit_cmd(root: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("token-audit"));
    cmd.env_remove("TOKEN_AUDIT_ROOT")
        .env_remove("RUST_LOG")
        .arg("--root")
        .arg(root)
        .arg("--no-color");
    cmd
}

fn read_record(path: &Path) -> Vec<(String, u64)> {
    let value: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    value
        .as_array()
        .expect("record is a JSON array")
        .iter()
        .map(|entry| {
            let obj = entry.as_object().expect("entry is an object");
            assert_eq!(obj.len(), 2, "entry has exactly token and count");
            (
                obj["token"].as_str().unwrap().to_string(),
                obj["count"].as_u64().unwrap(),
            )
        })
        .collect()
}

#[test]
fn audit_counts_tokens_and_writes_record() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("samples/B.txt"),
        b"\x1b[31merror\x1b[0m: error code 42\n",
    );

    let assert = audit_cmd(temp.path()).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    assert!(stdout.starts_with(
        "Extracting tokens from B.txt...\n\nFound 3 unique tokens\n\n   2x  error\n   1x  42\n   1x  code\n"
    ));
    assert!(stdout.contains("Full token list written to "));
    assert!(stdout.trim_end().ends_with("tokens-audit.json"));

    let record = read_record(&temp.path().join("samples/tokens-audit.json"));
    assert_eq!(
        record,
        vec![
            ("error".to_string(), 2),
            ("42".to_string(), 1),
            ("code".to_string(), 1)
        ]
    );
}

#[test]
fn audit_record_is_indented_json() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("samples/B.txt"), b"alpha beta alpha");

    audit_cmd(temp.path()).assert().success();

    let json = fs::read_to_string(temp.path().join("samples/tokens-audit.json")).unwrap();
    assert_eq!(
        json,
        "[\n  {\n    \"token\": \"alpha\",\n    \"count\": 2\n  },\n  {\n    \"token\": \"beta\",\n    \"count\": 1\n  }\n]"
    );
}

#[test]
fn missing_samples_directory_exits_with_error() {
    let temp = tempdir().unwrap();

    audit_cmd(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("samples directory not found at"));

    assert!(!temp.path().join("samples").exists());
}

#[test]
fn missing_input_file_exits_with_error() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("samples/A.txt"), b"not the audited sample");

    audit_cmd(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("B.txt not found"));

    assert!(!temp.path().join("samples/tokens-audit.json").exists());
}

#[test]
fn audit_is_idempotent() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("samples/B.txt"),
        b"\x1b[1;32mPASS\x1b[0m test_a\n\x1b[31mFAIL\x1b[0m test_b\nPASS test_c\n",
    );
    let record_path = temp.path().join("samples/tokens-audit.json");

    let first = audit_cmd(temp.path()).assert().success();
    let first_stdout = first.get_output().stdout.clone();
    let first_record = fs::read(&record_path).unwrap();

    let second = audit_cmd(temp.path()).assert().success();
    assert_eq!(first_stdout, second.get_output().stdout);
    assert_eq!(first_record, fs::read(&record_path).unwrap());
}

#[test]
fn invalid_utf8_is_replaced_not_fatal() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("samples/B.txt"),
        b"boot\xff\xfeok boot\n",
    );

    audit_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("   2x  boot\n"))
        .stdout(predicate::str::contains("   1x  ok\n"))
        .stderr(predicate::str::contains("invalid UTF-8 replaced"));
}

#[test]
fn unicode_tokens_follow_letter_and_number_classes() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("samples/B.txt"),
        "caf\u{e9} caf\u{e9} x\u{b2} a\u{203F}b e\u{301}\n".as_bytes(),
    );

    audit_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 5 unique tokens"))
        .stdout(predicate::str::contains("   2x  caf\u{e9}\n"))
        .stdout(predicate::str::contains("   1x  x\u{b2}\n"));

    let record_path = temp.path().join("samples/tokens-audit.json");
    let raw = fs::read_to_string(&record_path).unwrap();
    assert!(raw.is_ascii(), "record should be ASCII-escaped: {}", raw);
    assert!(raw.contains(r#""token": "caf\u00e9""#));
    assert!(raw.contains(r#""token": "x\u00b2""#));

    assert_eq!(
        read_record(&record_path),
        vec![
            ("caf\u{e9}".to_string(), 2),
            ("a".to_string(), 1),
            ("b".to_string(), 1),
            ("e".to_string(), 1),
            ("x\u{b2}".to_string(), 1),
        ]
    );
}

#[test]
fn root_can_come_from_environment() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("samples/B.txt"), b"env root");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("token-audit"));
    cmd.env("TOKEN_AUDIT_ROOT", temp.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 unique tokens"));

    assert!(temp.path().join("samples/tokens-audit.json").exists());
}

#[test]
fn verbose_logs_to_stderr_only() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("samples/B.txt"), b"quiet stdout");

    let assert = audit_cmd(temp.path()).arg("--verbose").assert().success();
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stderr.contains("aggregated tokens"));
    assert!(!stdout.contains("aggregated tokens"));
}

#[test]
fn unexpected_arguments_are_rejected() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("samples/B.txt"), b"x");

    audit_cmd(temp.path()).arg("other.txt").assert().failure();
    assert!(!temp.path().join("samples/tokens-audit.json").exists());
}
