use assert_cmd::Command;
use serde_json::Value;

fn shelf() -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env_remove("SHELF_ENV").env("RUST_LOG", "off");
    cmd
}

#[test]
fn validate_accepts_book_from_stdin() {
    let output = shelf()
        .arg("validate")
        .write_stdin(r#"{"id": 1, "name": "Dune", "extra": true}"#)
        .output()
        .unwrap();

    assert!(output.status.success());
    let record: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record, serde_json::json!({"id": 1, "name": "Dune"}));
}

#[test]
fn validate_reports_violations_and_fails() {
    let output = shelf()
        .arg("validate")
        .write_stdin(r#"{"id": "1"}"#)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let violations: Value = serde_json::from_slice(&output.stdout).unwrap();
    let fields: Vec<&str> = violations
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["id", "name"]);
}

#[test]
fn validate_reads_file_argument() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    std::fs::write(&path, r#"{"id": 9, "name": "Emma"}"#).unwrap();

    shelf().arg("validate").arg(&path).assert().success();
}

#[test]
fn validate_rejects_malformed_json() {
    shelf()
        .arg("validate")
        .write_stdin("{not json")
        .assert()
        .code(2);
}

#[test]
fn parse_id_prints_integer() {
    let output = shelf().args(["parse-id", "-42"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), "-42");
}

#[test]
fn parse_id_rejects_non_integer() {
    let output = shelf().args(["parse-id", "abc"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("id must be an integer"));
}
