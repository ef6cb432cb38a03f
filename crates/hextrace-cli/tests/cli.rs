use std::fs;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("hextrace"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn golden_dir(name: &str) -> std::path::PathBuf {
    repo_root().join("tests").join("golden").join(name)
}

fn sample_capture() -> std::path::PathBuf {
    golden_dir("sample").join("input.txt")
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("decode").and(contains("schema")));
    cmd().arg("decode").arg("--help").assert().success();
    cmd().arg("schema").arg("check").arg("--help").assert().success();
}

#[test]
fn long_version_includes_build_info() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("commit:").and(contains("built:")));
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.txt");

    cmd()
        .arg("decode")
        .arg(missing)
        .assert()
        .code(2)
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn default_input_is_stream_txt() {
    let temp = TempDir::new().expect("tempdir");
    fs::copy(sample_capture(), temp.path().join("stream.txt")).expect("copy capture");

    cmd()
        .current_dir(temp.path())
        .arg("decode")
        .assert()
        .success()
        .stdout(contains("14 bytes").and(contains("test_int8_t_string = -128")));
}

#[test]
fn decode_sample_matches_golden_trace() {
    let expected = fs::read_to_string(golden_dir("sample").join("expected_trace.txt"))
        .expect("read expected trace");
    let assert = cmd()
        .arg("decode")
        .arg(sample_capture())
        .arg("--quiet")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    assert_eq!(stdout, normalize_newlines(&expected));
}

#[test]
fn decode_with_schema_file() {
    let dir = golden_dir("nested");
    cmd()
        .arg("decode")
        .arg(dir.join("input.txt"))
        .arg("--schema")
        .arg(dir.join("schema.json"))
        .assert()
        .success()
        .stdout(
            contains("28 bytes")
                .and(contains("corners = Point[2]"))
                .and(contains("checksum = 72623859790382856")),
        );
}

#[test]
fn show_hex_prints_cleaned_digits() {
    cmd()
        .arg("decode")
        .arg(sample_capture())
        .arg("--show-hex")
        .assert()
        .success()
        .stdout(contains("0000002afffffffe12348000ff80"));
}

#[test]
fn json_outputs_trace() {
    let assert = cmd()
        .arg("decode")
        .arg(sample_capture())
        .arg("--json")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["format_version"], 1);
    assert_eq!(value["consumed_bytes"], 14);
    assert_eq!(value["fields"][0]["name"], "test_uint32_t_string");
    assert_eq!(value["fields"][0]["value"], 42);
}

#[test]
fn pretty_requires_json() {
    cmd()
        .arg("decode")
        .arg(sample_capture())
        .arg("--pretty")
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn pretty_json_is_multiline() {
    let assert = cmd()
        .arg("decode")
        .arg(sample_capture())
        .arg("--json")
        .arg("--pretty")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    assert!(stdout.lines().count() > 1);
    let _: Value = serde_json::from_str(&stdout).expect("valid json");
}

#[test]
fn quiet_suppresses_byte_count() {
    cmd()
        .arg("decode")
        .arg(sample_capture())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(contains("bytes").not());
}

#[test]
fn strict_fails_on_trailing_bytes() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("long.txt");
    let mut text = fs::read_to_string(sample_capture()).expect("read capture");
    text.push_str("\nAA BB\n");
    fs::write(&input, text).expect("write capture");

    cmd().arg("decode").arg(&input).assert().success();
    cmd()
        .arg("decode")
        .arg(&input)
        .arg("--strict")
        .assert()
        .code(2)
        .stdout(contains("test_int8_t_string = -128"))
        .stderr(contains("2 trailing bytes").and(contains("hint:")));
}

#[test]
fn strict_passes_when_fully_consumed() {
    cmd()
        .arg("decode")
        .arg(sample_capture())
        .arg("--strict")
        .assert()
        .success();
}

#[test]
fn short_capture_reports_field() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("short.txt");
    fs::write(&input, "0000002A FFFF").expect("write capture");

    cmd()
        .arg("decode")
        .arg(&input)
        .assert()
        .code(2)
        .stderr(contains("test_int32_t_string").and(contains("hint:")));
}

#[test]
fn malformed_hex_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("odd.txt");
    fs::write(&input, "ABC").expect("write capture");

    cmd()
        .arg("decode")
        .arg(&input)
        .assert()
        .code(2)
        .stderr(contains("malformed hex").and(contains("hint:")));
}

#[test]
fn glob_resolves_single_match() {
    let temp = TempDir::new().expect("tempdir");
    fs::copy(sample_capture(), temp.path().join("capture.txt")).expect("copy capture");
    let pattern = temp.path().join("*.txt");

    cmd()
        .arg("decode")
        .arg(pattern)
        .assert()
        .success()
        .stdout(contains("14 bytes"));
}

#[test]
fn glob_multiple_matches_fail() {
    let temp = TempDir::new().expect("tempdir");
    fs::copy(sample_capture(), temp.path().join("a.txt")).expect("copy capture");
    fs::copy(sample_capture(), temp.path().join("b.txt")).expect("copy capture");
    let pattern = temp.path().join("*.txt");

    cmd()
        .arg("decode")
        .arg(pattern)
        .assert()
        .code(2)
        .stderr(contains("multiple files match").and(contains("hint:")));
}

#[test]
fn glob_without_matches_fails() {
    let temp = TempDir::new().expect("tempdir");
    let pattern = temp.path().join("*.txt");

    cmd()
        .arg("decode")
        .arg(pattern)
        .assert()
        .code(2)
        .stderr(contains("no files match"));
}

#[test]
fn schema_sample_round_trips_through_check() {
    let assert = cmd().arg("schema").arg("sample").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["entries"][0], "Test");

    let temp = TempDir::new().expect("tempdir");
    let schema = temp.path().join("sample.json");
    fs::write(&schema, stdout).expect("write schema");

    cmd()
        .arg("schema")
        .arg("check")
        .arg(&schema)
        .assert()
        .success()
        .stdout(contains("OK:").and(contains("6 fields")));

    cmd()
        .arg("decode")
        .arg(sample_capture())
        .arg("--schema")
        .arg(&schema)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(contains("test_uint32_t_string = 42"));
}

#[test]
fn schema_check_reports_unknown_type() {
    let temp = TempDir::new().expect("tempdir");
    let schema = temp.path().join("bad.json");
    fs::write(
        &schema,
        r#"{ "types": [], "entries": [ { "name": "x", "type": "Missing" } ] }"#,
    )
    .expect("write schema");

    cmd()
        .arg("schema")
        .arg("check")
        .arg(&schema)
        .assert()
        .code(2)
        .stderr(contains("invalid schema").and(contains("Missing")));
}

#[test]
fn schema_check_reports_contradictory_vector() {
    let temp = TempDir::new().expect("tempdir");
    let schema = temp.path().join("vector.json");
    fs::write(
        &schema,
        r#"{
  "types": [ { "kind": "vector", "name": "Both", "element": "uint8_t", "prefix": 1, "count": 2 } ],
  "entries": [ { "name": "v", "type": "Both" } ]
}"#,
    )
    .expect("write schema");

    cmd()
        .arg("schema")
        .arg("check")
        .arg(&schema)
        .assert()
        .code(2)
        .stderr(contains("invalid schema").and(contains("hint:")));
}

#[test]
fn verbose_logs_to_stderr() {
    cmd()
        .arg("decode")
        .arg(sample_capture())
        .arg("-v")
        .assert()
        .success()
        .stderr(contains("decoded primitive"));
}
