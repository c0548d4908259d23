use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

const BOOK: &str = r#"{
  "persons": [
    {
      "name": "Alice Pauline",
      "phone": "94351253",
      "email": "alice@example.com",
      "address": "123, Jurong West Ave 6",
      "tags": [{ "name": "math" }, { "kind": "child", "name": "algebra" }]
    },
    {
      "name": "Benson Meier",
      "phone": "98765432",
      "email": "johnd@example.com",
      "address": "311, Clementi Ave 2",
      "tags": [{ "name": "science" }]
    },
    {
      "name": "Carl Kurz",
      "phone": "95352563",
      "email": "heinz@example.com",
      "address": "wall street"
    }
  ],
  "appointments": [
    { "name": "Math Lesson", "start": "2024-03-01T16:00:00", "duration_minutes": 60 },
    { "name": "Science Revision", "start": "2024-03-02T10:00:00" }
  ]
}"#;

fn setup() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("addressbook.json");
    fs::write(&data_path, BOOK).expect("write data");
    (temp, data_path)
}

fn run(temp: &TempDir, data_path: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let mut cmd = cargo_bin_cmd!("apptbook");
    cmd.env("XDG_CONFIG_HOME", temp.path())
        .args(["--data-path", data_path.to_str().expect("data path")])
        .args(args);
    if let Some(input) = stdin {
        cmd.write_stdin(input);
    }
    cmd.output().expect("run command")
}

fn run_json(temp: &TempDir, data_path: &Path, args: &[&str]) -> Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let output = run(temp, data_path, &full, None);
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn find_by_tag_lists_matching_persons() {
    let (temp, data_path) = setup();
    let value = run_json(&temp, &data_path, &["find", "o/t", "t/math", "t/science"]);
    assert_eq!(value["message"], "2 persons listed!");
    let persons = value["persons"].as_array().expect("array");
    assert_eq!(persons.len(), 2);
    assert_eq!(persons[0]["name"], "Alice Pauline");
    assert_eq!(persons[0]["tags"][0]["name"], "algebra");
    assert_eq!(persons[0]["tags"][0]["kind"], "child");
}

#[test]
fn find_all_fields_in_text_mode() {
    let (temp, data_path) = setup();
    let output = run(&temp, &data_path, &["find", "street", "benson"], None);
    assert!(output.status.success(), "command failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.starts_with("2 persons listed!\n"));
    assert!(stdout.contains("1. Benson Meier [science]"));
    assert!(stdout.contains("2. Carl Kurz"));
}

#[test]
fn find_appointments_by_name() {
    let (temp, data_path) = setup();
    let value = run_json(&temp, &data_path, &["find-appt", "o/n", "n/math", "lesson"]);
    assert_eq!(value["message"], "1 appointments listed!");
    assert_eq!(value["appointments"][0]["name"], "Math Lesson");
}

#[test]
fn malformed_find_exits_with_invalid_input() {
    let (temp, data_path) = setup();
    for args in [vec!["find"], vec!["find", "o/x", "alice"], vec!["find", "o/n"]] {
        let output = run(&temp, &data_path, &args, None);
        assert_eq!(output.status.code(), Some(3), "{:?}", args);
        let stderr = String::from_utf8(output.stderr).expect("utf8");
        assert!(stderr.contains("Invalid command format!"), "{stderr}");
    }
}

#[test]
fn shell_keeps_going_after_errors() {
    let (temp, data_path) = setup();
    let output = run(
        &temp,
        &data_path,
        &["shell"],
        Some("find o/x alice\nfind o/n alice\nlist\nexit\nfind carl\n"),
    );
    assert!(output.status.success(), "command failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("1 persons listed!"));
    assert!(stdout.contains("Listed all persons"));
    assert!(stdout.contains("Exiting address book as requested ..."));
    assert_eq!(stdout.matches("persons listed!").count(), 1);
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("Invalid command format!"));
}

#[test]
fn missing_data_file_is_empty_book() {
    let temp = TempDir::new().expect("temp dir");
    let data_path = temp.path().join("missing.json");
    let value = run_json(&temp, &data_path, &["list"]);
    assert_eq!(value["message"], "Listed all persons");
    assert_eq!(value["persons"].as_array().expect("array").len(), 0);
}
