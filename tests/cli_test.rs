use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const MOCK_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/mock-data.json");

fn fauna() -> Command {
    let mut cmd = Command::cargo_bin("fauna").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_command_exits_with_error() {
    fauna()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Command unknown"));
}

#[test]
fn test_filter_prints_json() {
    let output = fauna()
        .args(["--data", MOCK_DATA, "--filter=Bull"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "name": "Satanwi",
            "code": "SW",
            "people": [{ "name": "Anthony Bruno", "animals": [{ "name": "Bulldog", "legs": 4 }] }]
        }])
    );
}

#[test]
fn test_count_with_data_after_command_flag() {
    fauna()
        .args(["--count", "--data", MOCK_DATA, "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Dillauti [2]\""))
        .stdout(predicate::str::contains("\"name\": \"Empty [0]\""));
}

#[test]
fn test_filter_with_data_after_command_flag() {
    fauna()
        .args(["--filter=Bull", "--data", MOCK_DATA])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bulldog"))
        .stdout(predicate::str::contains("Satanwi"));
}

#[test]
fn test_dataset_path_is_not_scanned_for_commands() {
    let dir = tempfile::tempdir().unwrap();
    let runs = dir.path().join("runs--count");
    std::fs::create_dir(&runs).unwrap();
    let data = runs.join("data.json");
    std::fs::copy(MOCK_DATA, &data).unwrap();

    fauna()
        .arg("--data")
        .arg(&data)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Command unknown"));
}

#[test]
fn test_embedded_dataset_by_default() {
    fauna()
        .arg("--filter=Dogfish")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dogfish"))
        .stdout(predicate::str::contains("Bongo").not());
}

#[test]
fn test_config_file_selects_dataset() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[dataset]\npath = \"{}\"", MOCK_DATA.replace('\\', "/")).unwrap();

    fauna()
        .arg("--config")
        .arg(config.path())
        .arg("--filter=og")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hedgehog"));
}

#[test]
fn test_missing_dataset_exits_with_critical_code() {
    fauna()
        .args(["--data", "no/such/file.json", "--count"])
        .assert()
        .failure()
        .code(3);
}
