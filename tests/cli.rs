use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn voyage(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("voyage").unwrap();
    cmd.env("VOYAGE_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_then_list_and_summary() {
    let dir = TempDir::new().unwrap();

    voyage(&dir)
        .args([
            "trip", "add", "Lake Day", "-t", "day", "-d", "2025-07-01", "--transport", "20",
            "--food", "15.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created trip: Lake Day"))
        .stdout(predicate::str::contains("$35.50"));

    voyage(&dir)
        .args(["trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lake Day"));

    voyage(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Grand Total: $35.50"))
        .stdout(predicate::str::contains("Trips:     1"));

    assert!(dir.path().join("data").join("voyage_trips.json").exists());
}

#[test]
fn settings_currency_changes_symbol() {
    let dir = TempDir::new().unwrap();

    voyage(&dir)
        .args(["settings", "set", "--currency", "EUR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€"));

    voyage(&dir)
        .args(["trip", "add", "Museum", "--other", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€12.00"));
}

#[test]
fn export_csv_writes_header() {
    let dir = TempDir::new().unwrap();

    voyage(&dir)
        .args(["trip", "add", "Coast, north", "-t", "road", "-d", "2025-08-10"])
        .assert()
        .success();

    voyage(&dir)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ID,Name,Type,Date,Status"))
        .stdout(predicate::str::contains("\"Coast, north\""));
}

#[test]
fn corrupt_records_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("voyage_trips.json"), "{not json").unwrap();
    std::fs::write(data.join("voyage_settings.json"), "true").unwrap();

    voyage(&dir)
        .args(["trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No trips found."));
}

#[test]
fn deleting_unknown_trip_fails() {
    let dir = TempDir::new().unwrap();

    voyage(&dir)
        .args(["trip", "delete", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn empty_name_is_rejected() {
    let dir = TempDir::new().unwrap();

    voyage(&dir)
        .args(["trip", "add", "   "])
        .assert()
        .failure();

    voyage(&dir)
        .args(["trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No trips found."));
}
