//! End-to-end tests of the campusctl binary over the built-in dataset.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn campusctl() -> Command {
    Command::cargo_bin("campusctl").unwrap()
}

// === Items ===

#[test]
fn items_query_umbrella_returns_the_blue_umbrella() {
    campusctl()
        .args(["items", "--query", "umbrella"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Blue Umbrella [Found]"))
        .stdout(predicate::str::contains("- location: Library"));
}

#[test]
fn items_lost_filter_excludes_found_records() {
    campusctl()
        .args(["items", "--category", "lost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scientific Calculator"))
        .stdout(predicate::str::contains("Blue Umbrella").not());
}

#[test]
fn items_unmatched_query_renders_empty_state() {
    campusctl()
        .args(["items", "--query", "zeppelin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found"))
        .stdout(predicate::str::contains("Try adjusting your search or filter"));
}

#[test]
fn items_json_output_carries_badge_tokens() {
    let output = campusctl()
        .args(["items", "--query", "umbrella", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value[0]["title"], "Blue Umbrella");
    assert_eq!(value[0]["type"], "found");
    assert_eq!(value[0]["badge"], "badge-success");
}

#[test]
fn items_respect_data_dir_overrides() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("items.json"),
        r#"[{"id": 42, "title": "Red Scarf", "description": "wool", "location": "Canteen", "type": "found", "date": "2024-02-01"}]"#,
    )
    .unwrap();

    campusctl()
        .args(["items", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Red Scarf"))
        .stdout(predicate::str::contains("Blue Umbrella").not());
}

// === Notices ===

#[test]
fn notices_render_pinned_before_newer_unpinned() {
    let output = campusctl().arg("notices").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();

    let exam = text.find("Mid-Semester Examination Schedule").unwrap();
    let fest = text.find("Aavishkar 2024").unwrap();
    let hostel = text.find("Hostel Maintenance Work Notice").unwrap();

    // Both pinned notices come first, newest first, before the newer
    // unpinned hostel notice.
    assert!(exam < fest);
    assert!(fest < hostel);
}

#[test]
fn notices_category_filter_is_exact() {
    campusctl()
        .args(["notices", "--category", "placement"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Campus Placement Drive - TCS"))
        .stdout(predicate::str::contains("Hostel Maintenance").not());
}

#[test]
fn notices_unmatched_query_renders_empty_state() {
    campusctl()
        .args(["notices", "--query", "zeppelin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notices found"));
}

// === Forms ===

#[test]
fn report_with_missing_fields_fails_listing_them() {
    campusctl()
        .args(["report", "--title", "Blue Umbrella"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required fields"))
        .stderr(predicate::str::contains("type"))
        .stderr(predicate::str::contains("location"));
}

#[test]
fn complete_report_echoes_the_captured_record() {
    campusctl()
        .args([
            "report",
            "--kind",
            "found",
            "--title",
            "Blue Umbrella",
            "--description",
            "Wooden handle",
            "--location",
            "Library",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Blue Umbrella\""))
        .stdout(predicate::str::contains("\"type\": \"found\""));
}

#[test]
fn signup_echoes_record_without_password() {
    campusctl()
        .args([
            "signup",
            "--full-name",
            "John Doe",
            "--roll-no",
            "2021BCS001",
            "--email",
            "yourname@nitgoa.ac.in",
            "--password",
            "hunter2hunter2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2021BCS001"))
        .stdout(predicate::str::contains("hunter2hunter2").not());
}

#[test]
fn signup_without_fields_fails() {
    campusctl()
        .arg("signup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required fields"));
}

// === Plumbing ===

#[test]
fn completions_generate_for_bash() {
    campusctl()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("campusctl"));
}

#[test]
fn explicit_missing_config_file_is_an_error() {
    campusctl()
        .args(["items", "--config", "/nonexistent/campusctl.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn config_file_sets_default_format() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "format = \"json\"\npretty_json_indent = 0\n").unwrap();

    let output = campusctl()
        .args(["items", "--query", "umbrella", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value[0]["title"], "Blue Umbrella");
}
