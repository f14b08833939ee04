use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::NamedTempFile;

fn answers_file(value: serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(value.to_string().as_bytes())
        .expect("write answers");
    file
}

fn valid_health_answers() -> serde_json::Value {
    json!({
        "fullName": "Ann",
        "email": "a@b.co",
        "surveyTopic": "Health",
        "healthSection": {
            "exerciseFrequency": "Daily",
            "dietPreference": "Vegan",
        },
        "feedback": "x".repeat(60),
    })
}

#[test]
fn schema_prints_the_submission_document_schema() {
    Command::cargo_bin("survey-form")
        .expect("binary builds")
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("fullName"))
        .stdout(predicate::str::contains("techSection"));
}

#[test]
fn questions_lists_the_topic_follow_ups() {
    Command::cargo_bin("survey-form")
        .expect("binary builds")
        .args(["questions", "--topic", "Health"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "What motivates you to stay active?",
        ));
}

#[test]
fn questions_rejects_unknown_topics() {
    Command::cargo_bin("survey-form")
        .expect("binary builds")
        .args(["questions", "--topic", "Sports"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized topic"));
}

#[test]
fn render_previews_a_valid_submission() {
    let file = answers_file(valid_health_answers());
    Command::cargo_bin("survey-form")
        .expect("binary builds")
        .args(["render", "--answers"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary of Entered Data:"))
        .stdout(predicate::str::contains("Exercise Frequency: Daily"));
}

#[test]
fn render_reports_validation_errors() {
    let file = answers_file(json!({}));
    Command::cargo_bin("survey-form")
        .expect("binary builds")
        .args(["render", "--answers"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("fullName: Full Name is required"))
        .stderr(predicate::str::contains("validation failed"));
}

#[test]
fn submit_dry_run_renders_without_persisting() {
    let file = answers_file(valid_health_answers());
    Command::cargo_bin("survey-form")
        .expect("binary builds")
        .args(["submit", "--dry-run", "--answers"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary of Entered Data:"))
        .stdout(predicate::str::contains("dry run: submission not persisted"));
}

#[test]
fn submit_without_a_store_url_fails_cleanly() {
    let file = answers_file(valid_health_answers());
    Command::cargo_bin("survey-form")
        .expect("binary builds")
        .env_remove("SURVEY_STORE_URL")
        .args(["submit", "--answers"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no store URL"));
}
