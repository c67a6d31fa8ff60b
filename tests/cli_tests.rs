// End-to-end CLI tests driving the compiled binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn workflow_processor() -> Command {
    Command::cargo_bin("workflow-processor").expect("binary should build")
}

#[test]
fn test_missing_required_arguments_fail() {
    workflow_processor()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_missing_environment_fails() {
    let work_dir = common::setup_work_dir();
    workflow_processor()
        .args(["--work-dir", work_dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--environment"));
}

#[test]
fn test_unknown_environment_is_rejected() {
    let work_dir = common::setup_work_dir();
    workflow_processor()
        .args([
            "--work-dir",
            work_dir.path().to_str().unwrap(),
            "--environment",
            "STAGING",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_help_lists_arguments() {
    workflow_processor()
        .args(["--lang", "en", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--work-dir"))
        .stdout(predicate::str::contains("--environment"))
        .stdout(predicate::str::contains("--output-dir"));
}

#[cfg(unix)]
#[test]
fn test_full_run_with_stubbed_catalog() {
    let work_dir = common::setup_work_dir();
    let bin_dir = common::install_stub_tso(work_dir.path(), common::STUB_TSO_CATALOG);

    workflow_processor()
        .env("PATH", common::path_with(&bin_dir))
        .args([
            "--lang",
            "en",
            "--work-dir",
            work_dir.path().to_str().unwrap(),
            "--environment",
            "TEST",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "SUCCESS: Workflow data processing completed",
        ))
        .stdout(predicate::str::contains("Found 2 datasets"));

    let report = read_json_report(work_dir.path());
    assert_eq!(report["summary"]["total_datasets"], 2);
    assert_eq!(report["summary"]["processing_success"], true);
    assert_eq!(report["summary"]["environment"], "TEST");
    assert_eq!(report["workflow_info"]["version"], "2.0.0");
    assert_eq!(
        report["datasets_analysis"][0]["name"],
        "USER.TEST.DATA"
    );
    assert_eq!(
        report["datasets_analysis"][0]["attributes"]["record_length"],
        "80"
    );
    assert_eq!(
        report["processing_result"]["steps_completed"],
        serde_json::json!([
            "test_validation",
            "test_performance_check",
            "common_processing"
        ])
    );

    // Sibling text report and the updated status file.
    assert!(find_output_file(work_dir.path(), "processing_summary_").is_some());
    let status = std::fs::read_to_string(
        work_dir.path().join("config").join("workflow_status.conf"),
    )
    .unwrap();
    assert!(status.contains("STATUS=SUCCESS"));
    assert!(status.contains("ENVIRONMENT=TEST"));
}

// A catalog command that fails must degrade to an empty dataset list, not
// fail the run.
#[cfg(unix)]
#[test]
fn test_failing_catalog_command_degrades_to_empty_listing() {
    let work_dir = common::setup_work_dir();
    let bin_dir = common::install_stub_tso(work_dir.path(), "exit 8\n");

    workflow_processor()
        .env("PATH", common::path_with(&bin_dir))
        .args([
            "--lang",
            "en",
            "--work-dir",
            work_dir.path().to_str().unwrap(),
            "--environment",
            "DEV",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 datasets"))
        .stdout(predicate::str::contains(
            "SUCCESS: Workflow data processing completed",
        ));

    let report = read_json_report(work_dir.path());
    assert_eq!(report["summary"]["total_datasets"], 0);
    assert_eq!(report["summary"]["processing_success"], true);
}

#[cfg(unix)]
#[test]
fn test_custom_output_directory_is_honored() {
    let work_dir = common::setup_work_dir();
    let bin_dir = common::install_stub_tso(work_dir.path(), common::STUB_TSO_CATALOG);
    let output_dir = work_dir.path().join("custom-reports");

    workflow_processor()
        .env("PATH", common::path_with(&bin_dir))
        .args([
            "--lang",
            "en",
            "--work-dir",
            work_dir.path().to_str().unwrap(),
            "--environment",
            "PROD",
            "--output-dir",
            output_dir.to_str().unwrap(),
        ])
        .assert()
        .success();

    let json = find_file(&output_dir, "processing_report_").expect("JSON report in custom dir");
    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(json).unwrap()).unwrap();
    assert_eq!(report["summary"]["environment"], "PROD");
    assert_eq!(report["summary"]["steps_completed"], 4);
}

fn find_file(dir: &std::path::Path, prefix: &str) -> Option<std::path::PathBuf> {
    std::fs::read_dir(dir).ok()?.flatten().find_map(|entry| {
        let name = entry.file_name();
        name.to_str()
            .is_some_and(|n| n.starts_with(prefix))
            .then(|| entry.path())
    })
}

fn find_output_file(work_dir: &std::path::Path, prefix: &str) -> Option<std::path::PathBuf> {
    find_file(&work_dir.join("output"), prefix)
}

fn read_json_report(work_dir: &std::path::Path) -> serde_json::Value {
    let path = find_output_file(work_dir, "processing_report_").expect("JSON report written");
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).expect("report parses")
}
