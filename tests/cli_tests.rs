mod common;
use common::{init_with_data, rov, run_ok, setup_data_dir, temp_out_dir};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;

fn entries_json(data_dir: &str) -> serde_json::Value {
    let raw = fs::read_to_string(Path::new(data_dir).join("overtime_data.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_init_creates_data_files() {
    let dir = setup_data_dir("cli_init");

    rov()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(Path::new(&dir).join("salary_data.json").exists());
    assert_eq!(entries_json(&dir), serde_json::json!([]));
}

#[test]
fn test_salary_set_and_show() {
    let dir = setup_data_dir("cli_salary");
    run_ok(&dir, &["--test", "init"]);

    rov()
        .args(["--data-dir", &dir, "salary", "3000"])
        .assert()
        .success()
        .stdout(contains("Salary set to 3000.00"))
        .stdout(contains("Hourly Rate"));

    rov()
        .args(["--data-dir", &dir, "salary"])
        .assert()
        .success()
        .stdout(contains("Salary: 3000.00"));

    rov()
        .args(["--data-dir", &dir, "salary", "lots"])
        .assert()
        .failure()
        .stderr(contains("Invalid salary"));
}

#[test]
fn test_add_and_list_in_date_order() {
    let dir = setup_data_dir("cli_list");
    init_with_data(&dir);

    let out = rov()
        .args(["--data-dir", &dir, "list"])
        .assert()
        .success()
        .stdout(contains("Hours = 8"))
        .stdout(contains("Overtime Rate: x1"))
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&out);
    let hotfix = text.find("Hotfix").unwrap();
    let deploy = text.find("Release deploy").unwrap();
    assert!(hotfix < deploy, "entries not listed in date order:\n{text}");

    let v = entries_json(&dir);
    assert_eq!(v[0]["date"], "01-02-2024");
    assert_eq!(v[1]["task"], "Release deploy");
}

#[test]
fn test_add_rejects_bad_hours() {
    let dir = setup_data_dir("cli_bad_hours");
    run_ok(&dir, &["--test", "init"]);

    for hours in ["0", "-2", "abc"] {
        rov()
            .args(["--data-dir", &dir, "add", hours, "Task", "--date", "01-01-2024"])
            .assert()
            .failure()
            .stderr(contains("Invalid hours"))
            .stderr(contains("Please enter"));
    }

    assert_eq!(entries_json(&dir), serde_json::json!([]));
}

#[test]
fn test_add_rejects_empty_task_and_bad_date() {
    let dir = setup_data_dir("cli_bad_add");
    run_ok(&dir, &["--test", "init"]);

    rov()
        .args(["--data-dir", &dir, "add", "2", "   ", "--date", "01-01-2024"])
        .assert()
        .failure()
        .stderr(contains("Task description must not be empty"));

    rov()
        .args(["--data-dir", &dir, "add", "2", "Task", "--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    assert_eq!(entries_json(&dir), serde_json::json!([]));
}

#[test]
fn test_edit_bad_date_keeps_file() {
    let dir = setup_data_dir("cli_edit_bad");
    init_with_data(&dir);
    let before = entries_json(&dir);

    rov()
        .args(["--data-dir", &dir, "edit", "1", "--date", "31-02-2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    assert_eq!(entries_json(&dir), before);
}

#[test]
fn test_edit_requires_exactly_one_field() {
    let dir = setup_data_dir("cli_edit_fields");
    init_with_data(&dir);

    rov()
        .args(["--data-dir", &dir, "edit", "1", "--hours", "2", "--task", "x"])
        .assert()
        .failure();

    rov()
        .args(["--data-dir", &dir, "edit", "1"])
        .assert()
        .failure();
}

#[test]
fn test_edit_date_moves_entry() {
    let dir = setup_data_dir("cli_edit_date");
    init_with_data(&dir);

    rov()
        .args(["--data-dir", &dir, "edit", "1", "--date", "20-02-2024"])
        .assert()
        .success()
        .stdout(contains("now listed as #2"));

    let v = entries_json(&dir);
    assert_eq!(v[0]["task"], "Release deploy");
    assert_eq!(v[1]["task"], "Hotfix");
    assert_eq!(v[1]["date"], "20-02-2024");
}

#[test]
fn test_del_entry() {
    let dir = setup_data_dir("cli_del");
    init_with_data(&dir);

    rov()
        .args(["--data-dir", &dir, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Entry #1 has been deleted."));

    let v = entries_json(&dir);
    assert_eq!(v.as_array().map(Vec::len), Some(1));
    assert_eq!(v[0]["task"], "Release deploy");

    rov()
        .args(["--data-dir", &dir, "del", "9", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No entry at position 9"));
}

#[test]
fn test_reset_clears_everything() {
    let dir = setup_data_dir("cli_reset");
    init_with_data(&dir);

    run_ok(&dir, &["reset", "--yes"]);

    let raw = fs::read_to_string(Path::new(&dir).join("salary_data.json")).unwrap();
    let salary: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(salary["salary"].as_f64(), Some(0.0));
    assert_eq!(entries_json(&dir), serde_json::json!([]));
}

#[test]
fn test_report_without_entries_fails() {
    let dir = setup_data_dir("cli_report_empty");
    let out = temp_out_dir("cli_report_empty");
    run_ok(&dir, &["--test", "init"]);

    rov()
        .args(["--data-dir", &dir, "report", "--format", "csv", "--dir"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("no overtime entries"));

    assert!(!out.exists());
}

#[test]
fn test_report_writes_file() {
    let dir = setup_data_dir("cli_report");
    let out = temp_out_dir("cli_report");
    init_with_data(&dir);

    rov()
        .args(["--data-dir", &dir, "report", "--format", "csv", "--force", "--dir"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let files: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("overtime-report-"));
    assert!(files[0].ends_with(".csv"));
}

#[test]
fn test_log_records_operations() {
    let dir = setup_data_dir("cli_log");
    init_with_data(&dir);

    rov()
        .args(["--data-dir", &dir, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add"))
        .stdout(contains("salary"))
        .stdout(contains("Release deploy"));
}

#[test]
fn test_rates_with_multiplier() {
    let dir = setup_data_dir("cli_rates");
    init_with_data(&dir);

    rov()
        .args(["--data-dir", &dir, "rates", "-m", "x2"])
        .assert()
        .success()
        .stdout(contains("Overtime Rate: x2"))
        .stdout(contains("Hours = 8"));

    rov()
        .args(["--data-dir", &dir, "rates", "-m", "1.5"])
        .assert()
        .success()
        .stdout(contains("Overtime Rate: x1.5"));

    rov()
        .args(["--data-dir", &dir, "rates", "-m", "x4"])
        .assert()
        .failure();
}

#[test]
fn test_help_lists_commands() {
    rov()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("report").and(contains("salary")));
}
