#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rovertime::models::Entry;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rov() -> Command {
    cargo_bin_cmd!("rovertime")
}

/// Create a fresh, empty data directory inside the system temp dir
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rovertime_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");
    path.to_string_lossy().to_string()
}

/// Path of a not-yet-existing output directory
pub fn temp_out_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rovertime_{}_out", name));
    fs::remove_dir_all(&path).ok();
    path
}

/// Run a command against `data_dir` and require success.
pub fn run_ok(data_dir: &str, args: &[&str]) {
    let mut full = vec!["--data-dir", data_dir];
    full.extend_from_slice(args);
    rov().args(&full).assert().success();
}

/// Init the data dir (test mode: no config file) with a salary and two entries.
pub fn init_with_data(data_dir: &str) {
    run_ok(data_dir, &["--test", "init"]);
    run_ok(data_dir, &["salary", "3000"]);
    run_ok(data_dir, &["add", "5", "Release deploy", "--date", "15-02-2024"]);
    run_ok(data_dir, &["add", "3", "Hotfix", "--date", "01-02-2024"]);
}

pub fn entry(hours: f64, date: &str, task: &str) -> Entry {
    Entry {
        hours,
        date: date.to_string(),
        task: task.to_string(),
    }
}

/// Every entry is dated and the list is in calendar order.
pub fn assert_sorted(entries: &[Entry]) {
    for w in entries.windows(2) {
        let a = w[0].parsed_date().expect("dated entry");
        let b = w[1].parsed_date().expect("dated entry");
        assert!(a <= b, "{} sorted after {}", w[0].date, w[1].date);
    }
}
