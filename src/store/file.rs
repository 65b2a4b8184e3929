//! JSON-file backend.

use crate::errors::AppResult;
use crate::models::Entry;
use crate::store::log::{LogRecord, append_record, read_records};
use crate::store::{Store, normalize_dates};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of the salary file: `{"salary": 3000}`.
#[derive(Debug, Serialize, Deserialize)]
struct SalaryFile {
    #[serde(default)]
    salary: f64,
}

#[derive(Debug, Clone)]
pub struct FileStore {
    pub salary_path: PathBuf,
    pub entries_path: PathBuf,
    pub log_path: PathBuf,
}

impl FileStore {
    pub fn new(salary_path: PathBuf, entries_path: PathBuf, log_path: PathBuf) -> Self {
        Self {
            salary_path,
            entries_path,
            log_path,
        }
    }

    pub fn from_config(cfg: &crate::config::Config) -> Self {
        Self::new(cfg.salary_path(), cfg.entries_path(), cfg.log_path())
    }

    /// Create empty data files when missing (`init`).
    pub fn ensure_files(&mut self) -> AppResult<()> {
        if !self.salary_path.exists() {
            self.save_salary(0.0)?;
        }
        if !self.entries_path.exists() {
            self.save_entries(&[])?;
        }
        Ok(())
    }

    pub fn read_log(&self) -> AppResult<Vec<LogRecord>> {
        read_records(&self.log_path)
    }

    /// Side file holding the raw text of an entries file that could not be
    /// fully read (`overtime_data.json.rejected`).
    pub fn rejected_path(&self) -> PathBuf {
        let mut name = self.entries_path.as_os_str().to_os_string();
        name.push(".rejected");
        PathBuf::from(name)
    }

    /// Copy the raw entries file aside before the next save replaces it.
    fn keep_rejected(&self, raw: &str) {
        let side = self.rejected_path();
        match fs::write(&side, raw) {
            Ok(()) => warning(format!(
                "The original content was saved to '{}'.",
                side.display()
            )),
            Err(e) => warning(format!(
                "Could not save the original content to '{}': {e}",
                side.display()
            )),
        }
    }
}

fn read_text(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }
    match fs::read_to_string(path) {
        Ok(s) => Some(s),
        Err(e) => {
            warning(format!(
                "Could not read '{}' ({e}); starting from empty data.",
                path.display()
            ));
            None
        }
    }
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Option<T> {
    let raw = read_text(path)?;
    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            warning(format!(
                "Could not read '{}' ({e}); starting from empty data.",
                path.display()
            ));
            None
        }
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

impl Store for FileStore {
    fn load_salary(&self) -> f64 {
        read_json::<SalaryFile>(&self.salary_path)
            .map(|f| f.salary)
            .filter(|s| s.is_finite())
            .unwrap_or(0.0)
    }

    fn save_salary(&mut self, value: f64) -> AppResult<()> {
        write_json(&self.salary_path, &SalaryFile { salary: value })
    }

    fn load_entries(&self) -> Vec<Entry> {
        let Some(raw) = read_text(&self.entries_path) else {
            return Vec::new();
        };

        let records: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => {
                warning(format!(
                    "Could not read '{}' ({e}); starting from empty data.",
                    self.entries_path.display()
                ));
                self.keep_rejected(&raw);
                return Vec::new();
            }
        };

        // one malformed record must not cost the others
        let mut entries = Vec::with_capacity(records.len());
        let mut rejected = 0;
        for (i, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Entry>(record) {
                Ok(e) => entries.push(e),
                Err(e) => {
                    rejected += 1;
                    warning(format!("Skipping entry {} ({e}).", i + 1));
                }
            }
        }
        if rejected > 0 {
            self.keep_rejected(&raw);
        }

        let untouched = normalize_dates(&mut entries);
        if untouched > 0 {
            warning(format!(
                "{untouched} entr{} in '{}' kept an unrecognized date.",
                if untouched == 1 { "y" } else { "ies" },
                self.entries_path.display()
            ));
        }

        entries
    }

    fn save_entries(&mut self, entries: &[Entry]) -> AppResult<()> {
        write_json(&self.entries_path, entries)
    }

    fn append_log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        append_record(&self.log_path, &LogRecord::now(operation, target, message))
    }
}
