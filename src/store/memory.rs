//! In-process backend, handy for tests and dry runs.

use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use crate::store::{LogRecord, Store, normalize_dates};
use std::io;

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub salary: Option<f64>,
    pub entries: Option<Vec<Entry>>,
    pub log: Vec<LogRecord>,
    /// Number of successful saves (salary + entries).
    pub saves: usize,
    /// When set, every save fails with an I/O error.
    pub fail_saves: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, as if the files already existed.
    pub fn with_data(salary: f64, entries: Vec<Entry>) -> Self {
        Self {
            salary: Some(salary),
            entries: Some(entries),
            ..Self::default()
        }
    }

    fn check_writable(&self) -> AppResult<()> {
        if self.fail_saves {
            return Err(AppError::from(io::Error::other("simulated write failure")));
        }
        Ok(())
    }
}

impl Store for MemoryStore {
    fn load_salary(&self) -> f64 {
        self.salary.unwrap_or(0.0)
    }

    fn save_salary(&mut self, value: f64) -> AppResult<()> {
        self.check_writable()?;
        self.salary = Some(value);
        self.saves += 1;
        Ok(())
    }

    fn load_entries(&self) -> Vec<Entry> {
        let mut entries = self.entries.clone().unwrap_or_default();
        normalize_dates(&mut entries);
        entries
    }

    fn save_entries(&mut self, entries: &[Entry]) -> AppResult<()> {
        self.check_writable()?;
        self.entries = Some(entries.to_vec());
        self.saves += 1;
        Ok(())
    }

    fn append_log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.log.push(LogRecord::now(operation, target, message));
        Ok(())
    }
}
