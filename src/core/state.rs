//! Application state: salary + entries, owned together with their store.

use crate::core::calculator::current_rates;
use crate::core::logic::{Core, Summary};
use crate::core::repository::EntryRepository;
use crate::errors::{AppError, AppResult};
use crate::export::Report;
use crate::models::{Entry, OvertimeMultiplier, Rates};
use crate::store::Store;
use crate::ui::messages::warning;
use crate::utils::fmt_hours;

/// Parse a salary typed by the user: finite and non-negative.
pub fn parse_salary(raw: &str) -> AppResult<f64> {
    let s = raw.trim();
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(AppError::InvalidSalary(s.to_string())),
    }
}

pub struct AppState<S: Store> {
    store: S,
    salary: f64,
    entries: EntryRepository,
}

impl<S: Store> AppState<S> {
    /// Load salary and entries from `store` (missing data → 0 / empty list).
    pub fn load(store: S) -> Self {
        let salary = store.load_salary();
        let entries = EntryRepository::load(&store);
        Self {
            store,
            salary,
            entries,
        }
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn entries(&self) -> &[Entry] {
        self.entries.entries()
    }

    pub fn repository(&self) -> &EntryRepository {
        &self.entries
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Non-blocking audit trail: a failing log write only warns.
    pub fn log_event(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.store.append_log(operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }

    pub fn set_salary(&mut self, raw: &str) -> AppResult<f64> {
        let value = parse_salary(raw)?;
        self.store.save_salary(value)?;
        self.salary = value;
        self.log_event("salary", "", &format!("Salary set to {value}"));
        Ok(value)
    }

    pub fn add_entry(&mut self, hours: f64, date: &str, task: &str) -> AppResult<usize> {
        let index = self.entries.add(&mut self.store, hours, date, task)?;
        let msg = describe(&self.entries.entries()[index]);
        self.log_event("add", &format!("#{}", index + 1), &msg);
        Ok(index)
    }

    pub fn edit_hours(&mut self, index: usize, raw: &str) -> AppResult<()> {
        self.entries.edit_hours(&mut self.store, index, raw)?;
        let msg = format!("Hours set to {}", raw.trim());
        self.log_event("edit", &format!("#{}", index + 1), &msg);
        Ok(())
    }

    pub fn edit_date(&mut self, index: usize, raw: &str) -> AppResult<usize> {
        let new_index = self.entries.edit_date(&mut self.store, index, raw)?;
        // target is the position `list` shows from now on
        let msg = format!(
            "Date set to {} (was #{})",
            self.entries.entries()[new_index].date,
            index + 1
        );
        self.log_event("edit", &format!("#{}", new_index + 1), &msg);
        Ok(new_index)
    }

    pub fn edit_task(&mut self, index: usize, raw: &str) -> AppResult<()> {
        self.entries.edit_task(&mut self.store, index, raw)?;
        let msg = format!("Task set to '{}'", raw.trim());
        self.log_event("edit", &format!("#{}", index + 1), &msg);
        Ok(())
    }

    pub fn delete_entry(&mut self, index: usize) -> AppResult<Entry> {
        let removed = self.entries.delete(&mut self.store, index)?;
        let msg = describe(&removed);
        self.log_event("del", &format!("#{}", index + 1), &msg);
        Ok(removed)
    }

    /// Salary back to 0 and no entries, both persisted.
    pub fn reset(&mut self) -> AppResult<()> {
        self.store.save_salary(0.0)?;
        self.salary = 0.0;
        self.entries.clear(&mut self.store)?;
        self.log_event("reset", "", "All data has been reset");
        Ok(())
    }

    /// Daily / hourly rate for the current calendar month.
    pub fn rates(&self) -> AppResult<Rates> {
        current_rates(self.salary)
    }

    pub fn summary(&self, multiplier: OvertimeMultiplier) -> AppResult<Summary> {
        Core::build_summary(self.salary, self.entries(), multiplier)
    }

    /// Report table at the current hourly rate (no multiplier).
    pub fn report(&self) -> AppResult<Report> {
        Report::build(self.entries(), self.rates()?.hourly)
    }
}

fn describe(e: &Entry) -> String {
    format!("{}h on {}: {}", fmt_hours(e.hours), e.date, e.task)
}
