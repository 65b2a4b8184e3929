//! Ordered, validated collection of overtime entries.
//!
//! Every mutation is computed on a copy, saved through the [`Store`], and only
//! then swapped in: a rejected or failed call leaves the list untouched.

use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use crate::store::Store;
use crate::utils::date::parse_canonical;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryRepository {
    entries: Vec<Entry>,
}

/// Stable sort by calendar date; undated entries go last.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by_key(Entry::sort_key);
}

/// Hours typed by the user: a finite, non-negative number.
pub fn parse_hours(raw: &str) -> AppResult<f64> {
    let s = raw.trim();
    match s.parse::<f64>() {
        Ok(h) if h.is_finite() && h >= 0.0 => Ok(h),
        _ => Err(AppError::InvalidHours(s.to_string())),
    }
}

/// Strict `DD-MM-YYYY`.
pub fn parse_entry_date(raw: &str) -> AppResult<NaiveDate> {
    parse_canonical(raw).ok_or_else(|| AppError::InvalidDate(raw.trim().to_string()))
}

/// Trimmed task text, rejected when empty.
pub fn validate_task(raw: &str) -> AppResult<String> {
    let t = raw.trim();
    if t.is_empty() {
        return Err(AppError::EmptyTask);
    }
    Ok(t.to_string())
}

/// Position where `entry` lands: after every entry that sorts before or equal to it.
fn insertion_index(entries: &[Entry], entry: &Entry) -> usize {
    let key = entry.sort_key();
    entries.partition_point(|e| e.sort_key() <= key)
}

impl EntryRepository {
    pub fn new(mut entries: Vec<Entry>) -> Self {
        sort_entries(&mut entries);
        Self { entries }
    }

    pub fn load<S: Store + ?Sized>(store: &S) -> Self {
        Self::new(store.load_entries())
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index` (0-based); the error carries the 1-based position.
    pub fn get(&self, index: usize) -> AppResult<&Entry> {
        self.entries.get(index).ok_or(AppError::InvalidIndex(index + 1))
    }

    /// Persist `candidate`, then make it the current list.
    fn commit<S: Store + ?Sized>(&mut self, store: &mut S, candidate: Vec<Entry>) -> AppResult<()> {
        store.save_entries(&candidate)?;
        self.entries = candidate;
        Ok(())
    }

    /// Insert a new entry; zero hours are rejected here, unlike in edits.
    /// Returns the position of the new entry in the sorted list.
    pub fn add<S: Store + ?Sized>(
        &mut self,
        store: &mut S,
        hours: f64,
        date: &str,
        task: &str,
    ) -> AppResult<usize> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(AppError::InvalidHours(hours.to_string()));
        }
        let date = parse_entry_date(date)?;
        let task = validate_task(task)?;

        let entry = Entry::new(hours, date, &task);
        let mut candidate = self.entries.clone();
        let index = insertion_index(&candidate, &entry);
        candidate.insert(index, entry);

        self.commit(store, candidate)?;
        Ok(index)
    }

    pub fn edit_hours<S: Store + ?Sized>(
        &mut self,
        store: &mut S,
        index: usize,
        raw: &str,
    ) -> AppResult<()> {
        self.get(index)?;
        let hours = parse_hours(raw)?;

        let mut candidate = self.entries.clone();
        candidate[index].hours = hours;
        self.commit(store, candidate)
    }

    /// Replace the date and move the entry to its new sorted position,
    /// which is returned.
    pub fn edit_date<S: Store + ?Sized>(
        &mut self,
        store: &mut S,
        index: usize,
        raw: &str,
    ) -> AppResult<usize> {
        self.get(index)?;
        let date = parse_entry_date(raw)?;

        let mut candidate = self.entries.clone();
        let mut entry = candidate.remove(index);
        entry.date = crate::utils::date::format_canonical(date);
        let new_index = insertion_index(&candidate, &entry);
        candidate.insert(new_index, entry);

        self.commit(store, candidate)?;
        Ok(new_index)
    }

    pub fn edit_task<S: Store + ?Sized>(
        &mut self,
        store: &mut S,
        index: usize,
        raw: &str,
    ) -> AppResult<()> {
        self.get(index)?;
        let task = validate_task(raw)?;

        let mut candidate = self.entries.clone();
        candidate[index].task = task;
        self.commit(store, candidate)
    }

    /// Remove by position in the displayed (sorted) order.
    pub fn delete<S: Store + ?Sized>(&mut self, store: &mut S, index: usize) -> AppResult<Entry> {
        self.get(index)?;

        let mut candidate = self.entries.clone();
        let removed = candidate.remove(index);
        self.commit(store, candidate)?;
        Ok(removed)
    }

    pub fn clear<S: Store + ?Sized>(&mut self, store: &mut S) -> AppResult<()> {
        self.commit(store, Vec::new())
    }
}
