//! Persistence of salary, entries and the internal audit log.
//!
//! `FileStore` is the real backend (two JSON files + a JSON-lines log);
//! `MemoryStore` keeps everything in process and is meant for tests.

pub mod file;
pub mod log;
pub mod memory;

pub use file::FileStore;
pub use log::LogRecord;
pub use memory::MemoryStore;

use crate::errors::AppResult;
use crate::models::Entry;

/// Backend for salary and entry persistence.
///
/// Loads never fail: a missing or unreadable source means "no prior data".
/// Saves are full overwrites and report their failure to the caller.
pub trait Store {
    fn load_salary(&self) -> f64;

    fn save_salary(&mut self, value: f64) -> AppResult<()>;

    /// Entries as stored, with dates normalized to `DD-MM-YYYY` where possible.
    fn load_entries(&self) -> Vec<Entry>;

    fn save_entries(&mut self, entries: &[Entry]) -> AppResult<()>;

    /// Append one record to the internal log.
    fn append_log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}

/// Normalize every date in place; unparsable ones are kept verbatim.
pub(crate) fn normalize_dates(entries: &mut [Entry]) -> usize {
    let mut untouched = 0;
    for e in entries.iter_mut() {
        match crate::utils::date::normalize_date(&e.date) {
            Ok(canonical) => e.date = canonical,
            Err(_) => untouched += 1,
        }
    }
    untouched
}
