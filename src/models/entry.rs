use crate::utils::date::parse_canonical;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded overtime occurrence.
///
/// Serialized as `{hours, date, task}` ⇔ one element of the entries file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub hours: f64,   // ≥ 0
    pub date: String, // "DD-MM-YYYY" (may be raw text after a tolerant load)
    pub task: String, // never empty once validated
}

impl Entry {
    pub fn new(hours: f64, date: NaiveDate, task: &str) -> Self {
        Self {
            hours,
            date: date.format(crate::utils::date::CANONICAL_FORMAT).to_string(),
            task: task.trim().to_string(),
        }
    }

    /// Calendar date of the entry, `None` when the stored text is not canonical.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_canonical(&self.date)
    }

    /// Sort key: dated entries first in calendar order, undated ones last.
    pub fn sort_key(&self) -> (bool, Option<NaiveDate>) {
        let d = self.parsed_date();
        (d.is_none(), d)
    }
}
