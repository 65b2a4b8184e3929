use chrono::{Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

/// Storage / display format for entry dates.
pub const CANONICAL_FORMAT: &str = "%d-%m-%Y";

static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,4})[-/. ](\d{1,2})[-/. ](\d{1,4})$").expect("valid date regex")
});

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn today_str() -> String {
    format_canonical(today())
}

pub fn format_canonical(d: NaiveDate) -> String {
    d.format(CANONICAL_FORMAT).to_string()
}

/// Strict `DD-MM-YYYY` parse (used for user input).
pub fn parse_canonical(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    // chrono accepts a lone year digit for %Y, the canonical form always has four
    let year_part = s.rsplit('-').next()?;
    if year_part.len() != 4 {
        return None;
    }
    NaiveDate::parse_from_str(s, CANONICAL_FORMAT).ok()
}

/// Tolerant day-first parse used when loading stored entries.
///
/// Returns the canonical text on success; on failure hands back the raw text
/// so the caller can keep the entry unchanged.
pub fn normalize_date(raw: &str) -> Result<String, String> {
    parse_day_first(raw)
        .map(format_canonical)
        .ok_or_else(|| raw.to_string())
}

pub fn parse_day_first(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();

    if let Some(caps) = NUMERIC_DATE.captures(s) {
        let a = &caps[1];
        let b: u32 = caps[2].parse().ok()?;
        let c = &caps[3];

        // YYYY-MM-DD
        if a.len() == 4 {
            let year: i32 = a.parse().ok()?;
            let day: u32 = c.parse().ok()?;
            return NaiveDate::from_ymd_opt(year, b, day);
        }

        let first: u32 = a.parse().ok()?;
        let year = expand_year(c)?;

        // day first, month first only when the day-first reading is impossible
        return NaiveDate::from_ymd_opt(year, b, first)
            .or_else(|| NaiveDate::from_ymd_opt(year, first, b));
    }

    let dt_formats = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in dt_formats.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    let text_formats = ["%d %b %Y", "%d %B %Y", "%b %d, %Y", "%B %d, %Y", "%b %d %Y", "%B %d %Y"];
    for fmt in text_formats.iter() {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    None
}

/// Two-digit years: 00–68 → 2000s, 69–99 → 1900s.
fn expand_year(s: &str) -> Option<i32> {
    let y: i32 = s.parse().ok()?;
    match s.len() {
        4 => Some(y),
        1 | 2 if y <= 68 => Some(2000 + y),
        1 | 2 => Some(1900 + y),
        _ => None,
    }
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

/// (year, month) of the current local date.
pub fn current_year_month() -> (i32, u32) {
    let t = today();
    (t.year(), t.month())
}
