//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::LazyLock;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Hours without a useless ".0": 5 → "5", 2.5 → "2.5".
pub fn fmt_hours(h: f64) -> String {
    if h.fract() == 0.0 && h.abs() < 1e15 {
        format!("{}", h as i64)
    } else {
        format!("{}", h)
    }
}

/// Money / rate figures, two decimals.
pub fn fmt_amount(v: f64) -> String {
    format!("{:.2}", v)
}

/// The one-line totals summary shown under the entry list.
pub fn totals_line(hours: f64, days: f64, amount: f64) -> String {
    format!(
        "Hours = {}  |  Days: {:.2}  |  Amount = {}",
        fmt_hours(hours),
        days,
        fmt_amount(amount)
    )
}

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}
